//! Semantic Analyzer
//!
//! 遍历解析得到的森林，为每个词法作用域创建符号表并写回 AST：
//!
//! - 模块（或单独的文件）一张表，父表是全局表；程序文件、数据文件和 DEFDAT 块共享它
//! - 每个函数一张表 `模块.函数`，函数签名登记在模块表里
//!
//! 函数体不在这一层分析。

use crate::error::SemanticError;
use crate::scope::{ScopeId, SymbolTables};
use crate::symbol::FunctionSymbol;
use krl_syntax::ast::*;
use log::{debug, trace};

/// 语义分析器
pub struct SemanticAnalyzer {
    tables: SymbolTables,
    /// 正在访问的模块作用域，只在 `visit_node` 期间有值
    module: Option<ScopeId>,
    errors: Vec<SemanticError>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::with_tables(SymbolTables::new())
    }

    /// 复用已有的 arena，新建的模块表挂在它的全局表下
    pub fn with_tables(tables: SymbolTables) -> Self {
        Self {
            tables,
            module: None,
            errors: Vec::new(),
        }
    }

    /// 分析整个森林
    ///
    /// 出错后继续遍历，最后一起返回所有错误
    ///
    /// # Errors
    ///
    /// 重名函数或已经绑定过符号表的节点
    pub fn visit(&mut self, forest: &[Node]) -> Result<(), Vec<SemanticError>> {
        for node in forest {
            self.visit_node(node);
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }

    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    pub fn into_tables(self) -> SymbolTables {
        self.tables
    }

    /// 创建模块作用域并设为当前作用域
    fn enter_module(&mut self, name: &str) {
        let scope = self.tables.create(name, self.tables.global());
        debug!("module scope '{}' ({})", name, scope);
        self.module = Some(scope);
    }

    /// 当前模块作用域；不在模块内时记录错误
    fn current_module(&mut self, node: impl FnOnce() -> String) -> Option<ScopeId> {
        if self.module.is_none() {
            self.errors
                .push(SemanticError::OutsideModule { node: node() });
        }
        self.module
    }

    fn bind(&mut self, slot: &ScopeSlot, id: ScopeId, node: impl FnOnce() -> String) {
        if slot.bind(id).is_err() {
            self.errors
                .push(SemanticError::ScopeAlreadyBound { node: node() });
        }
    }
}

impl Visitor<()> for SemanticAnalyzer {
    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Module(module) => {
                self.enter_module(&module.name);
                self.visit_source_file(&module.source_file);
                self.visit_data_file(&module.data_file);
            }
            Node::SourceFile(file) => {
                self.enter_module(&file.name);
                self.visit_source_file(file);
            }
            Node::DataFile(file) => {
                self.enter_module(&file.name);
                self.visit_data_file(file);
            }
        }
        self.module = None;
    }

    fn visit_source_file(&mut self, file: &SourceFile) {
        let node = || format!("source file '{}'", file.name);
        let Some(module) = self.current_module(node) else {
            return;
        };
        self.bind(&file.symbol_table, module, node);
        for function in &file.statements {
            self.visit_function(function);
        }
    }

    fn visit_data_file(&mut self, file: &DataFile) {
        let node = || format!("data file '{}'", file.name);
        let Some(module) = self.current_module(node) else {
            return;
        };
        self.bind(&file.symbol_table, module, node);
        for definition in &file.statements {
            self.visit_data_definition(definition);
        }
    }

    fn visit_function(&mut self, function: &FunctionDefinition) {
        let node = || format!("function '{}'", function.name);
        let Some(module) = self.current_module(node) else {
            return;
        };
        let scope = self.tables.create(&function.name, module);
        self.bind(&function.symbol_table, scope, node);

        let symbol = FunctionSymbol::from_definition(function);
        trace!("register {}", symbol);
        if let Some(table) = self.tables.get_mut(module) {
            if let Err(err) = table.add(symbol) {
                debug!("{}", err);
                self.errors.push(err);
            }
        }
    }

    fn visit_data_definition(&mut self, definition: &DataDefinition) {
        let node = || format!("DEFDAT block '{}'", definition.name);
        if let Some(module) = self.current_module(node) {
            self.bind(&definition.symbol_table, module, node);
        }
    }
}
