//! Parser Module
//!
//! 基于 chumsky 组合子的语法分析。对外入口是 [`Parser`]：
//! 每次 `add_*` 解析一个文件（或一对文件），把结果按调用顺序追加到 AST 森林。

pub mod decl;
pub mod error;
pub mod helpers;
pub mod stmt;

#[cfg(test)]
mod property_tests;

use crate::ast::{DataDefinition, DataFile, Module, Node, ScopeSlot, SourceFile};
use crate::error::ParsingError;
use crate::lexer::{lex, Token};
use chumsky::Stream;
use error::SyntaxError;
use krl_diagnostics::{Diagnostic, DiagnosticSink};
use log::{debug, trace, warn};

/// 累积 AST 森林的解析器
///
/// 解析失败时森林保持不变，不会追加半个结果。
/// 不影响结果的问题记录为警告，见 [`Parser::diagnostics`]。
#[derive(Debug, Default)]
pub struct Parser {
    ast: Vec<Node>,
    diagnostics: DiagnosticSink,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析程序文件并追加到森林
    ///
    /// 返回值是追加节点的副本；语义分析绑定的符号表只会出现在 [`Parser::ast`] 里的节点上。
    ///
    /// # Errors
    ///
    /// 没有任何函数定义或存在结构错误时返回 [`ParsingError`]
    pub fn add_source_file(&mut self, name: &str, text: &str) -> Result<SourceFile, ParsingError> {
        let file = parse_source_file(name, text)?;
        self.ast.push(Node::SourceFile(file.clone()));
        Ok(file)
    }

    /// 解析数据文件并追加到森林
    ///
    /// # Errors
    ///
    /// DEFDAT 块数量不是 1 或存在结构错误时返回 [`ParsingError`]
    pub fn add_data_file(&mut self, name: &str, text: &str) -> Result<DataFile, ParsingError> {
        let file = parse_data_file(name, text)?;
        self.ast.push(Node::DataFile(file.clone()));
        Ok(file)
    }

    /// 成对解析程序文件和数据文件，组合成模块后追加到森林
    ///
    /// # Errors
    ///
    /// 任意一个文件失败时返回它的错误，森林不变
    pub fn add_module(
        &mut self,
        name: &str,
        source_text: &str,
        data_text: &str,
    ) -> Result<Module, ParsingError> {
        let module = parse_module(name, source_text, data_text)?;
        for definition in mismatched_data_definitions(&module) {
            self.diagnostics.add(
                Diagnostic::warning(format!(
                    "DEFDAT block '{}' does not match module '{}'",
                    definition.name, module.name
                ))
                .with_file(module.name.clone()),
            );
        }
        self.ast.push(Node::Module(module.clone()));
        Ok(module)
    }

    /// 解析过程中记录的警告
    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// 到目前为止解析的森林，顺序与调用顺序一致
    pub fn ast(&self) -> &[Node] {
        &self.ast
    }

    pub fn into_ast(self) -> Vec<Node> {
        self.ast
    }
}

/// 解析一个程序文件
///
/// # Errors
///
/// 见 [`Parser::add_source_file`]
pub fn parse_source_file(name: &str, text: &str) -> Result<SourceFile, ParsingError> {
    let (file_attributes, statements) = run(decl::source_file_parser(text), text)?;
    if statements.is_empty() {
        return Err(ParsingError::MissingDefinition {
            file: name.to_string(),
        });
    }

    debug!(
        "parsed source file '{}': {} attribute(s), {} function(s)",
        name,
        file_attributes.len(),
        statements.len()
    );
    Ok(SourceFile {
        name: name.to_string(),
        file_attributes,
        statements,
        symbol_table: ScopeSlot::new(),
    })
}

/// 解析一个数据文件
///
/// # Errors
///
/// 见 [`Parser::add_data_file`]
pub fn parse_data_file(name: &str, text: &str) -> Result<DataFile, ParsingError> {
    let (file_attributes, definitions) = run(decl::data_file_parser(), text)?;

    let mut definitions = definitions.into_iter();
    let Some((definition, _)) = definitions.next() else {
        return Err(ParsingError::MissingDefinition {
            file: name.to_string(),
        });
    };
    if let Some((_, span)) = definitions.next() {
        return Err(ParsingError::DuplicateDataDefinition {
            file: name.to_string(),
            span,
        });
    }

    debug!(
        "parsed data file '{}': DEFDAT {}{}",
        name,
        definition.name,
        if definition.is_public { " PUBLIC" } else { "" }
    );
    Ok(DataFile {
        name: name.to_string(),
        file_attributes,
        statements: vec![definition],
        symbol_table: ScopeSlot::new(),
    })
}

/// 解析同名的程序文件和数据文件并组合成模块
///
/// # Errors
///
/// 见 [`Parser::add_module`]
pub fn parse_module(name: &str, source_text: &str, data_text: &str) -> Result<Module, ParsingError> {
    let source_file = parse_source_file(name, source_text)?;
    let data_file = parse_data_file(name, data_text)?;
    let module = Module {
        name: name.to_string(),
        source_file,
        data_file,
    };

    for definition in mismatched_data_definitions(&module) {
        warn!(
            "module '{}': DEFDAT block is named '{}'",
            name, definition.name
        );
    }
    Ok(module)
}

/// 名字与模块名不一致的 DEFDAT 块
fn mismatched_data_definitions(module: &Module) -> impl Iterator<Item = &DataDefinition> {
    module
        .data_file
        .statements
        .iter()
        .filter(move |definition| definition.name != module.name)
}

/// 词法分析 + 运行一个文件级语法
fn run<T>(
    grammar: impl chumsky::Parser<Token, T, Error = SyntaxError>,
    source: &str,
) -> Result<T, ParsingError> {
    let tokens = lex(source);
    trace!("lexed {} token(s)", tokens.len());

    let eoi = source.len()..source.len() + 1;
    grammar
        .parse(Stream::from_iter(eoi.clone(), tokens.into_iter()))
        .map_err(|errors| match errors.into_iter().next() {
            // 没有错误恢复，chumsky 只会给出一个错误
            Some(first) => first.into(),
            None => ParsingError::UnexpectedToken {
                expected: Vec::new(),
                found: "end of input".to_string(),
                span: eoi,
            },
        })
}
