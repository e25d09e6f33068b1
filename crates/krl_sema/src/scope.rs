//! Scope Management
//!
//! 符号表存放在一个 arena 里，用 [`ScopeId`] 索引。
//! 子表只记录父表的索引，父表不保存子表列表。

use crate::error::SemanticError;
use crate::symbol::Symbol;
use std::collections::HashMap;

pub use krl_syntax::ast::ScopeId;

/// 默认的全局作用域名
pub const GLOBAL_SCOPE: &str = "GLOBAL";

/// 单个作用域的符号表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    pub id: ScopeId,
    /// 限定名: `Foo`, `Foo.Bar`；全局表就是它自己的名字
    pub name: String,
    /// 父作用域（全局作用域为 None）
    pub parent: Option<ScopeId>,
    entries: HashMap<String, Symbol>,
}

impl SymbolTable {
    fn new(id: ScopeId, name: String, parent: Option<ScopeId>) -> Self {
        Self {
            id,
            name,
            parent,
            entries: HashMap::new(),
        }
    }

    /// 在当前作用域登记符号
    ///
    /// 已存在同名符号时返回 DuplicateDefinition，原来的符号保留
    pub fn add(&mut self, symbol: impl Into<Symbol>) -> Result<(), SemanticError> {
        let symbol = symbol.into();
        if self.entries.contains_key(symbol.name()) {
            return Err(SemanticError::DuplicateDefinition {
                name: symbol.name().to_string(),
                scope: self.name.clone(),
            });
        }
        self.entries.insert(symbol.name().to_string(), symbol);
        Ok(())
    }

    /// 仅在当前作用域查找（不向上查找）
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 一次分析创建的全部符号表，下标 0 是全局作用域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTables {
    tables: Vec<SymbolTable>,
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTables {
    /// 创建只含 `GLOBAL` 全局表的 arena
    pub fn new() -> Self {
        Self::with_global_name(GLOBAL_SCOPE)
    }

    pub fn with_global_name(name: impl Into<String>) -> Self {
        let global = SymbolTable::new(ScopeId::new(0), name.into(), None);
        Self {
            tables: vec![global],
        }
    }

    /// 全局作用域
    pub fn global(&self) -> ScopeId {
        ScopeId::new(0)
    }

    /// 创建新的符号表
    ///
    /// 名字按父作用域限定：父表是全局表时不加前缀，否则为 `父名.名字`
    pub fn create(&mut self, name: &str, parent: ScopeId) -> ScopeId {
        let qualified = match self.get(parent) {
            Some(table) if table.parent.is_some() => format!("{}.{}", table.name, name),
            _ => name.to_string(),
        };

        let id = ScopeId::new(self.tables.len());
        self.tables.push(SymbolTable::new(id, qualified, Some(parent)));
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&SymbolTable> {
        self.tables.get(id.index())
    }

    pub fn get_mut(&mut self, id: ScopeId) -> Option<&mut SymbolTable> {
        self.tables.get_mut(id.index())
    }

    /// 从指定作用域开始查找符号（向上查找）
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        let mut scope_id = Some(scope);

        while let Some(id) = scope_id {
            let table = self.get(id)?;
            if let Some(symbol) = table.lookup_local(name) {
                return Some(symbol);
            }
            scope_id = table.parent;
        }

        None
    }

    /// 按限定名查找符号表
    pub fn find(&self, qualified_name: &str) -> Option<&SymbolTable> {
        self.tables.iter().find(|t| t.name == qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolTable> {
        self.tables.iter()
    }

    /// 获取作用域数量
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// 总是至少有全局表
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::FunctionSymbol;
    use krl_syntax::ast::FunctionDefinition;

    fn function(name: &str) -> FunctionSymbol {
        FunctionSymbol::from_definition(&FunctionDefinition::new(name))
    }

    #[test]
    fn test_qualified_names() {
        let mut tables = SymbolTables::new();
        let module = tables.create("Foo", tables.global());
        let func = tables.create("Bar", module);

        assert_eq!(tables.get(tables.global()).unwrap().name, "GLOBAL");
        assert_eq!(tables.get(module).unwrap().name, "Foo");
        assert_eq!(tables.get(func).unwrap().name, "Foo.Bar");
        assert_eq!(tables.get(func).unwrap().parent, Some(module));
        assert_eq!(tables.len(), 3);
    }

    #[test]
    fn test_custom_global_name() {
        let mut tables = SymbolTables::with_global_name("ROOT");
        let module = tables.create("Foo", tables.global());

        assert_eq!(tables.get(tables.global()).unwrap().name, "ROOT");
        assert_eq!(tables.get(module).unwrap().name, "Foo");
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut tables = SymbolTables::new();
        let module = tables.create("Foo", tables.global());
        let table = tables.get_mut(module).unwrap();

        table.add(function("Bar")).unwrap();
        let err = table.add(function("Bar")).unwrap_err();

        assert_eq!(
            err,
            SemanticError::DuplicateDefinition {
                name: "Bar".to_string(),
                scope: "Foo".to_string(),
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_walks_parents() {
        let mut tables = SymbolTables::new();
        let global = tables.global();
        let module = tables.create("Foo", global);
        let func = tables.create("Bar", module);

        tables.get_mut(global).unwrap().add(function("Init")).unwrap();
        tables.get_mut(module).unwrap().add(function("Bar")).unwrap();

        assert_eq!(tables.lookup(func, "Bar").map(Symbol::name), Some("Bar"));
        assert_eq!(tables.lookup(func, "Init").map(Symbol::name), Some("Init"));
        assert!(tables.lookup(func, "Missing").is_none());
        // 不向下查找
        assert!(tables.lookup(global, "Bar").is_none());
        assert!(tables.get(func).unwrap().lookup_local("Bar").is_none());
    }

    #[test]
    fn test_find_by_qualified_name() {
        let mut tables = SymbolTables::new();
        let module = tables.create("Foo", tables.global());
        let func = tables.create("Bar", module);

        assert_eq!(tables.find("Foo.Bar").map(|t| t.id), Some(func));
        assert!(tables.find("Bar").is_none());
    }
}
