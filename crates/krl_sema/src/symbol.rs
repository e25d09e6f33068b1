//! Symbol Definitions
//!
//! 符号表里登记的命名实体。目前只有函数，新的实体类型加新变体即可。

use krl_syntax::ast::{FunctionDefinition, Parameter, Type};
use std::fmt;

/// 符号
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Function(FunctionSymbol),
}

impl Symbol {
    /// 获取符号名称
    pub fn name(&self) -> &str {
        match self {
            Symbol::Function(f) => &f.name,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match self {
            Symbol::Function(f) => Some(f),
        }
    }
}

impl From<FunctionSymbol> for Symbol {
    fn from(symbol: FunctionSymbol) -> Self {
        Symbol::Function(symbol)
    }
}

/// 函数符号
///
/// 对应 `DEF Foo(a:IN)` 或 `DEFFCT INT Foo()`，登记在模块作用域里
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// None 表示 DEF 过程
    pub returns: Option<Type>,
}

impl FunctionSymbol {
    /// 从函数定义复制签名
    pub fn from_definition(definition: &FunctionDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            parameters: definition.parameters.clone(),
            returns: definition.returns.clone(),
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{}:{}", p.name, p.parameter_type))
            .collect();
        match &self.returns {
            Some(ty) => write!(f, "DEFFCT {} {}({})", ty, self.name, params.join(", ")),
            None => write!(f, "DEF {}({})", self.name, params.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krl_syntax::ast::ParameterType;

    #[test]
    fn test_from_definition_copies_signature() {
        let definition = FunctionDefinition::new("Foo")
            .with_parameters(vec![
                Parameter::new("bar", ParameterType::In),
                Parameter::new("foobar", ParameterType::Out),
            ])
            .returning(Type::new("INT"))
            .global();

        let symbol = FunctionSymbol::from_definition(&definition);
        assert_eq!(symbol.name, "Foo");
        assert_eq!(symbol.arity(), 2);
        assert_eq!(symbol.returns, Some(Type::new("INT")));
        assert_eq!(symbol.to_string(), "DEFFCT INT Foo(bar:IN, foobar:OUT)");
    }

    #[test]
    fn test_procedure_display() {
        let symbol = FunctionSymbol::from_definition(&FunctionDefinition::new("Bar"));
        assert_eq!(symbol.to_string(), "DEF Bar()");
        assert_eq!(Symbol::from(symbol).name(), "Bar");
    }
}
