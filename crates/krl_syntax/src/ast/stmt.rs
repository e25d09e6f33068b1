use crate::ast::scope::ScopeSlot;
use crate::ast::types::Type;
use std::fmt;

/// 函数定义
///
/// `DEF Foo(a:IN) ... END` 是没有返回值的过程，
/// `DEFFCT INT Foo() ... ENDFCT` 是带返回类型的函数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// `GLOBAL` 修饰
    pub is_global: bool,
    /// None 表示 DEF 过程
    pub returns: Option<Type>,
    pub body: Vec<Statement>,
    pub symbol_table: ScopeSlot,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            is_global: false,
            returns: None,
            body: Vec::new(),
            symbol_table: ScopeSlot::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn global(mut self) -> Self {
        self.is_global = true;
        self
    }

    pub fn returning(mut self, ty: Type) -> Self {
        self.returns = Some(ty);
        self
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = body;
        self
    }

    pub fn is_procedure(&self) -> bool {
        self.returns.is_none()
    }
}

/// 形参，顺序必须与调用处实参一致
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub parameter_type: ParameterType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// 参数方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// 只读输入
    In,
    /// 输出
    Out,
    /// 输入输出
    InOut,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterType::In => write!(f, "IN"),
            ParameterType::Out => write!(f, "OUT"),
            ParameterType::InOut => write!(f, "INOUT"),
        }
    }
}

/// 函数体内的语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// DECL INT a, b[10]：每个逗号分隔的名字各自一个语句
    VariableDeclaration(VariableSymbol),

    /// Foo(a, 1)
    FunctionCall(FunctionCall),

    /// 这一层不处理的语句（赋值、运动指令、IF/LOOP 等），保存整行原文
    Unsupported(String),
}

/// 局部变量声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSymbol {
    pub name: String,
    pub symbol_type: Type,
    /// 空表示标量；1 到 3 个元素表示数组维度
    pub dimensions: Vec<u32>,
}

impl VariableSymbol {
    /// 数组最多三维
    pub const MAX_DIMENSIONS: usize = 3;

    pub fn new(name: impl Into<String>, symbol_type: Type) -> Self {
        Self {
            name: name.into(),
            symbol_type,
            dimensions: Vec::new(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: Vec<u32>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_array(&self) -> bool {
        !self.dimensions.is_empty()
    }
}

/// 函数调用语句
///
/// 实参在这一层只保存标识符或字面量的原文，不做解析。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub parameters: Vec<String>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

impl From<VariableSymbol> for Statement {
    fn from(symbol: VariableSymbol) -> Self {
        Statement::VariableDeclaration(symbol)
    }
}

impl From<FunctionCall> for Statement {
    fn from(call: FunctionCall) -> Self {
        Statement::FunctionCall(call)
    }
}
