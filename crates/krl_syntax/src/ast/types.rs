use std::fmt::{self, Display};

/// 类型引用
///
/// KRL 的基础类型 (INT, REAL, BOOL, CHAR) 和结构类型 (FRAME, E6POS 等)
/// 在语法层都只是名字，这里按源码原样保存。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    pub name: String,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
