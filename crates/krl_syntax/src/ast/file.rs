use crate::ast::scope::ScopeSlot;
use crate::ast::stmt::FunctionDefinition;

/// 逻辑模块：同名的程序文件和数据文件
///
/// 模块本身没有符号表，两个文件共享同一个模块作用域。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub source_file: SourceFile,
    pub data_file: DataFile,
}

/// 程序文件 (.src)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    /// 文件头部的 `&` 属性行，保持声明顺序
    pub file_attributes: Vec<FileAttribute>,
    /// 顶层只能是函数定义，至少一个
    pub statements: Vec<FunctionDefinition>,
    pub symbol_table: ScopeSlot,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, statements: Vec<FunctionDefinition>) -> Self {
        Self {
            name: name.into(),
            file_attributes: Vec::new(),
            statements,
            symbol_table: ScopeSlot::new(),
        }
    }

    pub fn with_attributes(mut self, file_attributes: Vec<FileAttribute>) -> Self {
        self.file_attributes = file_attributes;
        self
    }

    /// 按名字查找函数定义
    pub fn function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.statements.iter().find(|f| f.name == name)
    }
}

/// 数据文件 (.dat)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub name: String,
    pub file_attributes: Vec<FileAttribute>,
    /// 恰好一个 DEFDAT 块
    pub statements: Vec<DataDefinition>,
    pub symbol_table: ScopeSlot,
}

impl DataFile {
    pub fn new(name: impl Into<String>, statements: Vec<DataDefinition>) -> Self {
        Self {
            name: name.into(),
            file_attributes: Vec::new(),
            statements,
            symbol_table: ScopeSlot::new(),
        }
    }

    pub fn with_attributes(mut self, file_attributes: Vec<FileAttribute>) -> Self {
        self.file_attributes = file_attributes;
        self
    }
}

/// 文件属性行: `&ACCESS RVP` 保存为 `ACCESS RVP`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttribute {
    pub value: String,
}

impl FileAttribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// DEFDAT 块
///
/// 名字通常与模块名相同；符号表指向所在模块的作用域，本身不引入新名字。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDefinition {
    pub name: String,
    /// `DEFDAT Foo PUBLIC`
    pub is_public: bool,
    pub symbol_table: ScopeSlot,
}

impl DataDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_public: false,
            symbol_table: ScopeSlot::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}
