pub mod file;
pub mod scope;
pub mod stmt;
pub mod types;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 krl_syntax::ast::SourceFile 等
pub use file::{DataDefinition, DataFile, FileAttribute, Module, SourceFile};
pub use scope::{ScopeId, ScopeSlot};
pub use stmt::{FunctionCall, FunctionDefinition, Parameter, ParameterType, Statement, VariableSymbol};
pub use types::Type;
pub use visitor::Visitor;

/// AST 森林中的一个元素
///
/// `Parser` 每次 `add_*` 调用追加一个 `Node`，顺序与调用顺序一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// 成对解析的程序文件 + 数据文件
    Module(Module),
    /// 单独解析的程序文件
    SourceFile(SourceFile),
    /// 单独解析的数据文件
    DataFile(DataFile),
}

impl Node {
    /// 模块名或文件名
    pub fn name(&self) -> &str {
        match self {
            Node::Module(module) => &module.name,
            Node::SourceFile(file) => &file.name,
            Node::DataFile(file) => &file.name,
        }
    }
}

impl From<Module> for Node {
    fn from(module: Module) -> Self {
        Node::Module(module)
    }
}

impl From<SourceFile> for Node {
    fn from(file: SourceFile) -> Self {
        Node::SourceFile(file)
    }
}

impl From<DataFile> for Node {
    fn from(file: DataFile) -> Self {
        Node::DataFile(file)
    }
}
