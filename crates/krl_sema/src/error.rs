//! Semantic Analysis Error Types

use krl_diagnostics::Diagnostic;
use thiserror::Error;

/// 语义分析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// 同一作用域里的重名符号，先登记的保留
    #[error("'{name}' is already defined in scope '{scope}'")]
    DuplicateDefinition { name: String, scope: String },

    /// 节点的符号表已经绑定过（同一个森林被分析了两次）
    #[error("{node} already has a symbol table")]
    ScopeAlreadyBound { node: String },

    /// 不经过 `visit_node` 直接访问文件或函数，没有所属的模块作用域
    #[error("{node} was visited outside of a module")]
    OutsideModule { node: String },
}

impl SemanticError {
    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        match self {
            SemanticError::DuplicateDefinition { .. } => {
                diag.with_note("the first definition is kept")
            }
            SemanticError::ScopeAlreadyBound { .. } => {
                diag.with_note("parse the files again before running a new analysis")
            }
            SemanticError::OutsideModule { .. } => {
                diag.with_note("analyze whole forest nodes with `SemanticAnalyzer::visit`")
            }
        }
    }
}
