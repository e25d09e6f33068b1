//! Parsing Error Types
//!
//! 所有结构性错误都归为 [`ParsingError`] 这一类，由变体区分具体原因。
//! 出错时整个 `add_*` 调用失败，不会留下半个 AST。

use krl_diagnostics::{Diagnostic, Span};
use thiserror::Error;

/// 解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    /// 去掉属性行之后没有任何定义
    #[error("'{file}' contains no definition")]
    MissingDefinition { file: String },

    /// 数据文件里有多个 DEFDAT 块
    #[error("'{file}' contains more than one DEFDAT block")]
    DuplicateDataDefinition { file: String, span: Span },

    /// 参数方向不是 IN/OUT/INOUT
    #[error("invalid parameter type '{found}', expected IN, OUT or INOUT")]
    InvalidParameterType { found: String, span: Span },

    /// 数组超过三维
    #[error("array '{name}' declares more than 3 dimensions")]
    ExcessArrayDimensions { name: String, span: Span },

    /// 其他结构错误（函数头、括号、缺少 END 等）
    #[error("unexpected {found}{}", format_expected(.expected))]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
        span: Span,
    },
}

impl ParsingError {
    /// 错误位置；“文件没有定义”没有具体位置
    pub fn span(&self) -> Option<Span> {
        match self {
            ParsingError::MissingDefinition { .. } => None,
            ParsingError::DuplicateDataDefinition { span, .. }
            | ParsingError::InvalidParameterType { span, .. }
            | ParsingError::ExcessArrayDimensions { span, .. }
            | ParsingError::UnexpectedToken { span, .. } => Some(span.clone()),
        }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());
        if let Some(span) = self.span() {
            diag = diag.span(span);
        }

        match self {
            ParsingError::MissingDefinition { file } => diag
                .with_file(file.clone())
                .with_note("a file needs at least one DEF, DEFFCT or DEFDAT block"),
            ParsingError::DuplicateDataDefinition { file, .. } => diag
                .with_file(file.clone())
                .with_note("a data file holds exactly one DEFDAT block"),
            ParsingError::ExcessArrayDimensions { .. } => {
                diag.with_note("KRL arrays have at most 3 dimensions")
            }
            ParsingError::InvalidParameterType { .. } | ParsingError::UnexpectedToken { .. } => {
                diag
            }
        }
    }
}

fn format_expected(expected: &[String]) -> String {
    match expected {
        [] => String::new(),
        [only] => format!(", expected {}", only),
        [init @ .., last] => format!(", expected {} or {}", init.join(", "), last),
    }
}
