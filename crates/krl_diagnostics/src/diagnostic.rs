//! Diagnostic - 诊断信息

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 诊断信息
///
/// 采用 builder 风格构造：
///
/// ```rust
/// use krl_diagnostics::Diagnostic;
///
/// let diag = Diagnostic::error("'Foo' contains no definition")
///     .with_file("Foo.dat")
///     .with_note("a data file needs exactly one DEFDAT block");
/// assert_eq!(diag.file.as_deref(), Some("Foo.dat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选，例如“文件没有定义”就没有具体位置）
    pub span: Option<Span>,
    /// 所属文件（模块名或文件名）
    pub file: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            file: None,
            notes: Vec::new(),
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 创建注释诊断
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Note, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置所属文件
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("excess array dimensions")
            .span(12..13)
            .with_file("Foo.src")
            .with_note("at most 3 dimensions are allowed");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "excess array dimensions");
        assert_eq!(diag.span, Some(12..13));
        assert_eq!(diag.file.as_deref(), Some("Foo.src"));
        assert_eq!(diag.notes, vec!["at most 3 dimensions are allowed"]);
    }

    #[test]
    fn test_different_levels() {
        assert_eq!(Diagnostic::error("e").level, DiagnosticLevel::Error);
        assert_eq!(Diagnostic::warning("w").level, DiagnosticLevel::Warning);
        assert_eq!(Diagnostic::note("n").level, DiagnosticLevel::Note);
    }

    #[test]
    fn test_multiple_notes_keep_order() {
        let diag = Diagnostic::error("test").with_note("first").with_note("second");
        assert_eq!(diag.notes, vec!["first", "second"]);
        assert!(diag.span.is_none());
        assert!(diag.file.is_none());
    }
}
