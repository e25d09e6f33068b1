//! DiagnosticLevel - 诊断级别

use ariadne::ReportKind;
use colored::*;
use std::fmt;

/// 诊断级别
///
/// 解析和语义分析的失败都是 `Error`；模块与 DEFDAT 名字不一致这类
/// 不影响 AST 的问题是 `Warning`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }

    /// 终端输出用的带颜色名称
    pub fn colored_name(&self) -> ColoredString {
        let name = self.name().bold();
        match self {
            Self::Error => name.red(),
            Self::Warning => name.yellow(),
            Self::Note => name.cyan(),
        }
    }

    /// 对应的 ariadne 报告类型
    pub fn report_kind(&self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
            Self::Note => ReportKind::Advice,
        }
    }

    pub fn is_error(&self) -> bool {
        *self == Self::Error
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
