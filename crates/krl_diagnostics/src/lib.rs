//! KRL Diagnostics
//!
//! KRL 前端的统一诊断系统：解析错误和语义错误最终都转换成 [`Diagnostic`]，
//! 再由 [`Emitter`] 输出给调用方。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器（带源码时使用 ariadne 渲染）
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use krl_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let source = "DEFFCT INT Foo(bar:invalid)\nENDFCT";
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::error("invalid parameter type 'invalid'")
//!         .span(19..26)
//!         .with_file("Foo.src")
//!         .with_note("expected IN, OUT or INOUT"),
//! );
//!
//! if sink.has_errors() {
//!     let rendered = Emitter::without_colors().render(&sink.diagnostics()[0], Some(source));
//!     assert!(rendered.contains("invalid parameter type"));
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{line_col, Span};
