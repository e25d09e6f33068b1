//! Emitter - 诊断渲染
//!
//! 把诊断渲染成字符串，由调用方决定写到哪里。有源码和位置时用 ariadne 画出带源码片段的报告，否则退回到单行纯文本。

use crate::diagnostic::Diagnostic;
use crate::span::line_col;
use ariadne::{Color, Config, Label, Report, Source};
use colored::*;

/// 没有文件名时报告里使用的占位名
const ANONYMOUS_FILE: &str = "<source>";

/// 诊断输出器
pub struct Emitter {
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器（测试和日志文件使用）
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 渲染成字符串
    pub fn render(&self, diagnostic: &Diagnostic, source: Option<&str>) -> String {
        match (source, &diagnostic.span) {
            (Some(src), Some(_)) => self
                .render_report(diagnostic, src)
                .unwrap_or_else(|| self.render_plain(diagnostic, source)),
            _ => self.render_plain(diagnostic, source),
        }
    }

    fn render_report(&self, diagnostic: &Diagnostic, source: &str) -> Option<String> {
        let span = diagnostic.span.clone()?;
        // ariadne 要求 span 落在源码范围内；文件末尾的错误 span 会越界一个字符
        let start = span.start.min(source.len());
        let end = span.end.clamp(start, source.len());

        let file = diagnostic
            .file
            .clone()
            .unwrap_or_else(|| ANONYMOUS_FILE.to_string());
        let kind = diagnostic.level.report_kind();

        let mut label = Label::new((file.clone(), start..end)).with_message(&diagnostic.message);
        if self.use_colors {
            label = label.with_color(Color::Red);
        }

        let mut builder = Report::build(kind, file.clone(), start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(label);
        if !diagnostic.notes.is_empty() {
            builder = builder.with_note(diagnostic.notes.join("\n"));
        }

        let mut out = Vec::new();
        builder
            .finish()
            .write((file, Source::from(source)), &mut out)
            .ok()?;
        Some(String::from_utf8_lossy(&out).into_owned())
    }

    fn render_plain(&self, diagnostic: &Diagnostic, source: Option<&str>) -> String {
        let mut out = if self.use_colors {
            format!(
                "{}: {}\n",
                diagnostic.level.colored_name(),
                diagnostic.message.bold()
            )
        } else {
            format!("{}: {}\n", diagnostic.level, diagnostic.message)
        };

        let file = diagnostic.file.as_deref().unwrap_or(ANONYMOUS_FILE);
        match (&diagnostic.span, source) {
            (Some(span), Some(src)) => {
                let (line, column) = line_col(src, span.start);
                out.push_str(&format!("  --> {}:{}:{}\n", file, line, column));
            }
            (Some(span), None) => {
                out.push_str(&format!("  --> {} @ {:?}\n", file, span));
            }
            (None, _) if diagnostic.file.is_some() => {
                out.push_str(&format!("  --> {}\n", file));
            }
            (None, _) => {}
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        out
    }
}
