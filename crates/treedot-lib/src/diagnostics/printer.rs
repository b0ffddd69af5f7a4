//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::syntax::Span;

use super::{Diagnostics, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        if self.diagnostics.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let level = severity_to_level(diag.severity);

            let report = match diag.span {
                Some(span) => {
                    let range = span_to_range(span, source);
                    let mut snippet = Snippet::source(source).line_start(1).annotation(
                        AnnotationKind::Primary.span(range).label(&diag.message),
                    );
                    if let Some(p) = self.path {
                        snippet = snippet.path(p);
                    }
                    vec![level.primary_title(&diag.message).element(snippet)]
                }
                None => vec![Group::with_title(level.primary_title(&diag.message))],
            };

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Convert a line/column span into a byte range within `source`.
fn span_to_range(span: Span, source: &str) -> std::ops::Range<usize> {
    let start = byte_offset(source, span.start_line, span.start_col);
    let end = byte_offset(source, span.end_line, span.end_col).max(start);
    if start == end {
        return start..(start + 1).min(source.len());
    }
    start..end
}

fn byte_offset(source: &str, line: u32, col: u32) -> usize {
    let mut remaining = line.saturating_sub(1);
    let mut offset = 0usize;
    for (i, c) in source.char_indices() {
        if remaining == 0 {
            break;
        }
        if c == '\n' {
            remaining -= 1;
            offset = i + 1;
        }
    }
    (offset + col as usize).min(source.len())
}
