//! Indented text dump of a [`SyntaxNode`] tree.
//!
//! Used by the CLI `tree` command and by snapshot tests.

use super::node::{FieldValue, SyntaxNode};

/// Printer for [`SyntaxNode`] with configurable output options.
pub struct TreePrinter<'t> {
    root: &'t SyntaxNode,
    show_spans: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(root: &'t SyntaxNode) -> Self {
        Self {
            root,
            show_spans: false,
        }
    }

    /// Show source positions after each node.
    pub fn with_spans(mut self, show: bool) -> Self {
        self.show_spans = show;
        self
    }

    pub fn dump(&self) -> String {
        format_node(self.root, None, 0, self.show_spans) + "\n"
    }
}

impl SyntaxNode {
    /// Dump the tree in default format.
    pub fn dump(&self) -> String {
        TreePrinter::new(self).dump()
    }
}

fn format_node(node: &SyntaxNode, role: Option<&str>, depth: usize, show_spans: bool) -> String {
    let indent = "  ".repeat(depth);
    // The synthetic `children` role carries no information; omit it.
    let role_prefix = match role {
        Some("children") | None => String::new(),
        Some(name) => format!("{}: ", name),
    };
    let span_suffix = match (show_spans, node.span) {
        (true, Some(span)) => format!(
            " [{}:{}-{}:{}]",
            span.start_line, span.start_col, span.end_line, span.end_col
        ),
        _ => String::new(),
    };

    let mut out = format!("{}{}({}", indent, role_prefix, node.kind);
    for (name, value) in node.scalar_fields() {
        if name == "text" {
            out.push_str(&format!(" \"{}\"", escape_text(value)));
        } else {
            out.push_str(&format!(" {}=\"{}\"", name, escape_text(value)));
        }
    }

    for (name, value) in node.structural_fields() {
        match value {
            FieldValue::Node(child) => {
                out.push('\n');
                out.push_str(&format_node(child, Some(name), depth + 1, show_spans));
            }
            FieldValue::Nodes(children) => {
                for child in children {
                    out.push('\n');
                    out.push_str(&format_node(child, Some(name), depth + 1, show_spans));
                }
            }
            FieldValue::Scalar(_) => unreachable!("structural_fields filters scalars"),
        }
    }

    out.push(')');
    out.push_str(&span_suffix);
    out
}

fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() => result.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result
}
