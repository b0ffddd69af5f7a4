//! Core syntax tree types.

use serde::Serialize;

/// Source location of a node. Lines are 1-based, columns 0-based byte
/// offsets within their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Single-line convenience constructor.
    pub fn line(line: u32) -> Self {
        Self::new(line, 0, line, 0)
    }

    /// Whether the span covers the given 1-based source line.
    pub fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Number of source lines covered (at least 1).
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }
}

/// Value of one field of a [`SyntaxNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Literal attribute: token text, operator spelling, etc.
    Scalar(String),

    /// A single child node.
    Node(Box<SyntaxNode>),

    /// An ordered sequence of child nodes.
    Nodes(Vec<SyntaxNode>),
}

impl FieldValue {
    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldValue::Scalar(_))
    }

    pub fn is_structural(&self) -> bool {
        !self.is_scalar()
    }
}

/// One node of the parsed tree.
///
/// Fields preserve source order. Each node is owned by exactly one parent;
/// the root is owned by the parse result. The tree is never mutated after
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: String,
    pub fields: Vec<(String, FieldValue)>,
    pub span: Option<Span>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FieldValue::Scalar(value.into())));
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, child: SyntaxNode) -> Self {
        self.fields
            .push((name.into(), FieldValue::Node(Box::new(child))));
        self
    }

    pub fn with_children(mut self, name: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        self.fields.push((name.into(), FieldValue::Nodes(children)));
        self
    }

    /// Append a structural child under `name`, upgrading an existing
    /// single-child field to a sequence.
    pub fn push_child(&mut self, name: &str, child: SyntaxNode) {
        let existing = self
            .fields
            .iter_mut()
            .find(|(n, v)| n == name && v.is_structural());
        match existing {
            Some((_, value)) => match value {
                FieldValue::Node(_) => {
                    let FieldValue::Node(first) =
                        std::mem::replace(value, FieldValue::Nodes(Vec::new()))
                    else {
                        unreachable!("matched Node above");
                    };
                    *value = FieldValue::Nodes(vec![*first, child]);
                }
                FieldValue::Nodes(children) => children.push(child),
                FieldValue::Scalar(_) => unreachable!("filtered to structural"),
            },
            None => {
                self.fields
                    .push((name.to_owned(), FieldValue::Node(Box::new(child))));
            }
        }
    }

    /// Append a scalar field. Repeated names are kept as separate entries.
    pub fn push_scalar(&mut self, name: &str, value: &str) {
        self.fields
            .push((name.to_owned(), FieldValue::Scalar(value.to_owned())));
    }

    /// Iterate scalar fields in source order.
    pub fn scalar_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|(name, value)| match value {
            FieldValue::Scalar(s) => Some((name.as_str(), s.as_str())),
            _ => None,
        })
    }

    /// Iterate structural fields in source order.
    pub fn structural_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_structural())
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Move all structural children out of this node, in source order.
    pub fn into_structural_children(self) -> Vec<SyntaxNode> {
        let mut children = Vec::new();
        for (_, value) in self.fields {
            match value {
                FieldValue::Scalar(_) => {}
                FieldValue::Node(child) => children.push(*child),
                FieldValue::Nodes(nodes) => children.extend(nodes),
            }
        }
        children
    }

    /// True if the node has no structural children.
    pub fn is_leaf(&self) -> bool {
        self.structural_fields().next().is_none()
    }
}
