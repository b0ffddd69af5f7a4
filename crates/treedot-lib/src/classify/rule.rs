//! Classification rules and the classification pass itself.

use crate::syntax::{FieldValue, SyntaxNode};
use crate::{Error, Result};

/// How a node's display label is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// The node kind alone (`assignment`).
    #[default]
    Kind,

    /// The kind plus one `name: value` line per scalar field
    /// (`binary_operator` + `operator: +`).
    KindDetail,

    /// The scalar values alone, space-joined (`identifier` shows `x`,
    /// `integer` shows `1`).
    Value,
}

/// Declared structural field of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Classification rule for one node kind.
///
/// `fields` lists structural fields in display order. Fields present on a
/// node but not declared here follow in source order; declared required
/// fields missing from a node are a [`Error::MalformedTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub label: LabelStyle,
    pub fields: &'static [FieldRule],
}

impl Rule {
    pub const fn new(label: LabelStyle, fields: &'static [FieldRule]) -> Self {
        Self { label, fields }
    }

    /// Fallback rule for kinds with no catalog entry: kind name plus
    /// scalar detail, all structural fields in source order.
    pub const fn generic() -> Self {
        Self {
            label: LabelStyle::KindDetail,
            fields: &[],
        }
    }
}

/// Structural children reachable through one field.
#[derive(Debug, Clone, Copy)]
pub enum Children<'t> {
    One(&'t SyntaxNode),
    Many(&'t [SyntaxNode]),
}

/// One structural field of a classified node, in display order.
#[derive(Debug, Clone, Copy)]
pub struct StructuralField<'t> {
    pub role: &'t str,
    pub children: Children<'t>,
}

/// Result of classifying one node.
#[derive(Debug, Clone)]
pub struct Classified<'t> {
    pub label: String,
    pub scalar_count: usize,
    pub structural: Vec<StructuralField<'t>>,
}

impl<'t> Classified<'t> {
    /// The single structural child if this node is a wrapper: exactly one
    /// structural field holding exactly one child, and no scalar fields.
    pub fn wrapper_child(&self) -> Option<&'t SyntaxNode> {
        if self.scalar_count != 0 || self.structural.len() != 1 {
            return None;
        }
        match self.structural[0].children {
            Children::One(child) => Some(child),
            Children::Many(children) if children.len() == 1 => Some(&children[0]),
            Children::Many(_) => None,
        }
    }
}

/// Classify a node under the given rule.
///
/// Returns the display label and the structural fields in display order
/// (declared fields first, then undeclared ones in source order).
pub fn classify<'t>(node: &'t SyntaxNode, rule: &Rule) -> Result<Classified<'t>> {
    let mut structural: Vec<StructuralField<'t>> = node
        .structural_fields()
        .map(|(role, value)| StructuralField {
            role,
            children: match value {
                FieldValue::Node(child) => Children::One(child),
                FieldValue::Nodes(children) => Children::Many(children),
                FieldValue::Scalar(_) => unreachable!("structural_fields filters scalars"),
            },
        })
        .collect();

    let mut ordered = Vec::with_capacity(structural.len());
    for declared in rule.fields {
        match structural.iter().position(|f| f.role == declared.name) {
            Some(index) => ordered.push(structural.remove(index)),
            None if declared.required => {
                return Err(Error::MalformedTree {
                    kind: node.kind.clone(),
                    field: declared.name.to_owned(),
                });
            }
            None => {}
        }
    }
    ordered.extend(structural);

    Ok(Classified {
        label: build_label(node, rule.label),
        scalar_count: node.scalar_fields().count(),
        structural: ordered,
    })
}

fn build_label(node: &SyntaxNode, style: LabelStyle) -> String {
    match style {
        LabelStyle::Kind => node.kind.clone(),
        LabelStyle::KindDetail => {
            let mut label = node.kind.clone();
            for (name, value) in node.scalar_fields() {
                label.push('\n');
                label.push_str(name);
                label.push_str(": ");
                label.push_str(value);
            }
            label
        }
        LabelStyle::Value => {
            let values: Vec<&str> = node.scalar_fields().map(|(_, value)| value).collect();
            if values.is_empty() {
                node.kind.clone()
            } else {
                values.join(" ")
            }
        }
    }
}
