//! Conversion from tree-sitter trees into the owned [`SyntaxNode`] model.

use arborium_tree_sitter as tree_sitter;

use crate::{Error, Result};

use super::node::{Span, SyntaxNode};

/// Default bound on tree depth during conversion.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parse context: whole file or single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseContext {
    /// The source is a whole module (any number of statements).
    #[default]
    Module,

    /// The source must be exactly one expression statement; its expression
    /// becomes the root of the returned tree.
    Expression,
}

/// Options controlling parsing and conversion.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub context: ParseContext,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            context: ParseContext::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse source text with the given language and convert to a [`SyntaxNode`].
#[cfg(feature = "treedot-langs")]
pub fn parse(source: &str, lang: &treedot_langs::Lang, options: &ParseOptions) -> Result<SyntaxNode> {
    let tree = lang.parse(source);
    from_tree(&tree, source, options)
}

/// Convert an already-parsed tree-sitter tree into a [`SyntaxNode`].
///
/// Fails with [`Error::Parse`] when the tree contains error or missing
/// nodes, and with [`Error::RecursionLimitExceeded`] when nesting exceeds
/// `options.max_depth`.
pub fn from_tree(
    tree: &tree_sitter::Tree,
    source: &str,
    options: &ParseOptions,
) -> Result<SyntaxNode> {
    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(root));
    }

    let converted = convert(root, source, 0, options.max_depth)?;
    match options.context {
        ParseContext::Module => Ok(converted),
        ParseContext::Expression => unwrap_expression(converted),
    }
}

/// Locate the first error or missing node and report its position.
fn syntax_error(root: tree_sitter::Node) -> Error {
    fn find_error(node: tree_sitter::Node) -> Option<(tree_sitter::Point, String)> {
        if node.is_error() {
            return Some((node.start_position(), "invalid syntax".to_owned()));
        }
        if node.is_missing() {
            return Some((node.start_position(), format!("missing `{}`", node.kind())));
        }
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.has_error() || child.is_missing() {
                    if let Some(found) = find_error(child) {
                        return Some(found);
                    }
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        None
    }

    let (position, message) = find_error(root)
        .unwrap_or_else(|| (root.start_position(), "invalid syntax".to_owned()));
    Error::Parse {
        message,
        line: position.row as u32 + 1,
        column: position.column as u32,
    }
}

/// Recursive conversion of one tree-sitter node.
///
/// Mapping rules:
/// - named children with a grammar field name land under that field
/// - named children without one are collected under `children`
/// - anonymous children WITH a field name (e.g. `operator: "+"`) become
///   scalar fields holding the token text
/// - anonymous children without a field name (punctuation) and extras
///   (comments) are dropped
/// - a node left with no fields at all carries its token text as the
///   `text` scalar
fn convert(
    node: tree_sitter::Node,
    source: &str,
    depth: usize,
    max_depth: usize,
) -> Result<SyntaxNode> {
    if depth > max_depth {
        return Err(Error::RecursionLimitExceeded(max_depth));
    }

    let mut out = SyntaxNode::new(node.kind()).with_span(span_of(node));

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            let field = cursor.field_name();
            if !child.is_extra() {
                match (child.is_named(), field) {
                    (true, Some(name)) => {
                        out.push_child(name, convert(child, source, depth + 1, max_depth)?);
                    }
                    (true, None) => {
                        out.push_child("children", convert(child, source, depth + 1, max_depth)?);
                    }
                    (false, Some(name)) => {
                        out.push_scalar(name, text_of(child, source));
                    }
                    (false, None) => {}
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    if out.fields.is_empty() {
        out.push_scalar("text", text_of(node, source));
    }

    Ok(out)
}

fn span_of(node: tree_sitter::Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        start.row as u32 + 1,
        start.column as u32,
        end.row as u32 + 1,
        end.column as u32,
    )
}

fn text_of<'s>(node: tree_sitter::Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("<invalid utf8>")
}

/// Unwrap `module > expression_statement > expr` down to the expression.
fn unwrap_expression(module: SyntaxNode) -> Result<SyntaxNode> {
    let span = module.span;
    let mut statements = module.into_structural_children();
    if statements.len() != 1 {
        return Err(expression_error(
            format!(
                "expression context requires exactly one statement, found {}",
                statements.len()
            ),
            span,
        ));
    }

    let statement = statements.pop().expect("length checked above");
    if statement.kind != "expression_statement" {
        return Err(expression_error(
            format!("expression context requires an expression, found `{}`", statement.kind),
            statement.span,
        ));
    }

    let mut inner = statement.into_structural_children();
    if inner.len() != 1 {
        return Err(expression_error(
            "expression context requires a single expression".to_owned(),
            span,
        ));
    }
    Ok(inner.pop().expect("length checked above"))
}

fn expression_error(message: String, span: Option<Span>) -> Error {
    let (line, column) = span.map_or((1, 0), |s| (s.start_line, s.start_col));
    Error::Parse {
        message,
        line,
        column,
    }
}
