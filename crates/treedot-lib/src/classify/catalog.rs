//! Static classification catalogs, one per supported grammar.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{Error, Result};

use super::rule::{FieldRule, LabelStyle, Rule};

/// Kind → rule table for one grammar.
///
/// Iteration order is insertion order, so enumeration (docs, debugging) is
/// deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: &'static str,
    rules: IndexMap<&'static str, Rule>,
}

impl Catalog {
    pub fn new(name: &'static str, entries: &[(&'static str, Rule)]) -> Self {
        Self {
            name,
            rules: entries.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the rule for a kind.
    pub fn get(&self, kind: &str) -> Option<&Rule> {
        self.rules.get(kind)
    }

    /// Look up the rule for a kind, failing on a classification gap.
    pub fn require(&self, kind: &str) -> Result<&Rule> {
        self.rules
            .get(kind)
            .ok_or_else(|| Error::UnsupportedNodeKind(kind.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate all known kinds in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Catalog for the tree-sitter Python grammar.
    pub fn python() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> = LazyLock::new(build_python);
        &CATALOG
    }

    /// Empty catalog: every kind goes through the generic fallback.
    pub fn generic() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new("generic", &[]));
        &CATALOG
    }

    /// Shipped catalog for a language, by name.
    pub fn for_language(name: &str) -> Option<&'static Catalog> {
        match name {
            "python" => Some(Self::python()),
            _ => None,
        }
    }
}

const fn kind() -> Rule {
    Rule::new(LabelStyle::Kind, &[])
}

const fn kind_with(fields: &'static [FieldRule]) -> Rule {
    Rule::new(LabelStyle::Kind, fields)
}

const fn detail(fields: &'static [FieldRule]) -> Rule {
    Rule::new(LabelStyle::KindDetail, fields)
}

const fn value() -> Rule {
    Rule::new(LabelStyle::Value, &[])
}

const fn req(name: &'static str) -> FieldRule {
    FieldRule::required(name)
}

const fn opt(name: &'static str) -> FieldRule {
    FieldRule::optional(name)
}

/// Covers the common statement and expression kinds of tree-sitter-python.
/// Anything outside this table goes through the generic fallback.
fn build_python() -> Catalog {
    const ENTRIES: &[(&str, Rule)] = &[
            // Structure
            ("module", kind()),
            ("block", kind()),
            ("expression_statement", kind()),
            ("parenthesized_expression", kind()),
            // Scalar-bearing leaves
            ("identifier", value()),
            ("integer", value()),
            ("float", value()),
            ("true", value()),
            ("false", value()),
            ("none", value()),
            ("ellipsis", value()),
            ("string_start", value()),
            ("string_content", value()),
            ("string_end", value()),
            // Strings are composite in this grammar (start/content/end)
            ("string", kind()),
            ("concatenated_string", kind()),
            ("interpolation", kind()),
            // Operators
            ("binary_operator", detail(&[req("left"), req("right")])),
            ("boolean_operator", detail(&[req("left"), req("right")])),
            ("comparison_operator", detail(&[])),
            ("unary_operator", detail(&[req("argument")])),
            ("not_operator", kind_with(&[req("argument")])),
            ("augmented_assignment", detail(&[req("left"), req("right")])),
            ("assignment", kind_with(&[req("left"), opt("type"), opt("right")])),
            ("conditional_expression", kind()),
            ("lambda", kind_with(&[opt("parameters"), req("body")])),
            ("await", kind()),
            // Calls and accessors
            ("call", kind_with(&[req("function"), req("arguments")])),
            ("argument_list", kind()),
            ("keyword_argument", kind_with(&[req("name"), req("value")])),
            ("attribute", kind_with(&[req("object"), req("attribute")])),
            ("subscript", kind_with(&[req("value"), req("subscript")])),
            ("slice", kind()),
            // Containers
            ("tuple", kind()),
            ("list", kind()),
            ("set", kind()),
            ("dictionary", kind()),
            ("pair", kind_with(&[req("key"), req("value")])),
            ("list_comprehension", kind_with(&[req("body")])),
            ("set_comprehension", kind_with(&[req("body")])),
            ("dictionary_comprehension", kind_with(&[req("body")])),
            ("generator_expression", kind_with(&[req("body")])),
            ("for_in_clause", kind_with(&[req("left"), req("right")])),
            ("if_clause", kind()),
            // Definitions
            (
                "function_definition",
                kind_with(&[req("name"), req("parameters"), opt("return_type"), req("body")]),
            ),
            ("parameters", kind()),
            ("default_parameter", kind_with(&[req("name"), req("value")])),
            ("typed_parameter", kind_with(&[req("type")])),
            (
                "typed_default_parameter",
                kind_with(&[req("name"), req("type"), req("value")]),
            ),
            (
                "class_definition",
                kind_with(&[req("name"), opt("superclasses"), req("body")]),
            ),
            ("decorated_definition", kind_with(&[req("definition")])),
            ("decorator", kind()),
            ("type", kind()),
            // Compound statements
            (
                "if_statement",
                kind_with(&[req("condition"), req("consequence"), opt("alternative")]),
            ),
            ("elif_clause", kind_with(&[req("condition"), req("consequence")])),
            ("else_clause", kind_with(&[req("body")])),
            (
                "while_statement",
                kind_with(&[req("condition"), req("body"), opt("alternative")]),
            ),
            (
                "for_statement",
                kind_with(&[req("left"), req("right"), req("body"), opt("alternative")]),
            ),
            ("with_statement", kind_with(&[req("body")])),
            ("with_clause", kind()),
            ("with_item", kind_with(&[req("value")])),
            ("try_statement", kind_with(&[req("body")])),
            ("except_clause", kind()),
            ("finally_clause", kind()),
            // Simple statements
            ("return_statement", kind()),
            ("pass_statement", kind()),
            ("break_statement", kind()),
            ("continue_statement", kind()),
            ("raise_statement", kind()),
            ("assert_statement", kind()),
            ("delete_statement", kind()),
            ("global_statement", kind()),
            ("nonlocal_statement", kind()),
            ("yield", kind()),
            // Imports
            ("import_statement", kind()),
            ("import_from_statement", kind_with(&[req("module_name")])),
            ("dotted_name", kind()),
            ("aliased_import", kind_with(&[req("name"), req("alias")])),
    ];
    Catalog::new("python", ENTRIES)
}
