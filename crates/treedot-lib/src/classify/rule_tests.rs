use super::*;
use crate::Error;
use crate::syntax::SyntaxNode;

#[test]
fn kind_label_ignores_scalars() {
    let node = SyntaxNode::new("pass_statement").with_scalar("text", "pass");
    let class = classify(&node, &Rule::new(LabelStyle::Kind, &[])).unwrap();
    assert_eq!(class.label, "pass_statement");
    assert_eq!(class.scalar_count, 1);
}

#[test]
fn value_label_shows_scalar_text() {
    let node = SyntaxNode::new("identifier").with_scalar("text", "x");
    let class = classify(&node, &Rule::new(LabelStyle::Value, &[])).unwrap();
    assert_eq!(class.label, "x");
}

#[test]
fn value_label_falls_back_to_kind_without_scalars() {
    let node = SyntaxNode::new("tuple");
    let class = classify(&node, &Rule::new(LabelStyle::Value, &[])).unwrap();
    assert_eq!(class.label, "tuple");
}

#[test]
fn detail_label_lists_scalar_fields() {
    let node = SyntaxNode::new("binary_operator")
        .with_child("left", SyntaxNode::new("integer").with_scalar("text", "1"))
        .with_scalar("operator", "+")
        .with_child("right", SyntaxNode::new("integer").with_scalar("text", "2"));
    let class = classify(&node, &Rule::generic()).unwrap();
    assert_eq!(class.label, "binary_operator\noperator: +");
}

#[test]
fn declared_fields_come_first_in_declared_order() {
    const FIELDS: &[FieldRule] = &[FieldRule::required("right"), FieldRule::required("left")];
    let node = SyntaxNode::new("binary_operator")
        .with_child("left", SyntaxNode::new("integer"))
        .with_child("right", SyntaxNode::new("integer"))
        .with_child("extra", SyntaxNode::new("integer"));

    let class = classify(&node, &Rule::new(LabelStyle::Kind, FIELDS)).unwrap();
    let roles: Vec<&str> = class.structural.iter().map(|f| f.role).collect();
    assert_eq!(roles, ["right", "left", "extra"]);
}

#[test]
fn missing_required_field_is_malformed_tree() {
    const FIELDS: &[FieldRule] = &[FieldRule::required("left")];
    let node = SyntaxNode::new("assignment").with_child("right", SyntaxNode::new("integer"));

    let err = classify(&node, &Rule::new(LabelStyle::Kind, FIELDS)).unwrap_err();
    match err {
        Error::MalformedTree { kind, field } => {
            assert_eq!(kind, "assignment");
            assert_eq!(field, "left");
        }
        other => panic!("expected malformed tree, got {:?}", other),
    }
}

#[test]
fn missing_optional_field_is_fine() {
    const FIELDS: &[FieldRule] = &[
        FieldRule::required("left"),
        FieldRule::optional("type"),
        FieldRule::optional("right"),
    ];
    let node = SyntaxNode::new("assignment")
        .with_child("left", SyntaxNode::new("identifier"))
        .with_child("right", SyntaxNode::new("integer"));

    let class = classify(&node, &Rule::new(LabelStyle::Kind, FIELDS)).unwrap();
    let roles: Vec<&str> = class.structural.iter().map(|f| f.role).collect();
    assert_eq!(roles, ["left", "right"]);
}

#[test]
fn wrapper_child_single_node_field() {
    let node = SyntaxNode::new("parenthesized_expression")
        .with_child("children", SyntaxNode::new("integer").with_scalar("text", "1"));
    let class = classify(&node, &Rule::new(LabelStyle::Kind, &[])).unwrap();
    assert_eq!(class.wrapper_child().unwrap().kind, "integer");
}

#[test]
fn wrapper_child_singleton_sequence() {
    let node = SyntaxNode::new("module")
        .with_children("children", vec![SyntaxNode::new("pass_statement")]);
    let class = classify(&node, &Rule::new(LabelStyle::Kind, &[])).unwrap();
    assert_eq!(class.wrapper_child().unwrap().kind, "pass_statement");
}

#[test]
fn scalar_fields_disqualify_wrappers() {
    let node = SyntaxNode::new("unary_operator")
        .with_scalar("operator", "-")
        .with_child("argument", SyntaxNode::new("integer").with_scalar("text", "1"));
    let class = classify(&node, &Rule::new(LabelStyle::KindDetail, &[])).unwrap();
    assert!(class.wrapper_child().is_none());
}

#[test]
fn multiple_children_disqualify_wrappers() {
    let node = SyntaxNode::new("module").with_children(
        "children",
        vec![
            SyntaxNode::new("pass_statement"),
            SyntaxNode::new("pass_statement"),
        ],
    );
    let class = classify(&node, &Rule::new(LabelStyle::Kind, &[])).unwrap();
    assert!(class.wrapper_child().is_none());

    let two_fields = SyntaxNode::new("assignment")
        .with_child("left", SyntaxNode::new("identifier"))
        .with_child("right", SyntaxNode::new("integer"));
    let class = classify(&two_fields, &Rule::new(LabelStyle::Kind, &[])).unwrap();
    assert!(class.wrapper_child().is_none());
}

#[test]
fn python_catalog_knows_common_kinds() {
    let catalog = Catalog::python();
    assert_eq!(catalog.name(), "python");
    assert!(!catalog.is_empty());
    for kind in ["module", "assignment", "binary_operator", "identifier"] {
        assert!(catalog.get(kind).is_some(), "missing rule for `{}`", kind);
    }
    assert!(catalog.get("match_statement").is_none());
}

#[test]
fn catalog_require_reports_gap() {
    let err = Catalog::python().require("match_statement").unwrap_err();
    assert!(matches!(err, Error::UnsupportedNodeKind(kind) if kind == "match_statement"));
}

#[test]
fn generic_catalog_is_empty() {
    assert!(Catalog::generic().is_empty());
    assert_eq!(Catalog::for_language("python").unwrap().name(), "python");
    assert!(Catalog::for_language("javascript").is_none());
}
