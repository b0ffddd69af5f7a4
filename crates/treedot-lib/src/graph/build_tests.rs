use super::*;
use crate::Error;
use crate::classify::Catalog;
use crate::syntax::{Span, SyntaxNode};

fn assign_tree() -> SyntaxNode {
    SyntaxNode::new("module").with_child(
        "children",
        SyntaxNode::new("expression_statement").with_child(
            "children",
            SyntaxNode::new("assignment")
                .with_child(
                    "left",
                    SyntaxNode::new("identifier").with_scalar("text", "x"),
                )
                .with_child(
                    "right",
                    SyntaxNode::new("binary_operator")
                        .with_child(
                            "left",
                            SyntaxNode::new("integer").with_scalar("text", "1"),
                        )
                        .with_scalar("operator", "+")
                        .with_child(
                            "right",
                            SyntaxNode::new("integer").with_scalar("text", "2"),
                        ),
                ),
        ),
    )
}

fn build_raw(tree: &SyntaxNode) -> (Graph, crate::Diagnostics) {
    build(tree, Catalog::python(), &BuildOptions::default()).expect("build succeeds")
}

#[test]
fn raw_mode_emits_every_node() {
    let (graph, diagnostics) = build_raw(&assign_tree());
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(graph.dump(), @r"
    N0: module → N1 (children)
    N1: expression_statement → N2 (children)
    N2: assignment → N3 (left), N4 (right)
    N3: x → ∅
    N4: binary_operator\noperator: + → N5 (left), N6 (right)
    N5: 1 → ∅
    N6: 2 → ∅
    ");
}

#[test]
fn ids_follow_preorder() {
    let (graph, _) = build_raw(&assign_tree());
    for (index, node) in graph.nodes.iter().enumerate() {
        assert_eq!(node.id as usize, index);
    }
    // Pre-order: every edge points forward in visitation order.
    for edge in &graph.edges {
        assert!(edge.from < edge.to);
    }
}

#[test]
fn edges_form_a_forest() {
    let (graph, _) = build_raw(&assign_tree());

    let mut in_degree = vec![0usize; graph.len()];
    for edge in &graph.edges {
        in_degree[edge.to as usize] += 1;
    }

    assert_eq!(in_degree[0], 0, "root has no incoming edge");
    for (id, degree) in in_degree.iter().enumerate().skip(1) {
        assert_eq!(*degree, 1, "node {} must have in-degree 1", id);
    }
}

#[test]
fn two_builds_are_identical() {
    let tree = assign_tree();
    let options = BuildOptions::default();
    let (first, _) = build(&tree, Catalog::python(), &options).unwrap();
    let (second, _) = build(&tree, Catalog::python(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sequence_fields_get_indexed_roles() {
    let tree = SyntaxNode::new("module").with_children(
        "children",
        vec![
            SyntaxNode::new("pass_statement").with_scalar("text", "pass"),
            SyntaxNode::new("break_statement").with_scalar("text", "break"),
        ],
    );

    let (graph, _) = build_raw(&tree);
    insta::assert_snapshot!(graph.dump(), @r"
    N0: module → N1 (children[0]), N2 (children[1])
    N1: pass_statement → ∅
    N2: break_statement → ∅
    ");
}

#[test]
fn single_leaf_builds_one_node() {
    let tree = SyntaxNode::new("integer").with_scalar("text", "42");
    let (graph, _) = build_raw(&tree);
    assert_eq!(graph.len(), 1);
    assert!(graph.edges.is_empty());
    assert_eq!(graph.root().unwrap().label, "42");
}

#[test]
fn unknown_kind_renders_generic_fallback() {
    let tree = SyntaxNode::new("module").with_children(
        "children",
        vec![
            SyntaxNode::new("mystery_node")
                .with_scalar("flavor", "odd")
                .with_child("payload", SyntaxNode::new("integer").with_scalar("text", "1")),
            SyntaxNode::new("pass_statement").with_scalar("text", "pass"),
        ],
    );

    let (graph, diagnostics) = build_raw(&tree);
    assert_eq!(diagnostics.warning_count(), 1);
    assert!(
        diagnostics
            .render()
            .contains("no classification rule for node kind `mystery_node`")
    );
    // The sibling subtree still renders.
    insta::assert_snapshot!(graph.dump(), @r"
    N0: module → N1 (children[0]), N3 (children[1])
    N1: mystery_node\nflavor: odd → N2 (payload)
    N2: 1 → ∅
    N3: pass_statement → ∅
    ");
}

#[test]
fn unknown_kind_warning_deduplicated() {
    let tree = SyntaxNode::new("module").with_children(
        "children",
        vec![
            SyntaxNode::new("mystery_node"),
            SyntaxNode::new("mystery_node"),
        ],
    );
    let (_, diagnostics) = build_raw(&tree);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn strict_fallback_aborts_on_unknown_kind() {
    let tree = SyntaxNode::new("mystery_node");
    let options = BuildOptions {
        fallback: Fallback::Strict,
        ..BuildOptions::default()
    };
    let err = build(&tree, Catalog::python(), &options).unwrap_err();
    assert!(matches!(err, Error::UnsupportedNodeKind(kind) if kind == "mystery_node"));
}

#[test]
fn malformed_tree_is_fatal() {
    // `assignment` declares a required `left` field.
    let tree = SyntaxNode::new("assignment")
        .with_child("right", SyntaxNode::new("integer").with_scalar("text", "1"));
    let err = build(&tree, Catalog::python(), &BuildOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedTree { .. }));
}

#[test]
fn recursion_limit_bounds_raw_walk() {
    let mut tree = SyntaxNode::new("integer").with_scalar("text", "1");
    for _ in 0..600 {
        tree = SyntaxNode::new("parenthesized_expression").with_child("children", tree);
    }

    let err = build(&tree, Catalog::python(), &BuildOptions::default()).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded(_)));

    let relaxed = BuildOptions {
        max_depth: 1000,
        ..BuildOptions::default()
    };
    let (graph, _) = build(&tree, Catalog::python(), &relaxed).unwrap();
    assert_eq!(graph.len(), 601);
}

#[test]
fn recursion_limit_names_the_bound() {
    let tree = SyntaxNode::new("pass_statement");
    let options = BuildOptions {
        max_depth: 7,
        ..BuildOptions::default()
    };
    let mut deep = tree;
    for _ in 0..20 {
        deep = SyntaxNode::new("parenthesized_expression").with_child("children", deep);
    }
    let err = build(&deep, Catalog::python(), &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "recursion limit exceeded: tree depth is over 7"
    );
}

#[test]
fn render_contract_serializes_nodes_and_edges() {
    let tree = SyntaxNode::new("expression_statement")
        .with_span(Span::new(1, 0, 1, 5))
        .with_child(
            "children",
            SyntaxNode::new("identifier")
                .with_span(Span::new(1, 0, 1, 1))
                .with_scalar("text", "x"),
        );

    let (graph, _) = build_raw(&tree);
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["nodes"][0]["id"], 0);
    assert_eq!(json["nodes"][0]["label"], "expression_statement");
    assert_eq!(json["nodes"][0]["origin_span"]["start_line"], 1);
    assert_eq!(json["nodes"][1]["label"], "x");
    assert_eq!(json["edges"][0]["from"], 0);
    assert_eq!(json["edges"][0]["to"], 1);
    assert_eq!(json["edges"][0]["role"], "children");
}

#[test]
fn spanless_nodes_omit_origin_span() {
    let tree = SyntaxNode::new("pass_statement");
    let (graph, _) = build_raw(&tree);
    let json = serde_json::to_value(&graph).unwrap();
    assert!(json["nodes"][0].get("origin_span").is_none());
}

#[cfg(feature = "treedot-langs")]
mod parsed {
    use super::*;
    use crate::syntax::{ParseOptions, parse};

    #[test]
    fn assignment_module_raw() {
        let tree = parse(
            "x = 1 + 2",
            &treedot_langs::python(),
            &ParseOptions::default(),
        )
        .unwrap();
        let (graph, diagnostics) =
            build(&tree, Catalog::python(), &BuildOptions::default()).unwrap();
        assert!(diagnostics.is_empty());
        insta::assert_snapshot!(graph.dump(), @r"
        N0: module → N1 (children)
        N1: expression_statement → N2 (children)
        N2: assignment → N3 (left), N4 (right)
        N3: x → ∅
        N4: binary_operator\noperator: + → N5 (left), N6 (right)
        N5: 1 → ∅
        N6: 2 → ∅
        ");
    }

    #[test]
    fn graph_node_spans_cover_source_lines() {
        let tree = parse(
            "x = 1\ny = 2\n",
            &treedot_langs::python(),
            &ParseOptions::default(),
        )
        .unwrap();
        let (graph, _) = build(&tree, Catalog::python(), &BuildOptions::default()).unwrap();

        let root_span = graph.root().unwrap().span.unwrap();
        assert_eq!(root_span.start_line, 1);
        assert!(root_span.end_line >= 2);
    }
}
