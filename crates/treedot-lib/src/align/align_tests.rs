use super::*;
use crate::graph::{GraphEdge, GraphNode};
use crate::syntax::Span;

fn spanning_graph() -> Graph {
    // module spans lines 1-3; two statements on lines 1 and 2-3.
    Graph {
        nodes: vec![
            GraphNode {
                id: 0,
                label: "module".to_owned(),
                span: Some(Span::new(1, 0, 3, 10)),
            },
            GraphNode {
                id: 1,
                label: "assignment".to_owned(),
                span: Some(Span::new(1, 0, 1, 5)),
            },
            GraphNode {
                id: 2,
                label: "x".to_owned(),
                span: Some(Span::new(1, 0, 1, 1)),
            },
            GraphNode {
                id: 3,
                label: "while_statement".to_owned(),
                span: Some(Span::new(2, 0, 3, 10)),
            },
        ],
        edges: vec![
            GraphEdge {
                from: 0,
                to: 1,
                role: "children[0]".to_owned(),
            },
            GraphEdge {
                from: 0,
                to: 3,
                role: "children[1]".to_owned(),
            },
        ],
    }
}

#[test]
fn innermost_node_wins() {
    let instructions = vec![
        Instruction::new("LOAD_CONST").with_operand("0 (1)").with_line(1),
        Instruction::new("JUMP_BACKWARD").with_line(3),
    ];

    let alignment = align(&instructions, &spanning_graph());
    // Line 1: module (3 lines), assignment (1 line), x (1 line) all cover
    // it; the single-line nodes win and the tie breaks to the later id.
    assert_eq!(alignment, vec![Some(2), Some(3)]);
}

#[test]
fn synthetic_instructions_map_to_none() {
    let instructions = vec![Instruction::new("RESUME")];
    let alignment = align(&instructions, &spanning_graph());
    assert_eq!(alignment, vec![None]);
}

#[test]
fn uncovered_lines_map_to_none() {
    let instructions = vec![Instruction::new("LOAD_NAME").with_line(42)];
    let alignment = align(&instructions, &spanning_graph());
    assert_eq!(alignment, vec![None]);
}

#[test]
fn spanless_nodes_are_ignored() {
    let graph = Graph {
        nodes: vec![GraphNode {
            id: 0,
            label: "module".to_owned(),
            span: None,
        }],
        edges: Vec::new(),
    };
    let instructions = vec![Instruction::new("LOAD_NAME").with_line(1)];
    assert_eq!(align(&instructions, &graph), vec![None]);
}

#[test]
fn empty_inputs() {
    assert_eq!(align(&[], &spanning_graph()), Vec::<Option<u32>>::new());

    let empty = Graph {
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let instructions = vec![Instruction::new("NOP").with_line(1)];
    assert_eq!(align(&instructions, &empty), vec![None]);
}

#[test]
fn instructions_deserialize_from_json() {
    let instructions: Vec<Instruction> = serde_json::from_str(
        r#"[
            {"opcode": "LOAD_CONST", "operand": "0 (1)", "line": 1},
            {"opcode": "RESUME"}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        instructions,
        vec![
            Instruction::new("LOAD_CONST").with_operand("0 (1)").with_line(1),
            Instruction::new("RESUME"),
        ]
    );
}

#[test]
fn alignment_serializes_with_nulls() {
    let instructions = vec![
        Instruction::new("LOAD_CONST").with_line(1),
        Instruction::new("RESUME"),
    ];
    let alignment = align(&instructions, &spanning_graph());
    let json = serde_json::to_string(&alignment).unwrap();
    assert_eq!(json, "[2,null]");
}
