//! Bytecode-to-graph alignment.
//!
//! Instructions come from an external disassembler; each carries at most a
//! source line number. Alignment maps every instruction to the innermost
//! graph node whose origin span covers that line, so a bytecode pane can
//! cross-highlight against the rendered tree.

mod listing;

#[cfg(test)]
mod align_tests;
#[cfg(test)]
mod listing_tests;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId};

pub use listing::parse_listing;

/// One low-level instruction as supplied by the disassembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<String>,
    /// Originating 1-based source line. `None` for synthetic instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Instruction {
    pub fn new(opcode: impl Into<String>) -> Self {
        Self {
            opcode: opcode.into(),
            operand: None,
            line: None,
        }
    }

    pub fn with_operand(mut self, operand: impl Into<String>) -> Self {
        self.operand = Some(operand.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// Instruction-index → graph-node mapping.
///
/// Index `i` holds the aligned node for instruction `i`, or `None` when the
/// instruction carries no line information or no node covers its line.
pub type Alignment = Vec<Option<NodeId>>;

/// Align instructions against a built graph.
///
/// Innermost-wins: among nodes whose span covers the instruction's line,
/// the one spanning the fewest lines is chosen; remaining ties go to the
/// latest visitation id (the deeper node in pre-order). Instructions
/// without line information map to `None` rather than failing.
pub fn align(instructions: &[Instruction], graph: &Graph) -> Alignment {
    instructions
        .iter()
        .map(|instruction| instruction.line.and_then(|line| innermost_at(graph, line)))
        .collect()
}

fn innermost_at(graph: &Graph, line: u32) -> Option<NodeId> {
    let mut best: Option<(u32, NodeId)> = None;
    for node in &graph.nodes {
        let Some(span) = node.span else { continue };
        if !span.contains_line(line) {
            continue;
        }
        let width = span.line_count();
        let candidate = (width, node.id);
        best = match best {
            Some((best_width, best_id)) if best_width < width => Some((best_width, best_id)),
            // Equal width: later id wins, and node ids are ascending.
            _ => Some(candidate),
        };
    }
    best.map(|(_, id)| id)
}
