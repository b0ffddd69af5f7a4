//! Dump helpers for graph inspection and snapshot testing.

use super::build::{Graph, NodeId};

/// Printer for [`Graph`] with configurable output options.
pub struct GraphPrinter<'g> {
    graph: &'g Graph,
    show_spans: bool,
}

impl<'g> GraphPrinter<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            show_spans: false,
        }
    }

    /// Show origin spans after each node.
    pub fn show_spans(mut self, show: bool) -> Self {
        self.show_spans = show;
        self
    }

    pub fn dump(&self) -> String {
        let mut successors: Vec<Vec<(NodeId, &str)>> = vec![Vec::new(); self.graph.nodes.len()];
        for edge in &self.graph.edges {
            successors[edge.from as usize].push((edge.to, edge.role.as_str()));
        }

        let mut out = String::new();
        for node in &self.graph.nodes {
            out.push_str(&format!("N{}: {}", node.id, escape_label(&node.label)));

            if self.show_spans {
                if let Some(span) = node.span {
                    out.push_str(&format!(
                        " [{}:{}-{}:{}]",
                        span.start_line, span.start_col, span.end_line, span.end_col
                    ));
                }
            }

            let succs = &successors[node.id as usize];
            if succs.is_empty() {
                out.push_str(" → ∅");
            } else {
                let rendered: Vec<_> = succs
                    .iter()
                    .map(|(to, role)| format!("N{} ({})", to, role))
                    .collect();
                out.push_str(&format!(" → {}", rendered.join(", ")));
            }

            out.push('\n');
        }
        out
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\n', "\\n")
}

impl Graph {
    /// Create a printer for this graph.
    pub fn printer(&self) -> GraphPrinter<'_> {
        GraphPrinter::new(self)
    }

    /// Dump the graph in default format.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
