//! Graph construction from syntax trees.
//!
//! [`build`] walks an immutable [`SyntaxNode`](crate::syntax::SyntaxNode)
//! tree depth-first and emits node/edge records for a rendering backend.
//! Each invocation is a pure function of (tree, options); nothing is
//! mutated in place.
//!
//! ```text
//! SyntaxNode → classify → [wrapper elision] → Graph → render (DOT/JSON)
//! ```

mod build;
mod dump;

#[cfg(test)]
mod build_tests;

pub use build::{BuildOptions, Fallback, Graph, GraphEdge, GraphNode, NodeId, RenderMode, build};
pub use dump::GraphPrinter;
