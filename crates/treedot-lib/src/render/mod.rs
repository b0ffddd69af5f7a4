//! Render adapters for graph output.
//!
//! The serializable [`Graph`](crate::graph::Graph) records are the
//! backend-neutral contract; this module additionally ships a Graphviz DOT
//! emitter with a configurable style block.

mod dot;


pub use dot::{ALLOWED_FONTS, DEFAULT_FONT, DotStyle, RankDir, Splines, to_dot};
