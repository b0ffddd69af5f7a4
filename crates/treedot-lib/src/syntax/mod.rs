//! Owned syntax tree model and conversion from tree-sitter.
//!
//! The engine operates on [`SyntaxNode`], an owned tree decoupled from any
//! particular grammar library. Conversion from a tree-sitter tree happens
//! once per parse; everything downstream treats the result as immutable.
//!
//! ```text
//! source text → tree-sitter Tree → SyntaxNode → graph::build
//! ```

mod dump;
mod node;
mod parse;


pub use dump::TreePrinter;
pub use node::{FieldValue, Span, SyntaxNode};
pub use parse::{DEFAULT_MAX_DEPTH, ParseContext, ParseOptions, from_tree};

#[cfg(feature = "treedot-langs")]
pub use parse::parse;
