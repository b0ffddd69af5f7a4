//! treedot: render source code ASTs as graphs.
//!
//! # Example
//!
//! ```
//! use treedot_lib::classify::Catalog;
//! use treedot_lib::graph::{self, BuildOptions, RenderMode};
//! use treedot_lib::syntax::{self, ParseOptions};
//!
//! let tree = syntax::parse("x = 1 + 2", &treedot_langs::python(), &ParseOptions::default())
//!     .expect("valid source");
//! let options = BuildOptions {
//!     mode: RenderMode::Optimized,
//!     ..BuildOptions::default()
//! };
//! let (graph, _diagnostics) = graph::build(&tree, &Catalog::python(), &options).unwrap();
//! assert_eq!(graph.nodes[0].label, "assignment");
//! ```

pub mod align;
pub mod classify;
pub mod diagnostics;
pub mod graph;
pub mod render;
pub mod syntax;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use graph::{Graph, GraphEdge, GraphNode, RenderMode};
pub use syntax::{Span, SyntaxNode};

/// Result type for passes that produce both output and diagnostics.
///
/// Recoverable problems (classifier gaps rendered via the generic fallback)
/// land in the `Diagnostics` half; fatal conditions use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Errors that can occur while parsing or building a graph.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed source text. Surfaced verbatim with position info.
    #[error("syntax error at {line}:{column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// No classification rule for a node kind (strict mode only).
    #[error("no classification rule for node kind `{0}`")]
    UnsupportedNodeKind(String),

    /// Classifier and builder disagree about tree shape. Always fatal.
    #[error("malformed tree: node `{kind}` is missing required field `{field}`")]
    MalformedTree { kind: String, field: String },

    /// Input tree nested deeper than the configured bound.
    #[error("recursion limit exceeded: tree depth is over {0}")]
    RecursionLimitExceeded(usize),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
