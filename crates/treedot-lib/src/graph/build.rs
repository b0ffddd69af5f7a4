//! Graph types and the build pass.

use std::collections::HashSet;

use serde::Serialize;

use crate::classify::{Catalog, Children, Classified, Rule, classify};
use crate::diagnostics::Diagnostics;
use crate::syntax::{DEFAULT_MAX_DEPTH, Span, SyntaxNode};
use crate::{Error, PassResult, Result};

/// Identifier of a node within one render pass.
///
/// Ids are assigned in strict pre-order visitation sequence starting at 0.
/// Consumers rely on id order matching source order; this is part of the
/// render contract, not an implementation accident.
pub type NodeId = u32;

/// Graph output policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every visited syntax node becomes its own graph node.
    #[default]
    Raw,

    /// Single-child wrapper nodes are spliced out.
    Optimized,
}

/// What to do with node kinds the catalog does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Render the node generically (kind name, all fields structural) and
    /// record a warning diagnostic.
    #[default]
    Generic,

    /// Abort the build with [`Error::UnsupportedNodeKind`].
    Strict,
}

/// Options for one build pass.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub mode: RenderMode,
    pub fallback: Fallback,
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            fallback: Fallback::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A node of the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    #[serde(rename = "origin_span", skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// A labeled edge of the rendered graph. Edges form a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub role: String,
}

/// The complete, serializable render contract: ordered node and edge
/// records from which any backend can reconstruct an identical picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn root(&self) -> Option<&GraphNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build a graph from a syntax tree.
///
/// Returns the graph plus any diagnostics (classification gaps rendered
/// via the generic fallback). Fatal conditions — unsupported kinds in
/// strict mode, malformed trees, exceeded recursion bounds — use the outer
/// `Result`.
pub fn build(tree: &SyntaxNode, catalog: &Catalog, options: &BuildOptions) -> PassResult<Graph> {
    let mut builder = Builder::new(catalog, options);
    let root = builder.resolve(tree)?;
    builder.emit(root, None, 0)?;
    Ok((
        Graph {
            nodes: builder.nodes,
            edges: builder.edges,
        },
        builder.diagnostics,
    ))
}

struct Builder<'c> {
    catalog: &'c Catalog,
    options: &'c BuildOptions,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    diagnostics: Diagnostics,
    warned_kinds: HashSet<String>,
}

impl<'c> Builder<'c> {
    fn new(catalog: &'c Catalog, options: &'c BuildOptions) -> Self {
        Self {
            catalog,
            options,
            nodes: Vec::new(),
            edges: Vec::new(),
            diagnostics: Diagnostics::new(),
            warned_kinds: HashSet::new(),
        }
    }

    /// Classify one node, applying the fallback policy on catalog gaps.
    fn classify_node<'t>(&mut self, node: &'t SyntaxNode) -> Result<Classified<'t>> {
        match self.catalog.get(&node.kind) {
            Some(rule) => classify(node, rule),
            None => match self.options.fallback {
                Fallback::Strict => Err(Error::UnsupportedNodeKind(node.kind.clone())),
                Fallback::Generic => {
                    if self.warned_kinds.insert(node.kind.clone()) {
                        self.diagnostics.warn(
                            format!("no classification rule for node kind `{}`", node.kind),
                            node.span,
                        );
                    }
                    classify(node, &Rule::generic())
                }
            },
        }
    }

    /// Resolve a node to its elision target.
    ///
    /// In optimized mode, wrapper nodes (exactly one structural field
    /// holding exactly one child, no scalar fields) are skipped and the
    /// parent's edge role is preserved across the splice. The chain is
    /// followed until a node fails the wrapper test. Raw mode is the
    /// identity.
    fn resolve<'t>(&mut self, node: &'t SyntaxNode) -> Result<&'t SyntaxNode> {
        if self.options.mode == RenderMode::Raw {
            return Ok(node);
        }
        let mut current = node;
        let mut hops = 0usize;
        loop {
            if hops > self.options.max_depth {
                return Err(Error::RecursionLimitExceeded(self.options.max_depth));
            }
            let class = self.classify_node(current)?;
            match class.wrapper_child() {
                Some(child) => {
                    current = child;
                    hops += 1;
                }
                None => return Ok(current),
            }
        }
    }

    /// Emit a graph node for `node` and recurse into its structural
    /// children, depth-first pre-order.
    fn emit(
        &mut self,
        node: &SyntaxNode,
        parent: Option<(NodeId, String)>,
        depth: usize,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(Error::RecursionLimitExceeded(self.options.max_depth));
        }

        let Classified {
            label, structural, ..
        } = self.classify_node(node)?;

        let id = self.nodes.len() as NodeId;
        self.nodes.push(GraphNode {
            id,
            label,
            span: node.span,
        });
        if let Some((from, role)) = parent {
            self.edges.push(GraphEdge { from, to: id, role });
        }

        for field in structural {
            match field.children {
                Children::One(child) => {
                    let target = self.resolve(child)?;
                    self.emit(target, Some((id, field.role.to_owned())), depth + 1)?;
                }
                Children::Many(children) => {
                    for (index, child) in children.iter().enumerate() {
                        let target = self.resolve(child)?;
                        let role = format!("{}[{}]", field.role, index);
                        self.emit(target, Some((id, role)), depth + 1)?;
                    }
                }
            }
        }

        Ok(())
    }
}
