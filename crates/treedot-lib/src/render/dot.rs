//! Graphviz DOT emitter.

use std::fmt::{self, Write};

use crate::graph::Graph;

/// Font used when the requested one is not in [`ALLOWED_FONTS`].
pub const DEFAULT_FONT: &str = "Menlo";

/// Fonts known to render consistently across Graphviz backends.
pub const ALLOWED_FONTS: &[&str] = &["Menlo", "Monaco", "Helvetica", "JetBrains Mono"];

/// Graph layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TopBottom,
    LeftRight,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::TopBottom => write!(f, "TB"),
            RankDir::LeftRight => write!(f, "LR"),
        }
    }
}

/// Edge routing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Splines {
    #[default]
    Spline,
    Line,
    Polyline,
    Ortho,
}

impl fmt::Display for Splines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Splines::Spline => write!(f, "true"),
            Splines::Line => write!(f, "line"),
            Splines::Polyline => write!(f, "polyline"),
            Splines::Ortho => write!(f, "ortho"),
        }
    }
}

/// Style block for DOT output.
#[derive(Debug, Clone)]
pub struct DotStyle {
    pub fontname: String,
    pub fontsize: u32,
    pub fontcolor: String,
    pub penwidth: f32,
    pub border_color: String,
    pub fillcolor: String,
    pub edge_fontsize: u32,
    pub edge_fontcolor: String,
    pub edge_penwidth: f32,
    pub edge_arrowsize: f32,
    pub edge_color: String,
    pub width_in: Option<f32>,
    pub height_in: Option<f32>,
    pub rank_dir: RankDir,
    pub ranksep: f32,
    pub nodesep: f32,
    pub splines: Splines,
    pub force_fit: bool,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            fontname: DEFAULT_FONT.to_owned(),
            fontsize: 15,
            fontcolor: "#000000".to_owned(),
            penwidth: 1.0,
            border_color: "#000000".to_owned(),
            fillcolor: "#E5FDCD".to_owned(),
            edge_fontsize: 12,
            edge_fontcolor: "#555555".to_owned(),
            edge_penwidth: 1.0,
            edge_arrowsize: 0.5,
            edge_color: "#000000".to_owned(),
            width_in: None,
            height_in: None,
            rank_dir: RankDir::default(),
            ranksep: 0.4,
            nodesep: 0.25,
            splines: Splines::default(),
            force_fit: true,
        }
    }
}

impl DotStyle {
    /// The effective font: the requested one if allowed, [`DEFAULT_FONT`]
    /// otherwise.
    pub fn font(&self) -> &str {
        if ALLOWED_FONTS.contains(&self.fontname.as_str()) {
            &self.fontname
        } else {
            DEFAULT_FONT
        }
    }

    fn size_attr(&self) -> Option<String> {
        let fit = if self.force_fit { "!" } else { "" };
        match (self.width_in, self.height_in) {
            (Some(w), Some(h)) => Some(format!("size=\"{},{}{}\"", w, h, fit)),
            (Some(w), None) => Some(format!("size=\"{}{}\"", w, fit)),
            (None, Some(h)) => Some(format!("size=\"100,{}{}\"", h, fit)),
            (None, None) => None,
        }
    }

    fn block(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut impl Write) -> fmt::Result {
        let font = self.font();
        writeln!(w, "graph [")?;
        writeln!(w, "    bgcolor=\"transparent\"")?;
        writeln!(w, "    fontname=\"{}\"", font)?;
        writeln!(w, "    fontcolor=\"{}\"", self.fontcolor)?;
        writeln!(w, "    fontsize={}", self.fontsize)?;
        writeln!(w, "    fontnames=\"ps\"")?;
        if let Some(size) = self.size_attr() {
            writeln!(w, "    {}", size)?;
        }
        writeln!(w, "    rankdir={}", self.rank_dir)?;
        writeln!(w, "    ranksep={}", self.ranksep)?;
        writeln!(w, "    nodesep={}", self.nodesep)?;
        writeln!(w, "    splines={}", self.splines)?;
        writeln!(w, "    ratio=compress")?;
        writeln!(w, "]")?;
        writeln!(w, "node [")?;
        writeln!(w, "    fontname=\"{}\"", font)?;
        writeln!(w, "    fontcolor=\"{}\"", self.fontcolor)?;
        writeln!(w, "    fontsize={}", self.fontsize)?;
        writeln!(w, "    shape=box")?;
        writeln!(w, "    style=\"rounded, filled\"")?;
        writeln!(w, "    fillcolor=\"{}\"", self.fillcolor)?;
        writeln!(w, "    penwidth={}", self.penwidth)?;
        writeln!(w, "    color=\"{}\"", self.border_color)?;
        writeln!(w, "]")?;
        writeln!(w, "edge [")?;
        writeln!(w, "    fontname=\"{}\"", font)?;
        writeln!(w, "    fontcolor=\"{}\"", self.edge_fontcolor)?;
        writeln!(w, "    fontsize={}", self.edge_fontsize)?;
        writeln!(w, "    penwidth={}", self.edge_penwidth)?;
        writeln!(w, "    arrowsize={}", self.edge_arrowsize)?;
        writeln!(w, "    color=\"{}\"", self.edge_color)?;
        writeln!(w, "]")?;
        Ok(())
    }
}

/// Render a graph as a Graphviz digraph.
pub fn to_dot(graph: &Graph, style: &DotStyle) -> String {
    let mut out = String::new();
    out.push_str("digraph G {\n");
    out.push_str(&style.block());
    for node in &graph.nodes {
        out.push_str(&format!(
            "{} [label=\"{}\"]\n",
            node.id,
            escape_string(&node.label)
        ));
    }
    for edge in &graph.edges {
        out.push_str(&format!(
            "{} -> {} [label=\"{}\"]\n",
            edge.from,
            edge.to,
            escape_string(&edge.role)
        ));
    }
    out.push_str("}\n");
    out
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c if c.is_control() => result.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result
}
