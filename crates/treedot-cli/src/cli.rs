//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use treedot_lib::graph::{Fallback, RenderMode};
use treedot_lib::render::{RankDir, Splines};
use treedot_lib::syntax::{DEFAULT_MAX_DEPTH, ParseContext};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ModeChoice {
    #[default]
    Raw,
    Optimized,
}

impl From<ModeChoice> for RenderMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Raw => RenderMode::Raw,
            ModeChoice::Optimized => RenderMode::Optimized,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ContextChoice {
    #[default]
    Module,
    Expression,
}

impl From<ContextChoice> for ParseContext {
    fn from(choice: ContextChoice) -> Self {
        match choice {
            ContextChoice::Module => ParseContext::Module,
            ContextChoice::Expression => ParseContext::Expression,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatChoice {
    #[default]
    Dot,
    Json,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum RankDirChoice {
    #[default]
    Tb,
    Lr,
}

impl From<RankDirChoice> for RankDir {
    fn from(choice: RankDirChoice) -> Self {
        match choice {
            RankDirChoice::Tb => RankDir::TopBottom,
            RankDirChoice::Lr => RankDir::LeftRight,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SplinesChoice {
    #[default]
    True,
    Line,
    Polyline,
    Ortho,
}

impl From<SplinesChoice> for Splines {
    fn from(choice: SplinesChoice) -> Self {
        match choice {
            SplinesChoice::True => Splines::Spline,
            SplinesChoice::Line => Splines::Line,
            SplinesChoice::Polyline => Splines::Polyline,
            SplinesChoice::Ortho => Splines::Ortho,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "treedot", bin_name = "treedot")]
#[command(about = "Render source code ASTs as graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the AST of a source snippet as a graph
    #[command(after_help = r#"EXAMPLES:
  treedot graph app.py
  treedot graph -s 'x = 1 + 2' -l python --mode optimized
  treedot graph app.py --format json | jq '.nodes'"#)]
    Graph(GraphArgs),

    /// Dump the syntax tree in indented form
    Tree(TreeArgs),

    /// Map disassembled instructions back to graph nodes
    #[command(after_help = r#"EXAMPLES:
  python -c 'import dis; dis.dis(open("app.py").read())' > app.dis
  treedot align --bytecode app.dis app.py"#)]
    Align(AlignArgs),

    /// List supported languages
    Langs,
}

#[derive(Args)]
pub struct InputArgs {
    /// Source file to parse (`-` for stdin)
    #[arg(value_name = "SOURCE")]
    pub source_path: Option<PathBuf>,

    /// Inline source text
    #[arg(short = 's', long = "source", value_name = "TEXT")]
    pub source_text: Option<String>,

    /// Language (inferred from extension if not specified)
    #[arg(short = 'l', long = "lang", value_name = "LANG")]
    pub lang: Option<String>,

    /// Parse context
    #[arg(long, value_enum, default_value_t = ContextChoice::Module)]
    pub context: ContextChoice,

    /// Bound on tree depth
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Graph output policy
    #[arg(long, value_enum, default_value_t = ModeChoice::Raw)]
    pub mode: ModeChoice,

    /// Abort on node kinds without a classification rule
    #[arg(long)]
    pub strict: bool,

    /// Colorize diagnostics
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

impl BuildArgs {
    pub fn fallback(&self) -> Fallback {
        if self.strict {
            Fallback::Strict
        } else {
            Fallback::Generic
        }
    }
}

#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatChoice::Dot)]
    pub format: FormatChoice,

    /// Output compact JSON (default: pretty)
    #[arg(long)]
    pub compact: bool,

    /// Node font
    #[arg(long, value_name = "FONT", default_value = "Menlo")]
    pub fontname: String,

    /// Node font size
    #[arg(long, default_value_t = 15)]
    pub fontsize: u32,

    /// Node fill color
    #[arg(long, value_name = "COLOR", default_value = "#E5FDCD")]
    pub fillcolor: String,

    /// Layout direction
    #[arg(long, value_enum, default_value_t = RankDirChoice::Tb)]
    pub rankdir: RankDirChoice,

    /// Vertical separation between ranks
    #[arg(long, default_value_t = 0.4)]
    pub ranksep: f32,

    /// Horizontal separation between nodes
    #[arg(long, default_value_t = 0.25)]
    pub nodesep: f32,

    /// Edge routing
    #[arg(long, value_enum, default_value_t = SplinesChoice::True)]
    pub splines: SplinesChoice,
}

#[derive(Args)]
pub struct TreeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show source positions
    #[arg(long)]
    pub spans: bool,
}

#[derive(Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Disassembly to align: JSON instruction list or `dis`-style listing
    #[arg(long, value_name = "FILE", required = true)]
    pub bytecode: PathBuf,

    /// Output compact JSON (default: pretty)
    #[arg(long)]
    pub compact: bool,
}
