//! Render a source snippet's AST as DOT or JSON graph records.

use treedot_lib::graph::{self, BuildOptions};
use treedot_lib::render::{self, DotStyle};

use super::source::{parse_input, resolve_catalog};
use crate::cli::{FormatChoice, GraphArgs};

pub fn run(args: GraphArgs) {
    let (source, lang, tree) = parse_input(&args.input);
    let catalog = resolve_catalog(&lang);

    let options = BuildOptions {
        mode: args.build.mode.into(),
        fallback: args.build.fallback(),
        max_depth: args.input.max_depth,
    };
    let (graph, diagnostics) = match graph::build(&tree, catalog, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .source(&source)
                .colored(args.build.color.should_colorize())
                .render()
        );
    }

    match args.format {
        FormatChoice::Dot => {
            let style = DotStyle {
                fontname: args.fontname,
                fontsize: args.fontsize,
                fillcolor: args.fillcolor,
                rank_dir: args.rankdir.into(),
                ranksep: args.ranksep,
                nodesep: args.nodesep,
                splines: args.splines.into(),
                ..DotStyle::default()
            };
            print!("{}", render::to_dot(&graph, &style));
        }
        FormatChoice::Json => {
            let rendered = if args.compact {
                serde_json::to_string(&graph)
            } else {
                serde_json::to_string_pretty(&graph)
            };
            match rendered {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: failed to serialize graph: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
