//! Map disassembled instructions back to graph nodes.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use treedot_lib::align::{self, Instruction};
use treedot_lib::graph::{self, BuildOptions};

use super::source::{parse_input, resolve_catalog};
use crate::cli::AlignArgs;

pub fn run(args: AlignArgs) {
    let listing = load_bytecode(&args.bytecode, args.input.source_path.as_deref());
    let instructions = parse_instructions(&listing);

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

    let alignment = align::align(&instructions, &graph);
    let rendered = if args.compact {
        serde_json::to_string(&alignment)
    } else {
        serde_json::to_string_pretty(&alignment)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize alignment: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_bytecode(path: &Path, source_path: Option<&Path>) -> String {
    if path.as_os_str() == "-" {
        if source_path.map(|p| p.as_os_str() == "-").unwrap_or(false) {
            eprintln!("error: bytecode and source cannot both be from stdin");
            std::process::exit(1);
        }
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("failed to read stdin");
        return buf;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read '{}': {}", path.display(), e);
        std::process::exit(1);
    })
}

/// Accepts either a JSON instruction list or a `dis`-style text listing.
fn parse_instructions(text: &str) -> Vec<Instruction> {
    match serde_json::from_str::<Vec<Instruction>>(text) {
        Ok(instructions) => instructions,
        Err(_) => align::parse_listing(text),
    }
}
