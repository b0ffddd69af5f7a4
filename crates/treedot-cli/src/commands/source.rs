//! Shared input loading for commands taking a source snippet.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use treedot_langs::Lang;
use treedot_lib::classify::Catalog;
use treedot_lib::syntax::{ParseOptions, SyntaxNode};

use crate::cli::InputArgs;

/// Load source text, resolve the language, and parse.
///
/// Exits the process with a message on usage or syntax errors; commands
/// only ever see a valid tree.
pub fn parse_input(args: &InputArgs) -> (String, Lang, SyntaxNode) {
    let source = load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let lang = resolve_lang(
        args.lang.as_deref(),
        args.source_path.as_deref(),
        args.source_text.is_some(),
    );

    let options = ParseOptions {
        context: args.context.into(),
        max_depth: args.max_depth,
    };
    match treedot_lib::syntax::parse(&source, &lang, &options) {
        Ok(tree) => (source, lang, tree),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// The classification catalog for a language, or the generic fallback
/// catalog when none is shipped.
pub fn resolve_catalog(lang: &Lang) -> &'static Catalog {
    Catalog::for_language(lang.name()).unwrap_or_else(Catalog::generic)
}

pub fn load_source(source_text: Option<&str>, source_path: Option<&Path>) -> String {
    match (source_text, source_path) {
        (Some(text), None) => text.to_owned(),
        (None, Some(path)) => {
            if path.as_os_str() == "-" {
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
        (Some(_), Some(_)) => {
            eprintln!("error: cannot use both --source and positional SOURCE");
            std::process::exit(1);
        }
        (None, None) => {
            eprintln!("error: source required (positional or --source)");
            std::process::exit(1);
        }
    }
}

pub fn resolve_lang(lang: Option<&str>, source_path: Option<&Path>, is_inline: bool) -> Lang {
    if let Some(name) = lang {
        return treedot_langs::from_name(name).unwrap_or_else(|| {
            eprintln!("error: unknown language: {}", name);
            eprintln!();
            eprintln!("Run 'treedot langs' for the full list.");
            std::process::exit(1);
        });
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
    {
        return treedot_langs::from_ext(ext).unwrap_or_else(|| {
            eprintln!(
                "error: cannot infer language from extension '.{}', use -l/--lang",
                ext
            );
            std::process::exit(1);
        });
    }

    if is_inline {
        eprintln!("error: -l/--lang is required when using inline source");
    } else {
        eprintln!("error: -l/--lang is required (cannot infer from stdin)");
    }
    std::process::exit(1);
}
