//! Tree-sitter language bindings for treedot.
//!
//! Each enabled grammar is exposed as a constructor function returning a
//! shared [`Lang`] handle, plus lookup by name ([`from_name`]) and by file
//! extension ([`from_ext`]). Grammars are feature-gated so binaries only
//! link the parsers they need.

use std::sync::{Arc, LazyLock};

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Language;


/// User-facing language handle.
pub type Lang = Arc<dyn LangImpl>;

/// Unified facade over a tree-sitter grammar.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// Parse source code into a tree-sitter tree.
    fn parse(&self, source: &str) -> tree_sitter::Tree;
}

/// Concrete language implementation wrapping a tree-sitter [`Language`].
pub struct LangInner {
    name: String,
    ts_lang: Language,
}

impl LangInner {
    pub fn new(name: &str, ts_lang: Language) -> Self {
        Self {
            name: name.to_owned(),
            ts_lang,
        }
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.ts_lang)
            .expect("failed to set language");
        parser.parse(source, None).expect("failed to parse source")
    }
}

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                ts_lang: $ts_lang:expr,
                names: [$($alias:literal),* $(,)?],
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                static LANG: LazyLock<Lang> = LazyLock::new(|| {
                    Arc::new(LangInner::new($name, $ts_lang.into()))
                });
                Arc::clone(&LANG)
            }
        )*

        pub fn from_name(s: &str) -> Option<Lang> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }
    };
}

define_langs! {
    javascript => {
        feature: "lang-javascript",
        name: "javascript",
        ts_lang: arborium_javascript::language(),
        names: ["javascript", "js", "jsx", "ecmascript", "es"],
        extensions: ["js", "mjs", "cjs", "jsx"],
    },
    json => {
        feature: "lang-json",
        name: "json",
        ts_lang: arborium_json::language(),
        names: ["json"],
        extensions: ["json"],
    },
    python => {
        feature: "lang-python",
        name: "python",
        ts_lang: arborium_python::language(),
        names: ["python", "py"],
        extensions: ["py", "pyi", "pyw"],
    },
    rust => {
        feature: "lang-rust",
        name: "rust",
        ts_lang: arborium_rust::language(),
        names: ["rust", "rs"],
        extensions: ["rs"],
    },
    toml => {
        feature: "lang-toml",
        name: "toml",
        ts_lang: arborium_toml::language(),
        names: ["toml"],
        extensions: ["toml"],
    },
}
