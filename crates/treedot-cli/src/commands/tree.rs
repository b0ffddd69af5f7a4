//! Dump the syntax tree of a source snippet.

use treedot_lib::syntax::TreePrinter;

use super::source::parse_input;
use crate::cli::TreeArgs;

pub fn run(args: TreeArgs) {
    let (_source, _lang, tree) = parse_input(&args.input);
    print!("{}", TreePrinter::new(&tree).with_spans(args.spans).dump());
}
