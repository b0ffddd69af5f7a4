mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Graph(args) => commands::graph::run(args),
        Command::Tree(args) => commands::tree::run(args),
        Command::Align(args) => commands::align::run(args),
        Command::Langs => commands::langs::run(),
    }
}
