//! jsonsalvage CLI - recover JSON from mangled text files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recover { file, output } => commands::recover::run(file, output, cli.verbose),

        Commands::Extract { file, json } => commands::extract::run(file, json, cli.verbose),

        Commands::DecodeEscapes { file, output } => {
            commands::escapes::run(file, output, cli.verbose)
        }

        Commands::Inspect { text, file } => commands::inspect::run(text, file, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
