//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jsonsalvage: recover JSON from truncated and mangled text
#[derive(Parser)]
#[command(name = "jsonsalvage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover a JSON value from a text file and print it
    Recover {
        /// Path to the input file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write compact JSON to this path instead of pretty-printing to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recover a JSON value along with the surrounding prefix and suffix text
    Extract {
        /// Path to the input file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the prefix/data/suffix record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode literal \uXXXX escape sequences in a text file
    DecodeEscapes {
        /// Path to the input file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write decoded text to this path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a per-character encoding report for a piece of text
    Inspect {
        /// Text to inspect (or a file path with --file)
        #[arg(value_name = "TEXT")]
        text: String,

        /// Treat TEXT as a file path
        #[arg(long)]
        file: bool,
    },
}
