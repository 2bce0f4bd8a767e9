//! Decode-escapes command - decode literal \uXXXX sequences in a file.

use std::borrow::Cow;
use std::path::PathBuf;

use colored::Colorize;

use super::read_input;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&file)?;
    let decoded = jsonsalvage::decode_unicode_escapes(&text);

    if verbose {
        let changed = if matches!(decoded, Cow::Borrowed(_)) {
            "no escapes found"
        } else {
            "escapes decoded"
        };
        eprintln!("Read {} bytes from {} ({})", text.len(), file.display(), changed);
    }

    match output {
        Some(path) => {
            std::fs::write(&path, decoded.as_bytes())?;
            println!("{} {}", "Decoded content written to".green(), path.display());
        }
        None => println!("{}", decoded),
    }

    Ok(())
}
