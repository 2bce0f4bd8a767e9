//! Recover command - recover a JSON value from a text file.

use std::path::PathBuf;

use colored::Colorize;

use super::read_input;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&file)?;

    if verbose {
        eprintln!("Read {} bytes from {}", text.len(), file.display());
    }

    let value = jsonsalvage::recover(&text)?;

    match output {
        Some(path) => {
            std::fs::write(&path, serde_json::to_string(&value)?)?;
            println!(
                "{} {}",
                "Recovered JSON written to".green(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&value)?),
    }

    Ok(())
}
