//! Extract command - boundary-aware recovery with prefix/suffix reporting.

use std::path::PathBuf;

use colored::Colorize;

use super::read_input;

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&file)?;

    if verbose {
        eprintln!("Read {} bytes from {}", text.len(), file.display());
    }

    let result = jsonsalvage::recover_with_boundaries(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} {:?}", "Prefix:".cyan().bold(), result.prefix);
        println!("{}", "Data:".cyan().bold());
        println!("{}", serde_json::to_string_pretty(&result.data)?);
        println!("{} {:?}", "Suffix:".cyan().bold(), result.suffix);
        println!();
        println!("{} {}", "Reassembled:".cyan().bold(), result.full_string());
    }

    Ok(())
}
