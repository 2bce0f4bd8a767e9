//! Inspect command - per-character encoding report.

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use super::read_input;

pub fn run(text: String, is_file: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = if is_file {
        let content = read_input(Path::new(&text))?;
        if verbose {
            eprintln!("Read {} bytes from {}", content.len(), text);
        }
        content
    } else {
        text
    };

    println!("{}", "Character report".cyan().bold());
    print!("{}", inspect_text(&content));
    Ok(())
}

/// Render a table of every character's code point and UTF-8 byte layout.
fn inspect_text(text: &str) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Analyzing text: {text:?}");
    let _ = writeln!(report, "{}", "-".repeat(52));
    let _ = writeln!(report, "{:<6} | {:<10} | {:<16} | {:<5}", "Char", "Unicode", "UTF-8 Bytes", "Len");
    let _ = writeln!(report, "{}", "-".repeat(52));

    for c in text.chars() {
        let mut buf = [0u8; 4];
        let bytes = c.encode_utf8(&mut buf).as_bytes();
        let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
        let _ = writeln!(
            report,
            "{:<6} | U+{:04X}    | {:<16} | {:<5}",
            c.escape_debug().to_string(),
            c as u32,
            hex.join(" "),
            bytes.len()
        );
    }

    let _ = writeln!(report, "{}", "-".repeat(52));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_ascii_char_report() {
        let report = inspect_text("A");
        assert!(report.contains("U+0041"));
        assert!(report.contains("41"));
    }

    #[test]
    fn test_multibyte_char_report() {
        let report = inspect_text("你");
        assert!(report.contains("U+4F60"));
        assert!(report.contains("E4 BD A0"));
        assert!(report.contains("| 3"));
    }

    #[test]
    fn test_empty_text() {
        let report = inspect_text("");
        assert!(report.contains("Analyzing text"));
    }

    #[test]
    fn test_run_verbose_with_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("hi".as_bytes()).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(run(path, true, true).is_ok());
    }
}
