//! Command implementations.

pub mod escapes;
pub mod extract;
pub mod inspect;
pub mod recover;

use std::io::Read;
use std::path::Path;

/// Read a command's input: a file path, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
