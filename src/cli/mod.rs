//! CLI utilities for ferro-aa
//!
//! This module provides testable functions used by the CLI binary.
//! Input reading, code lookup and output formatting live here so they can be
//! unit tested without spawning the binary.

pub mod format;
pub mod lookup;

// Re-export commonly used items
pub use format::{output_error, write_batch, write_lookup, write_table, OutputFormat};
pub use lookup::{lookup_code, CodeLookup};

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// This is common when files are exported from Windows applications or Excel.
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}p.Leu858Arg"), "p.Leu858Arg");
/// assert_eq!(strip_bom("p.Leu858Arg"), "p.Leu858Arg");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Whether `path` names gzip-compressed input
pub fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("gz") | Some("bgz")
    )
}

/// Read all input text from `path`, or stdin when `path` is `None` or `-`.
///
/// `.gz`/`.bgz` files are decompressed. A leading BOM is removed.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    let mut text = String::new();
    match path {
        None => {
            io::stdin().read_to_string(&mut text)?;
        }
        Some(p) if p.as_os_str() == "-" => {
            io::stdin().read_to_string(&mut text)?;
        }
        Some(p) => {
            let file = File::open(p)?;
            if is_gzipped(p) {
                BufReader::new(MultiGzDecoder::new(file)).read_to_string(&mut text)?;
            } else {
                BufReader::new(file).read_to_string(&mut text)?;
            }
        }
    }
    Ok(strip_bom(&text).to_string())
}

/// Drop the single newline that terminates a file.
///
/// Files conventionally end with `\n`; without this, a file of N variants
/// would convert to N + 1 lines.
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::trim_final_newline;
///
/// assert_eq!(trim_final_newline("a\nb\n"), "a\nb");
/// assert_eq!(trim_final_newline("a\r\n"), "a");
/// assert_eq!(trim_final_newline("a\n\n"), "a\n");
/// ```
pub fn trim_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Parse a `--max-lines` value; zero would reject every input.
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::parse_max_lines;
///
/// assert_eq!(parse_max_lines("500"), Ok(500));
/// assert!(parse_max_lines("0").is_err());
/// ```
pub fn parse_max_lines(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("max-lines must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid line count '{}': {}", s, e)),
    }
}
