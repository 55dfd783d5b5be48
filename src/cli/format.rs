//! Output formatting utilities for CLI operations

use serde_json::json;
use std::io::{self, Write};
use std::str::FromStr;

use super::lookup::CodeLookup;
use crate::amino_acid::AminoAcidEntry;
use crate::batch::BatchOutput;
use crate::error::FerroAaError;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_aa::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    /// assert_eq!(OutputFormat::from_str("other").unwrap(), OutputFormat::Text);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Write a converted batch
///
/// Text output is one converted line per input line. JSON output is one
/// `{"input", "output"}` object per line.
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::{write_batch, OutputFormat};
/// use ferro_aa::{BatchConverter, BatchConfig};
/// use std::io::Cursor;
///
/// let output = BatchConverter::new(BatchConfig::default())
///     .convert("p.Leu858Arg")
///     .unwrap();
/// let mut buffer = Cursor::new(Vec::new());
/// write_batch(&mut buffer, &output, OutputFormat::Text).unwrap();
/// assert_eq!(String::from_utf8(buffer.into_inner()).unwrap(), "p.L858R\n");
/// ```
pub fn write_batch<W: Write>(
    writer: &mut W,
    output: &BatchOutput,
    format: OutputFormat,
) -> io::Result<()> {
    for line in &output.lines {
        match format {
            OutputFormat::Json => writeln!(
                writer,
                "{}",
                json!({ "input": line.input, "output": line.output })
            )?,
            OutputFormat::Text => writeln!(writer, "{}", line.output)?,
        }
    }
    Ok(())
}

/// Write the result of a `lookup`
pub fn write_lookup<W: Write>(
    writer: &mut W,
    code: &str,
    found: &CodeLookup,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            "{}",
            json!({
                "input": code,
                "three_letter": found.three_letter,
                "one_letter": found.one_letter,
                "is_stop": found.is_stop,
            })
        ),
        OutputFormat::Text => writeln!(writer, "{}", found.counterpart(code)),
    }
}

/// Write the amino acid lookup table
pub fn write_table<W: Write>(
    writer: &mut W,
    table: &[AminoAcidEntry],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::to_string_pretty(table).map_err(io::Error::other)?;
            writeln!(writer, "{}", value)
        }
        OutputFormat::Text => {
            for entry in table {
                writeln!(writer, "{}\t{}", entry.three_letter, entry.one_letter)?;
            }
            Ok(())
        }
    }
}

/// Write an error to the output
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::{output_error, OutputFormat};
/// use ferro_aa::FerroAaError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = FerroAaError::LineLimitExceeded { lines: 1001, max_lines: 1000 };
/// output_error(&mut buffer, &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.starts_with("ERROR: [E1001]"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    error: &FerroAaError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(
            writer,
            "{}",
            json!({
                "status": "error",
                "code": error.code().as_str(),
                "error": error.to_string(),
            })
        ),
        OutputFormat::Text => writeln!(writer, "ERROR: {}", error.detailed_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino_acid::table;
    use crate::batch::{BatchConfig, BatchConverter};
    use crate::cli::lookup_code;
    use crate::convert::Direction;
    use std::io::Cursor;

    fn render<F: FnOnce(&mut Cursor<Vec<u8>>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Cursor::new(Vec::new());
        f(&mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_write_batch_text() {
        let output = BatchConverter::new(BatchConfig::new(Direction::OneToThree))
            .convert("p.L858R\n\nQ61*")
            .unwrap();
        let text = render(|w| write_batch(w, &output, OutputFormat::Text));
        assert_eq!(text, "p.Leu858Arg\n\nGln61Ter\n");
    }

    #[test]
    fn test_write_batch_json() {
        let output = BatchConverter::new(BatchConfig::default())
            .convert("p.Leu858Arg\np.Gln61Ter")
            .unwrap();
        let text = render(|w| write_batch(w, &output, OutputFormat::Json));
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["input"], "p.Leu858Arg");
        assert_eq!(rows[0]["output"], "p.L858R");
        assert_eq!(rows[1]["output"], "p.Q61*");
    }

    #[test]
    fn test_write_lookup() {
        let found = lookup_code("Leu").unwrap();
        assert_eq!(
            render(|w| write_lookup(w, "Leu", &found, OutputFormat::Text)),
            "L\n"
        );

        let json = render(|w| write_lookup(w, "Leu", &found, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["one_letter"], "L");
        assert_eq!(value["three_letter"], "Leu");
        assert_eq!(value["is_stop"], false);
    }

    #[test]
    fn test_write_table_text() {
        let text = render(|w| write_table(w, &table(), OutputFormat::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], "Ala\tA");
        assert_eq!(lines[19], "Val\tV");
    }

    #[test]
    fn test_write_table_json() {
        let json = render(|w| write_table(w, &table(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[10]["three_letter"], "Leu");
        assert_eq!(rows[10]["one_letter"], "L");
    }

    #[test]
    fn test_output_error_json() {
        let error = FerroAaError::LineLimitExceeded {
            lines: 5,
            max_lines: 4,
        };
        let json = render(|w| output_error(w, &error, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "E1001");
    }
}
