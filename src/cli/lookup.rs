//! Single-code lookup for the `lookup` subcommand

use serde::Serialize;

use crate::amino_acid::{AminoAcid, StopSymbol};

/// The two spellings of one residue or of the stop codon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeLookup {
    /// Three-letter spelling (`Ter` for a stop)
    pub three_letter: &'static str,
    /// One-letter spelling (`*` for a stop)
    pub one_letter: char,
    /// Whether the code names the stop codon
    pub is_stop: bool,
}

impl CodeLookup {
    fn residue(aa: AminoAcid) -> Self {
        Self {
            three_letter: aa.to_three_letter(),
            one_letter: aa.to_one_letter(),
            is_stop: false,
        }
    }

    fn stop() -> Self {
        Self {
            three_letter: StopSymbol::Ter.as_str(),
            one_letter: '*',
            is_stop: true,
        }
    }

    /// The spelling opposite to `code`: one-letter for a three-letter input
    /// and vice versa.
    pub fn counterpart(&self, code: &str) -> String {
        if code.trim().chars().count() == 1 {
            self.three_letter.to_string()
        } else {
            self.one_letter.to_string()
        }
    }
}

/// Look up a one- or three-letter code.
///
/// Codes are case-sensitive, matching conversion: `Leu` and `L` resolve,
/// `leu` and `l` do not. The stop aliases `Ter`, `*` and `X` resolve to the
/// stop codon.
///
/// # Examples
///
/// ```
/// use ferro_aa::cli::lookup_code;
///
/// assert_eq!(lookup_code("Leu").unwrap().one_letter, 'L');
/// assert_eq!(lookup_code("W").unwrap().three_letter, "Trp");
/// assert!(lookup_code("X").unwrap().is_stop);
/// assert!(lookup_code("Xyz").is_none());
/// ```
pub fn lookup_code(code: &str) -> Option<CodeLookup> {
    let code = code.trim();
    if StopSymbol::is_alias(code) {
        return Some(CodeLookup::stop());
    }
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AminoAcid::from_one_letter(c).map(CodeLookup::residue),
        _ => AminoAcid::from_three_letter(code).map(CodeLookup::residue),
    }
}
