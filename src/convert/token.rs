//! One-letter variant tokens.
//!
//! A [`VariantToken`] is the parsed form of one compound one-letter variant
//! such as `L858_E861delinsD`: a primary residue/position, an optional range
//! end, an optional mutation keyword and an optional target residue.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

use super::{split_protein_prefix, PROTEIN_PREFIX};
use crate::amino_acid::{to_three_letter, StopSymbol};

/// Compound one-letter variant pattern.
///
/// Groups: 1 primary residue, 2 primary position, 3 range residue,
/// 4 range position, 5 mutation keyword, 6 target residue or stop.
/// `delins` precedes `del` so the longer keyword wins.
pub(crate) const ONE_LETTER_VARIANT: &str =
    r"([A-Z])(\d+)(?:_([A-Z])(\d+))?(delins|del|ins|dup|fs|ext)?([A-Z*])?";

pub(crate) static ONE_LETTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(ONE_LETTER_VARIANT).unwrap());

static ANCHORED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{})$", ONE_LETTER_VARIANT)).unwrap());

/// Protein mutation keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationType {
    /// Deletion (`del`)
    Del,
    /// Insertion (`ins`)
    Ins,
    /// Duplication (`dup`)
    Dup,
    /// Deletion-insertion (`delins`)
    Delins,
    /// Frameshift (`fs`)
    Fs,
    /// Extension (`ext`)
    Ext,
}

impl MutationType {
    /// Keyword as written in both notations
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationType::Del => "del",
            MutationType::Ins => "ins",
            MutationType::Dup => "dup",
            MutationType::Delins => "delins",
            MutationType::Fs => "fs",
            MutationType::Ext => "ext",
        }
    }

    /// Parse a keyword (exact, lowercase)
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "del" => Some(MutationType::Del),
            "ins" => Some(MutationType::Ins),
            "dup" => Some(MutationType::Dup),
            "delins" => Some(MutationType::Delins),
            "fs" => Some(MutationType::Fs),
            "ext" => Some(MutationType::Ext),
            _ => None,
        }
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A one-letter residue at a 1-based protein position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResiduePosition {
    /// One-letter residue as written; may not be a standard code
    pub residue: char,
    /// Position digits exactly as written, leading zeros included
    pub position: String,
}

impl ResiduePosition {
    pub fn new(residue: char, position: impl Into<String>) -> Self {
        Self {
            residue,
            position: position.into(),
        }
    }

    /// Numeric position, or `None` if it does not fit in a `u64`
    pub fn position_number(&self) -> Option<u64> {
        self.position.parse().ok()
    }

    /// Three-letter rendering; unrecognized residues are kept as written
    fn three_letter(&self) -> String {
        match to_three_letter(self.residue) {
            Some(three) => format!("{}{}", three, self.position),
            None => format!("{}{}", self.residue, self.position),
        }
    }
}

impl fmt::Display for ResiduePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.residue, self.position)
    }
}

/// A parsed one-letter protein variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantToken {
    /// Whether the source carried a `p.` prefix
    pub has_protein_prefix: bool,
    /// First (or only) residue/position
    pub primary: ResiduePosition,
    /// Range end, present only for `_` range syntax
    pub secondary: Option<ResiduePosition>,
    /// Mutation keyword, absent for plain substitutions
    pub mutation_type: Option<MutationType>,
    /// Substituted/inserted residue or stop symbol
    pub target: Option<char>,
}

impl VariantToken {
    /// Parse a whole string as a single one-letter variant.
    ///
    /// Unlike the line converter this is anchored: trailing or leading text
    /// makes the parse fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_aa::convert::{MutationType, VariantToken};
    ///
    /// let token = VariantToken::parse("p.L858_E861delinsD").unwrap();
    /// assert!(token.has_protein_prefix);
    /// assert_eq!(token.primary.position, "858");
    /// assert_eq!(token.secondary.as_ref().unwrap().residue, 'E');
    /// assert_eq!(token.mutation_type, Some(MutationType::Delins));
    /// assert_eq!(token.target, Some('D'));
    ///
    /// assert!(VariantToken::parse("p.Leu858Arg").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let (has_prefix, body) = split_protein_prefix(input);
        let caps = ANCHORED_PATTERN.captures(body)?;
        Some(Self::from_captures(&caps, has_prefix))
    }

    /// Build a token from a match of the compound pattern.
    pub(crate) fn from_captures(caps: &Captures<'_>, has_protein_prefix: bool) -> Self {
        let primary = residue_position(caps, 1, 2);
        let secondary = match (caps.get(3), caps.get(4)) {
            (Some(_), Some(_)) => Some(residue_position(caps, 3, 4)),
            _ => None,
        };
        let mutation_type = caps
            .get(5)
            .and_then(|m| MutationType::from_keyword(m.as_str()));
        let target = caps.get(6).and_then(|m| m.as_str().chars().next());

        Self {
            has_protein_prefix,
            primary,
            secondary,
            mutation_type,
            target,
        }
    }

    /// Whether the target is a stop (`*` or `X`)
    pub fn is_stop_target(&self) -> bool {
        matches!(self.target, Some('*') | Some('X'))
    }

    /// Render in three-letter notation, without the `p.` prefix.
    pub fn three_letter_body(&self, stop: StopSymbol) -> String {
        let mut out = self.primary.three_letter();
        if let Some(secondary) = &self.secondary {
            out.push('_');
            out.push_str(&secondary.three_letter());
        }
        if let Some(mutation_type) = self.mutation_type {
            out.push_str(mutation_type.as_str());
        }
        if let Some(target) = self.target {
            if self.is_stop_target() {
                out.push_str(stop.three_letter_form());
            } else {
                match to_three_letter(target) {
                    Some(three) => out.push_str(three),
                    None => out.push(target),
                }
            }
        }
        out
    }

    /// Render in three-letter notation, including the `p.` prefix if present.
    pub fn to_three_letter(&self, stop: StopSymbol) -> String {
        self.prefixed(self.three_letter_body(stop))
    }

    /// Render back in one-letter notation with the given stop symbol.
    pub fn to_one_letter(&self, stop: StopSymbol) -> String {
        let mut out = self.primary.to_string();
        if let Some(secondary) = &self.secondary {
            out.push('_');
            out.push_str(&secondary.to_string());
        }
        if let Some(mutation_type) = self.mutation_type {
            out.push_str(mutation_type.as_str());
        }
        if let Some(target) = self.target {
            if self.is_stop_target() {
                out.push_str(stop.as_str());
            } else {
                out.push(target);
            }
        }
        self.prefixed(out)
    }

    fn prefixed(&self, body: String) -> String {
        if self.has_protein_prefix {
            format!("{}{}", PROTEIN_PREFIX, body)
        } else {
            body
        }
    }
}

/// Residue/position from a pair of participating groups
fn residue_position(caps: &Captures<'_>, residue: usize, position: usize) -> ResiduePosition {
    ResiduePosition::new(first_char(&caps[residue]), &caps[position])
}

/// Residue groups are single-character by construction
fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_substitution() {
        let token = VariantToken::parse("p.L858R").unwrap();
        assert!(token.has_protein_prefix);
        assert_eq!(token.primary, ResiduePosition::new('L', "858"));
        assert_eq!(token.secondary, None);
        assert_eq!(token.mutation_type, None);
        assert_eq!(token.target, Some('R'));
    }

    #[test]
    fn test_parse_without_prefix() {
        let token = VariantToken::parse("K23del").unwrap();
        assert!(!token.has_protein_prefix);
        assert_eq!(token.mutation_type, Some(MutationType::Del));
        assert_eq!(token.target, None);
    }

    #[test]
    fn test_parse_delins_prefers_longer_keyword() {
        let token = VariantToken::parse("L858_E861delinsD").unwrap();
        assert_eq!(token.mutation_type, Some(MutationType::Delins));
        assert_eq!(token.secondary, Some(ResiduePosition::new('E', "861")));
    }

    #[test]
    fn test_parse_stop_target() {
        let token = VariantToken::parse("Q61*").unwrap();
        assert!(token.is_stop_target());
        let token = VariantToken::parse("Q61X").unwrap();
        assert!(token.is_stop_target());
        let token = VariantToken::parse("Q61R").unwrap();
        assert!(!token.is_stop_target());
    }

    #[test]
    fn test_parse_rejects_non_tokens() {
        assert!(VariantToken::parse("").is_none());
        assert!(VariantToken::parse("Leu858Arg").is_none());
        assert!(VariantToken::parse("L858R extra").is_none());
        assert!(VariantToken::parse("l858r").is_none());
    }

    #[test]
    fn test_position_kept_as_written() {
        let token = VariantToken::parse("p.L0858R").unwrap();
        assert_eq!(token.primary.position, "0858");
        assert_eq!(token.primary.position_number(), Some(858));
        assert_eq!(token.to_three_letter(StopSymbol::Star), "p.Leu0858Arg");
        assert_eq!(token.to_one_letter(StopSymbol::Star), "p.L0858R");
    }

    #[test]
    fn test_position_wider_than_u64() {
        let token = VariantToken::parse("L99999999999999999999999R").unwrap();
        assert_eq!(token.primary.position_number(), None);
        assert_eq!(
            token.to_three_letter(StopSymbol::Star),
            "Leu99999999999999999999999Arg"
        );
    }

    #[test]
    fn test_three_letter_rendering() {
        let token = VariantToken::parse("p.L858R").unwrap();
        assert_eq!(token.to_three_letter(StopSymbol::Star), "p.Leu858Arg");
        assert_eq!(token.three_letter_body(StopSymbol::Star), "Leu858Arg");

        let token = VariantToken::parse("L858_E861delinsD").unwrap();
        assert_eq!(
            token.to_three_letter(StopSymbol::Star),
            "Leu858_Glu861delinsAsp"
        );
    }

    #[test]
    fn test_three_letter_stop_rendering() {
        let token = VariantToken::parse("p.Q61*").unwrap();
        assert_eq!(token.to_three_letter(StopSymbol::Star), "p.Gln61Ter");
        assert_eq!(token.to_three_letter(StopSymbol::Ter), "p.Gln61Ter");
        assert_eq!(token.to_three_letter(StopSymbol::X), "p.Gln61X");
    }

    #[test]
    fn test_unknown_residue_passes_through() {
        let token = VariantToken::parse("B12Z").unwrap();
        assert_eq!(token.to_three_letter(StopSymbol::Star), "B12Z");
    }

    #[test]
    fn test_one_letter_rendering() {
        let token = VariantToken::parse("p.Q61X").unwrap();
        assert_eq!(token.to_one_letter(StopSymbol::Star), "p.Q61*");
        let token = VariantToken::parse("R97fs").unwrap();
        assert_eq!(token.to_one_letter(StopSymbol::Star), "R97fs");
    }

    #[test]
    fn test_mutation_type_keywords() {
        for keyword in ["del", "ins", "dup", "delins", "fs", "ext"] {
            let mutation_type = MutationType::from_keyword(keyword).unwrap();
            assert_eq!(mutation_type.as_str(), keyword);
            assert_eq!(mutation_type.to_string(), keyword);
        }
        assert_eq!(MutationType::from_keyword("inv"), None);
        assert_eq!(MutationType::from_keyword("DEL"), None);
    }
}
