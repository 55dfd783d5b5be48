//! Amino acid lookup tables
//!
//! The twenty standard amino acids with their three-letter and one-letter
//! codes, plus the stop codon symbols recognized in protein notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FerroAaError;

/// Standard amino acid enumeration
///
/// Pyrrolysine, selenocysteine and the unknown residue `Xaa` are deliberately
/// absent: only the twenty canonical residues take part in conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
}

impl AminoAcid {
    /// All twenty amino acids, in the order used for substring substitution.
    pub const ALL: [AminoAcid; 20] = [
        Self::Ala,
        Self::Arg,
        Self::Asn,
        Self::Asp,
        Self::Cys,
        Self::Gln,
        Self::Glu,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Leu,
        Self::Lys,
        Self::Met,
        Self::Phe,
        Self::Pro,
        Self::Ser,
        Self::Thr,
        Self::Trp,
        Self::Tyr,
        Self::Val,
    ];

    /// Parse from 3-letter code (exact case)
    pub fn from_three_letter(s: &str) -> Option<Self> {
        match s {
            "Ala" => Some(Self::Ala),
            "Arg" => Some(Self::Arg),
            "Asn" => Some(Self::Asn),
            "Asp" => Some(Self::Asp),
            "Cys" => Some(Self::Cys),
            "Gln" => Some(Self::Gln),
            "Glu" => Some(Self::Glu),
            "Gly" => Some(Self::Gly),
            "His" => Some(Self::His),
            "Ile" => Some(Self::Ile),
            "Leu" => Some(Self::Leu),
            "Lys" => Some(Self::Lys),
            "Met" => Some(Self::Met),
            "Phe" => Some(Self::Phe),
            "Pro" => Some(Self::Pro),
            "Ser" => Some(Self::Ser),
            "Thr" => Some(Self::Thr),
            "Trp" => Some(Self::Trp),
            "Tyr" => Some(Self::Tyr),
            "Val" => Some(Self::Val),
            _ => None,
        }
    }

    /// Parse from 1-letter code (uppercase only)
    ///
    /// Lowercase letters are reserved for the mutation keywords (`del`, `fs`,
    /// `ext`, ...), so they never name a residue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_aa::amino_acid::AminoAcid;
    ///
    /// assert_eq!(AminoAcid::from_one_letter('L'), Some(AminoAcid::Leu));
    /// assert_eq!(AminoAcid::from_one_letter('l'), None);
    /// assert_eq!(AminoAcid::from_one_letter('X'), None);
    /// ```
    pub fn from_one_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ala),
            'R' => Some(Self::Arg),
            'N' => Some(Self::Asn),
            'D' => Some(Self::Asp),
            'C' => Some(Self::Cys),
            'Q' => Some(Self::Gln),
            'E' => Some(Self::Glu),
            'G' => Some(Self::Gly),
            'H' => Some(Self::His),
            'I' => Some(Self::Ile),
            'L' => Some(Self::Leu),
            'K' => Some(Self::Lys),
            'M' => Some(Self::Met),
            'F' => Some(Self::Phe),
            'P' => Some(Self::Pro),
            'S' => Some(Self::Ser),
            'T' => Some(Self::Thr),
            'W' => Some(Self::Trp),
            'Y' => Some(Self::Tyr),
            'V' => Some(Self::Val),
            _ => None,
        }
    }

    /// Get 3-letter code
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
        }
    }

    /// Get 1-letter code
    pub fn to_one_letter(&self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
        }
    }

    /// Table row for this amino acid
    pub fn entry(&self) -> AminoAcidEntry {
        AminoAcidEntry {
            three_letter: self.to_three_letter(),
            one_letter: self.to_one_letter(),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}

/// One row of the amino acid table, as exposed by the CLI and web API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AminoAcidEntry {
    /// Three-letter code, e.g. `Leu`
    pub three_letter: &'static str,
    /// One-letter code, e.g. `L`
    pub one_letter: char,
}

/// The full twenty-entry lookup table
pub fn table() -> Vec<AminoAcidEntry> {
    AminoAcid::ALL.iter().map(AminoAcid::entry).collect()
}

/// Map a three-letter code to its one-letter code.
///
/// Returns `None` for anything that is not one of the twenty standard codes,
/// including the stop aliases.
///
/// # Examples
///
/// ```
/// use ferro_aa::amino_acid::to_one_letter;
///
/// assert_eq!(to_one_letter("Leu"), Some('L'));
/// assert_eq!(to_one_letter("Ter"), None);
/// ```
pub fn to_one_letter(three_letter: &str) -> Option<char> {
    AminoAcid::from_three_letter(three_letter).map(|aa| aa.to_one_letter())
}

/// Map a one-letter code to its three-letter code.
///
/// # Examples
///
/// ```
/// use ferro_aa::amino_acid::to_three_letter;
///
/// assert_eq!(to_three_letter('R'), Some("Arg"));
/// assert_eq!(to_three_letter('*'), None);
/// ```
pub fn to_three_letter(one_letter: char) -> Option<&'static str> {
    AminoAcid::from_one_letter(one_letter).map(|aa| aa.to_three_letter())
}

/// Symbol used to render a translational stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StopSymbol {
    /// `Ter`
    #[serde(rename = "Ter", alias = "ter", alias = "TER")]
    Ter,
    /// `*`
    #[default]
    #[serde(rename = "*", alias = "star")]
    Star,
    /// `X`
    #[serde(rename = "X", alias = "x")]
    X,
}

impl StopSymbol {
    /// Every spelling of a stop recognized on input.
    pub const ALIASES: [&'static str; 3] = ["Ter", "*", "X"];

    /// All symbol choices
    pub const ALL: [StopSymbol; 3] = [StopSymbol::Ter, StopSymbol::Star, StopSymbol::X];

    /// The symbol as written in one-letter output
    pub fn as_str(&self) -> &'static str {
        match self {
            StopSymbol::Ter => "Ter",
            StopSymbol::Star => "*",
            StopSymbol::X => "X",
        }
    }

    /// The symbol as written in three-letter output.
    ///
    /// `*` is the one-letter spelling of `Ter`, so it is spelled out when the
    /// target notation is three-letter. `Ter` and `X` render verbatim.
    pub fn three_letter_form(&self) -> &'static str {
        match self {
            StopSymbol::Ter | StopSymbol::Star => "Ter",
            StopSymbol::X => "X",
        }
    }

    /// Whether `s` is one of the recognized stop aliases
    pub fn is_alias(s: &str) -> bool {
        Self::ALIASES.contains(&s)
    }
}

impl fmt::Display for StopSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StopSymbol {
    type Err = FerroAaError;

    /// Parse a stop symbol choice
    ///
    /// Accepts the symbols themselves (`Ter`, `*`, `X`) case-insensitively,
    /// plus the word `star` for shells where `*` is awkward.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ter" => Ok(StopSymbol::Ter),
            "*" | "star" => Ok(StopSymbol::Star),
            "x" => Ok(StopSymbol::X),
            _ => Err(FerroAaError::InvalidOption {
                option: "stop symbol",
                value: s.to_string(),
            }),
        }
    }
}
