//! Protein variant notation conversion
//!
//! Converts one-line protein variant descriptions between three-letter
//! (`p.Leu858Arg`) and one-letter (`p.L858R`) amino acid notation.
//!
//! # Conversion Directions
//!
//! | Direction | Input | Output |
//! |-----------|-------|--------|
//! | [`Direction::ThreeToOne`] | `p.Gln61Ter` | `p.Q61*` |
//! | [`Direction::OneToThree`] | `L858_E861delinsD` | `Leu858_Glu861delinsAsp` |
//!
//! Both directions are best-effort: text that is not recognized passes through
//! unchanged and a single line never fails to convert.
//!
//! # Example
//!
//! ```
//! use ferro_aa::convert::{convert_line, Direction};
//! use ferro_aa::StopSymbol;
//!
//! let one = convert_line("p.Leu858Arg", Direction::ThreeToOne, StopSymbol::Star);
//! assert_eq!(one, "p.L858R");
//!
//! let three = convert_line(&one, Direction::OneToThree, StopSymbol::Star);
//! assert_eq!(three, "p.Leu858Arg");
//! ```

mod one_to_three;
mod three_to_one;
pub mod token;

pub use one_to_three::one_to_three;
pub use three_to_one::three_to_one;
pub use token::{MutationType, ResiduePosition, VariantToken};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amino_acid::StopSymbol;
use crate::error::FerroAaError;

/// Protein prefix as emitted on output
pub const PROTEIN_PREFIX: &str = "p.";

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `p.Leu858Arg` -> `p.L858R`
    #[default]
    ThreeToOne,
    /// `p.L858R` -> `p.Leu858Arg`
    OneToThree,
}

impl Direction {
    /// Convert a single line in this direction
    pub fn convert(&self, line: &str, stop: StopSymbol) -> String {
        match self {
            Direction::ThreeToOne => three_to_one(line, stop),
            Direction::OneToThree => one_to_three(line, stop),
        }
    }

    /// The opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Direction::ThreeToOne => Direction::OneToThree,
            Direction::OneToThree => Direction::ThreeToOne,
        }
    }

    /// Canonical name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ThreeToOne => "three-to-one",
            Direction::OneToThree => "one-to-three",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = FerroAaError;

    /// Parse a direction name
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_aa::convert::Direction;
    ///
    /// assert_eq!("three-to-one".parse::<Direction>().unwrap(), Direction::ThreeToOne);
    /// assert_eq!("1to3".parse::<Direction>().unwrap(), Direction::OneToThree);
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "three-to-one" | "3to1" | "3-to-1" | "3>1" => Ok(Direction::ThreeToOne),
            "one-to-three" | "1to3" | "1-to-3" | "1>3" => Ok(Direction::OneToThree),
            _ => Err(FerroAaError::InvalidOption {
                option: "direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Convert one line in the given direction.
///
/// Dispatches to [`three_to_one`] or [`one_to_three`].
pub fn convert_line(line: &str, direction: Direction, stop: StopSymbol) -> String {
    direction.convert(line, stop)
}

/// Split a leading case-insensitive `p.` prefix from a variant body.
///
/// Surrounding whitespace is trimmed first, so ` P.L858R ` yields
/// `(true, "L858R")`.
///
/// # Examples
///
/// ```
/// use ferro_aa::convert::split_protein_prefix;
///
/// assert_eq!(split_protein_prefix("p.L858R"), (true, "L858R"));
/// assert_eq!(split_protein_prefix("P.Leu858Arg"), (true, "Leu858Arg"));
/// assert_eq!(split_protein_prefix("L858R"), (false, "L858R"));
/// ```
pub fn split_protein_prefix(line: &str) -> (bool, &str) {
    let line = line.trim();
    match line.get(..PROTEIN_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PROTEIN_PREFIX) => {
            (true, &line[PROTEIN_PREFIX.len()..])
        }
        _ => (false, line),
    }
}

/// Split a line into leading whitespace, body and trailing whitespace.
///
/// Conversion works on the body; the padding is written back verbatim.
pub(crate) fn split_padding(line: &str) -> (&str, &str, &str) {
    let core = line.trim();
    let start = line.len() - line.trim_start().len();
    (&line[..start], core, &line[start + core.len()..])
}

/// Re-attach the normalized `p.` prefix when the input carried one.
pub(crate) fn with_prefix(has_prefix: bool, body: &str) -> String {
    if has_prefix {
        format!("{}{}", PROTEIN_PREFIX, body)
    } else {
        body.to_string()
    }
}
