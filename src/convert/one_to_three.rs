//! One-letter to three-letter conversion.
//!
//! Every match of the compound one-letter pattern is parsed into a
//! [`VariantToken`] and re-rendered in place; text between matches is kept
//! verbatim.

use regex::Captures;

use super::token::{VariantToken, ONE_LETTER_PATTERN};
use super::{split_padding, split_protein_prefix, with_prefix};
use crate::amino_acid::StopSymbol;

/// Convert a one-letter protein variant to three-letter notation.
///
/// `*` and `X` targets are rendered as stops with the three-letter form of
/// `stop` (`Ter` for both `Ter` and `*`, `X` for `X`).
///
/// # Examples
///
/// ```
/// use ferro_aa::convert::one_to_three;
/// use ferro_aa::StopSymbol;
///
/// assert_eq!(one_to_three("p.L858R", StopSymbol::Star), "p.Leu858Arg");
/// assert_eq!(
///     one_to_three("L858_E861delinsD", StopSymbol::Star),
///     "Leu858_Glu861delinsAsp"
/// );
/// assert_eq!(one_to_three("p.Q61*", StopSymbol::Star), "p.Gln61Ter");
/// ```
pub fn one_to_three(line: &str, stop: StopSymbol) -> String {
    let (leading, core, trailing) = split_padding(line);
    let (has_prefix, body) = split_protein_prefix(core);

    let body = ONE_LETTER_PATTERN.replace_all(body, |caps: &Captures<'_>| {
        VariantToken::from_captures(caps, false).three_letter_body(stop)
    });

    format!("{}{}{}", leading, with_prefix(has_prefix, &body), trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        assert_eq!(one_to_three("p.L858R", StopSymbol::Star), "p.Leu858Arg");
        assert_eq!(one_to_three("V600E", StopSymbol::Star), "Val600Glu");
    }

    #[test]
    fn test_prefix_normalized_to_lowercase() {
        assert_eq!(one_to_three("P.L858R", StopSymbol::Star), "p.Leu858Arg");
    }

    #[test]
    fn test_range_delins() {
        assert_eq!(
            one_to_three("L858_E861delinsD", StopSymbol::Star),
            "Leu858_Glu861delinsAsp"
        );
    }

    #[test]
    fn test_mutation_types() {
        assert_eq!(one_to_three("p.K23del", StopSymbol::Star), "p.Lys23del");
        assert_eq!(one_to_three("p.K23dup", StopSymbol::Star), "p.Lys23dup");
        assert_eq!(
            one_to_three("p.K23_L24insR", StopSymbol::Star),
            "p.Lys23_Leu24insArg"
        );
        assert_eq!(one_to_three("p.R97fs", StopSymbol::Star), "p.Arg97fs");
        assert_eq!(one_to_three("p.M1ext", StopSymbol::Star), "p.Met1ext");
        assert_eq!(
            one_to_three("p.K23_L25del", StopSymbol::Star),
            "p.Lys23_Leu25del"
        );
    }

    #[test]
    fn test_stop_targets() {
        assert_eq!(one_to_three("p.Q61*", StopSymbol::Star), "p.Gln61Ter");
        assert_eq!(one_to_three("p.Q61X", StopSymbol::Ter), "p.Gln61Ter");
        assert_eq!(one_to_three("p.Q61*", StopSymbol::X), "p.Gln61X");
    }

    #[test]
    fn test_frameshift_with_new_residue() {
        // The residue before `fs` is taken as the target; the trailing `*23`
        // does not start a new match and is kept verbatim.
        assert_eq!(
            one_to_three("p.R97Pfs*23", StopSymbol::Star),
            "p.Arg97Profs*23"
        );
    }

    #[test]
    fn test_multiple_matches() {
        assert_eq!(
            one_to_three("p.L858R;T790M", StopSymbol::Star),
            "p.Leu858Arg;Thr790Met"
        );
    }

    #[test]
    fn test_unknown_residue_passes_through() {
        assert_eq!(one_to_three("B12Z", StopSymbol::Star), "B12Z");
    }

    #[test]
    fn test_non_matching_text() {
        assert_eq!(one_to_three("hello world", StopSymbol::Star), "hello world");
        assert_eq!(one_to_three("p.Leu858Arg", StopSymbol::Star), "p.Leu858Arg");
        assert_eq!(one_to_three("", StopSymbol::Star), "");
    }

    #[test]
    fn test_position_digits_kept_as_written() {
        assert_eq!(one_to_three("p.L0858R", StopSymbol::Star), "p.Leu0858Arg");
        assert_eq!(
            one_to_three("p.L99999999999999999999999R", StopSymbol::Star),
            "p.Leu99999999999999999999999Arg"
        );
    }

    #[test]
    fn test_surrounding_whitespace_kept() {
        assert_eq!(one_to_three("  L858R  ", StopSymbol::Star), "  Leu858Arg  ");
        assert_eq!(one_to_three("\tp.Q61*", StopSymbol::Star), "\tp.Gln61Ter");
        assert_eq!(one_to_three("   ", StopSymbol::Star), "   ");
    }
}
