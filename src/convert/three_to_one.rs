//! Three-letter to one-letter conversion.
//!
//! Works by direct substring substitution rather than parsing: stop aliases
//! are rewritten first, then each three-letter code in table order. Codes are
//! not anchored to word boundaries, so a code embedded in unrelated text is
//! rewritten as well (`Metformin` becomes `Mformin`). Downstream consumers
//! rely on this exact substitution behavior.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use super::{split_padding, split_protein_prefix, with_prefix};
use crate::amino_acid::{AminoAcid, StopSymbol};

/// Matches any stop alias (`Ter`, `*`, `X`)
static STOP_ALIAS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = StopSymbol::ALIASES
        .iter()
        .map(|alias| regex::escape(alias))
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Three-letter code paired with its one-letter replacement, in table order
static SUBSTITUTIONS: Lazy<Vec<(&'static str, String)>> = Lazy::new(|| {
    AminoAcid::ALL
        .iter()
        .map(|aa| (aa.to_three_letter(), aa.to_one_letter().to_string()))
        .collect()
});

/// Convert a three-letter protein variant to one-letter notation.
///
/// # Examples
///
/// ```
/// use ferro_aa::convert::three_to_one;
/// use ferro_aa::StopSymbol;
///
/// assert_eq!(three_to_one("p.Leu858Arg", StopSymbol::Star), "p.L858R");
/// assert_eq!(three_to_one("p.Gln61Ter", StopSymbol::Star), "p.Q61*");
/// assert_eq!(three_to_one("p.Gln61Ter", StopSymbol::X), "p.Q61X");
/// assert_eq!(three_to_one("", StopSymbol::Star), "");
/// ```
pub fn three_to_one(line: &str, stop: StopSymbol) -> String {
    let (leading, core, trailing) = split_padding(line);
    let (has_prefix, body) = split_protein_prefix(core);

    let mut body = STOP_ALIAS_PATTERN
        .replace_all(body, NoExpand(stop.as_str()))
        .into_owned();

    for (three, one) in SUBSTITUTIONS.iter() {
        if body.contains(three) {
            body = body.replace(three, one);
        }
    }

    format!("{}{}{}", leading, with_prefix(has_prefix, &body), trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        assert_eq!(three_to_one("p.Leu858Arg", StopSymbol::Star), "p.L858R");
        assert_eq!(three_to_one("p.Val600Glu", StopSymbol::Star), "p.V600E");
    }

    #[test]
    fn test_prefix_normalized_to_lowercase() {
        assert_eq!(three_to_one("P.Leu858Arg", StopSymbol::Star), "p.L858R");
    }

    #[test]
    fn test_surrounding_whitespace_kept() {
        assert_eq!(three_to_one("  p.Leu858Arg ", StopSymbol::Star), "  p.L858R ");
        assert_eq!(three_to_one("\t", StopSymbol::Star), "\t");
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(three_to_one("Leu858Arg", StopSymbol::Star), "L858R");
    }

    #[test]
    fn test_stop_symbols() {
        assert_eq!(three_to_one("p.Gln61Ter", StopSymbol::Star), "p.Q61*");
        assert_eq!(three_to_one("p.Gln61Ter", StopSymbol::Ter), "p.Q61Ter");
        assert_eq!(three_to_one("p.Gln61Ter", StopSymbol::X), "p.Q61X");
        assert_eq!(three_to_one("p.Gln61*", StopSymbol::Ter), "p.Q61Ter");
        assert_eq!(three_to_one("p.Gln61X", StopSymbol::Star), "p.Q61*");
    }

    #[test]
    fn test_range_delins() {
        assert_eq!(
            three_to_one("p.Leu858_Glu861delinsAsp", StopSymbol::Star),
            "p.L858_E861delinsD"
        );
    }

    #[test]
    fn test_keywords_untouched() {
        assert_eq!(three_to_one("p.Lys23del", StopSymbol::Star), "p.K23del");
        assert_eq!(three_to_one("p.Lys23dup", StopSymbol::Star), "p.K23dup");
        assert_eq!(
            three_to_one("p.Lys23_Leu24insArg", StopSymbol::Star),
            "p.K23_L24insR"
        );
        assert_eq!(
            three_to_one("p.Arg97ProfsTer23", StopSymbol::Star),
            "p.R97Pfs*23"
        );
        assert_eq!(
            three_to_one("p.Ter110GlnextTer17", StopSymbol::Star),
            "p.*110Qext*17"
        );
    }

    #[test]
    fn test_multiple_codes_on_one_line() {
        assert_eq!(
            three_to_one("p.Leu858Arg p.Thr790Met", StopSymbol::Star),
            "p.L858R p.T790M"
        );
    }

    #[test]
    fn test_unrecognized_text_passes_through() {
        assert_eq!(three_to_one("hello 123", StopSymbol::Star), "hello 123");
        assert_eq!(three_to_one("p.Xyz12Abc", StopSymbol::Star), "p.*yz12Abc");
    }

    #[test]
    fn test_unanchored_substitution_known_limitation() {
        // Codes are replaced wherever they occur, even inside unrelated words.
        assert_eq!(three_to_one("Metformin", StopSymbol::Star), "Mformin");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(three_to_one("", StopSymbol::Star), "");
        assert_eq!(three_to_one("p.", StopSymbol::Star), "p.");
    }
}
