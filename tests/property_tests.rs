//! Property-based tests for notation conversion
//!
//! Uses proptest to check lookup inverses, clean-variant round trips and the
//! line-by-line behavior of the batch driver.

use ferro_aa::amino_acid::{to_one_letter, to_three_letter, AminoAcid};
use ferro_aa::batch::split_lines;
use ferro_aa::{convert_batch, one_to_three, three_to_one, BatchConfig, Direction, StopSymbol};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// =============================================================================
// Strategies
// =============================================================================

/// Any of the twenty standard amino acids
fn amino_acid() -> impl Strategy<Value = AminoAcid> {
    prop::sample::select(AminoAcid::ALL.to_vec())
}

/// Any stop symbol choice
fn stop_symbol() -> impl Strategy<Value = StopSymbol> {
    prop::sample::select(StopSymbol::ALL.to_vec())
}

/// Either direction
fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::ThreeToOne), Just(Direction::OneToThree)]
}

/// Small positive residue positions
fn position() -> impl Strategy<Value = u64> {
    1..100_000u64
}

/// A line of arbitrary printable text (no line breaks)
fn line() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

/// A clean three-letter substitution such as `p.Leu858Arg`
fn three_letter_substitution() -> impl Strategy<Value = (AminoAcid, u64, AminoAcid)> {
    (amino_acid(), position(), amino_acid())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_lookup_is_inverse(aa in amino_acid()) {
        let one = to_one_letter(aa.to_three_letter()).unwrap();
        prop_assert_eq!(to_three_letter(one), Some(aa.to_three_letter()));
    }

    #[test]
    fn prop_substitution_round_trip((from, pos, to) in three_letter_substitution()) {
        let three = format!("p.{}{}{}", from.to_three_letter(), pos, to.to_three_letter());
        let one = three_to_one(&three, StopSymbol::Star);
        prop_assert_eq!(
            &one,
            &format!("p.{}{}{}", from.to_one_letter(), pos, to.to_one_letter())
        );
        prop_assert_eq!(one_to_three(&one, StopSymbol::Star), three);
    }

    #[test]
    fn prop_stop_gain_round_trip(aa in amino_acid(), pos in position()) {
        let three = format!("p.{}{}Ter", aa.to_three_letter(), pos);
        let one = three_to_one(&three, StopSymbol::Star);
        prop_assert_eq!(&one, &format!("p.{}{}*", aa.to_one_letter(), pos));
        prop_assert_eq!(one_to_three(&one, StopSymbol::Star), three);
    }

    #[test]
    fn prop_stop_symbol_controls_output(aa in amino_acid(), pos in position(), stop in stop_symbol()) {
        let one = three_to_one(&format!("{}{}Ter", aa.to_three_letter(), pos), stop);
        prop_assert!(one.ends_with(stop.as_str()));
    }

    #[test]
    fn prop_batch_preserves_line_count_and_order(
        lines in prop::collection::vec(line(), 1..50),
        dir in direction(),
        stop in stop_symbol(),
    ) {
        let text = lines.join("\n");
        let config = BatchConfig::new(dir).stop_symbol(stop);
        let output = convert_batch(&text, &config).unwrap();
        prop_assert_eq!(output.total(), lines.len());
        for (input, converted) in lines.iter().zip(output.outputs()) {
            prop_assert_eq!(converted, dir.convert(input, stop));
        }
    }

    #[test]
    fn prop_batch_over_limit_rejected(extra in 1..20usize, limit in 1..50usize) {
        let text = vec!["p.Leu858Arg"; limit + extra].join("\n");
        let config = BatchConfig::default().max_lines(limit);
        let err = convert_batch(&text, &config).unwrap_err();
        prop_assert!(err.is_line_limit());
    }

    #[test]
    fn prop_empty_lines_stay_empty(n in 1..20usize, dir in direction()) {
        let text = "\n".repeat(n - 1);
        let output = convert_batch(&text, &BatchConfig::new(dir)).unwrap();
        prop_assert_eq!(output.total(), n);
        prop_assert!(output.outputs().all(str::is_empty));
        prop_assert_eq!(split_lines(&output.text()).len(), n);
    }

    #[test]
    fn prop_conversion_never_panics(input in "\\PC{0,80}", dir in direction(), stop in stop_symbol()) {
        let _ = dir.convert(&input, stop);
    }
}
