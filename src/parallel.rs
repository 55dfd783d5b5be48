//! Parallel processing support for ferro-aa
//!
//! Parallel variants of line conversion using rayon. Enable with the
//! `parallel` feature. Lines are independent, so the only guarantee that
//! matters is ordering: output line `i` is always the conversion of input
//! line `i`.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use ferro_aa::convert::Direction;
//! use ferro_aa::parallel::convert_parallel;
//! use ferro_aa::StopSymbol;
//!
//! let lines = vec!["p.Leu858Arg", "p.Thr790Met", "p.Gln61Ter"];
//! let converted = convert_parallel(&lines, Direction::ThreeToOne, StopSymbol::Star);
//! assert_eq!(converted, vec!["p.L858R", "p.T790M", "p.Q61*"]);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::amino_acid::StopSymbol;
use crate::batch::ConvertedLine;
use crate::convert::Direction;

/// Convert multiple lines in parallel
///
/// Returns one converted string per input line. Order is preserved.
pub fn convert_parallel<S: AsRef<str> + Sync>(
    lines: &[S],
    direction: Direction,
    stop: StopSymbol,
) -> Vec<String> {
    lines
        .par_iter()
        .map(|line| direction.convert(line.as_ref(), stop))
        .collect()
}

/// Convert multiple lines in parallel, keeping each input alongside its output
pub(crate) fn convert_lines_parallel<S: AsRef<str> + Sync>(
    lines: &[S],
    direction: Direction,
    stop: StopSymbol,
) -> Vec<ConvertedLine> {
    lines
        .par_iter()
        .map(|line| crate::batch::convert_one(line.as_ref(), direction, stop))
        .collect()
}
