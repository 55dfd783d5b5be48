//! Batch conversion of multi-line input.
//!
//! Every line is converted independently and in order. A batch with more
//! lines than [`BatchConfig::max_lines`] is rejected up front with
//! [`FerroAaError::LineLimitExceeded`](crate::FerroAaError::LineLimitExceeded)
//! and no line is converted.
//!
//! # Examples
//!
//! ```
//! use ferro_aa::batch::{BatchConfig, BatchConverter};
//! use ferro_aa::convert::Direction;
//!
//! let converter = BatchConverter::new(BatchConfig::new(Direction::ThreeToOne));
//! let output = converter.convert("p.Leu858Arg\n\np.Gln61Ter").unwrap();
//! assert_eq!(output.text(), "p.L858R\n\np.Q61*");
//! ```
//!
//! ## Line limit
//!
//! ```
//! use ferro_aa::batch::{BatchConfig, BatchConverter};
//! use ferro_aa::convert::Direction;
//!
//! let config = BatchConfig::new(Direction::OneToThree).max_lines(2);
//! let result = BatchConverter::new(config).convert("L858R\nT790M\nV600E");
//! assert!(result.unwrap_err().is_line_limit());
//! ```
//!
//! # Features
//!
//! - **Parallel Support**: with the `parallel` feature, large batches are
//!   converted on the rayon thread pool; output order is unchanged.

mod processor;

pub use processor::{
    count_lines, split_lines, BatchConfig, BatchConverter, BatchOutput, ConvertedLine,
    DEFAULT_MAX_LINES,
};

#[cfg(feature = "parallel")]
pub(crate) use processor::convert_one;

use crate::error::FerroAaError;

/// Convert `text` with a one-off converter built from `config`.
pub fn convert_batch(text: &str, config: &BatchConfig) -> Result<BatchOutput, FerroAaError> {
    BatchConverter::new(config.clone()).convert(text)
}
