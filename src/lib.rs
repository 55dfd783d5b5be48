// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-aa: protein variant amino acid notation converter
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Converts HGVS-style protein variant descriptions between three-letter
//! (`p.Leu858Arg`) and one-letter (`p.L858R`) amino acid codes, with a
//! configurable stop codon symbol (`Ter`, `*` or `X`) and a line-limited
//! batch driver.
//!
//! # Example
//!
//! ```
//! use ferro_aa::{convert_line, BatchConfig, BatchConverter, Direction, StopSymbol};
//!
//! // Convert a single line
//! let one = convert_line("p.Gln61Ter", Direction::ThreeToOne, StopSymbol::Star);
//! assert_eq!(one, "p.Q61*");
//!
//! // Convert a batch of lines
//! let converter = BatchConverter::new(BatchConfig::new(Direction::OneToThree));
//! let output = converter.convert("p.L858R\nT790M").unwrap();
//! assert_eq!(output.text(), "p.Leu858Arg\nThr790Met");
//! ```

pub mod amino_acid;
pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "web-service")]
pub mod service;

// Re-export commonly used types
pub use amino_acid::{AminoAcid, StopSymbol};
pub use batch::{convert_batch, BatchConfig, BatchConverter, BatchOutput};
pub use config::FerroAaConfig;
pub use convert::{convert_line, one_to_three, three_to_one, Direction, VariantToken};
pub use error::{ErrorCode, FerroAaError};

/// Result type alias for ferro-aa operations
pub type Result<T> = std::result::Result<T, FerroAaError>;
