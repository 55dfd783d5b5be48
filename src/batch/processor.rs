//! Batch converter implementation.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::amino_acid::StopSymbol;
use crate::convert::Direction;
use crate::error::FerroAaError;

/// Default maximum number of lines per batch
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Batches at least this large are converted in parallel when the
/// `parallel` feature is enabled.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Configuration for batch conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Conversion direction.
    pub direction: Direction,
    /// Stop codon rendering.
    pub stop_symbol: StopSymbol,
    /// Maximum number of input lines; larger inputs are rejected.
    pub max_lines: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            stop_symbol: StopSymbol::default(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl BatchConfig {
    /// Create a configuration for `direction` with default stop symbol and limit.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Set the stop codon symbol.
    pub fn stop_symbol(mut self, stop_symbol: StopSymbol) -> Self {
        self.stop_symbol = stop_symbol;
        self
    }

    /// Set the maximum line count.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }
}

/// One input line and its conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLine {
    /// Original line (without the line terminator).
    pub input: String,
    /// Converted line.
    pub output: String,
}

impl ConvertedLine {
    /// Whether conversion changed the line.
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

/// Result of a batch conversion.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// One entry per input line, in input order.
    pub lines: Vec<ConvertedLine>,
    /// Total processing time.
    pub duration: Duration,
}

impl BatchOutput {
    /// Number of lines converted.
    pub fn total(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines whose text changed.
    pub fn changed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.changed()).count()
    }

    /// Converted lines, in order.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.output.as_str())
    }

    /// Converted lines joined with `\n`.
    pub fn text(&self) -> String {
        self.outputs().collect::<Vec<_>>().join("\n")
    }

    /// Processing rate (lines per second).
    ///
    /// Returns 0.0 if the duration is too short to provide a meaningful rate.
    pub fn lines_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs < f64::EPSILON {
            0.0
        } else {
            self.lines.len() as f64 / secs
        }
    }
}

/// Split input into lines.
///
/// Splits on `\n` and drops a trailing `\r` from each line. Unlike
/// [`str::lines`], a trailing newline yields a final empty line so the
/// output mirrors the input line for line, and empty input is one empty line.
///
/// # Examples
///
/// ```
/// use ferro_aa::batch::split_lines;
///
/// assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Number of lines [`split_lines`] would produce.
pub fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Converts whole multi-line inputs under a line limit.
#[derive(Debug, Clone, Default)]
pub struct BatchConverter {
    config: BatchConfig,
}

impl BatchConverter {
    /// Create a new batch converter.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Convert every line of `text`.
    ///
    /// Fails with [`FerroAaError::LineLimitExceeded`] before doing any work
    /// if `text` has more than `max_lines` lines.
    pub fn convert(&self, text: &str) -> Result<BatchOutput, FerroAaError> {
        self.check_limit(count_lines(text))?;
        Ok(self.convert_unchecked(&split_lines(text)))
    }

    /// Convert pre-split lines, under the same limit as [`convert`](Self::convert).
    pub fn convert_lines<S: AsRef<str> + Sync>(
        &self,
        lines: &[S],
    ) -> Result<BatchOutput, FerroAaError> {
        self.check_limit(lines.len())?;
        Ok(self.convert_unchecked(lines))
    }

    fn check_limit(&self, lines: usize) -> Result<(), FerroAaError> {
        if lines > self.config.max_lines {
            warn!(
                "Rejecting batch of {} lines (limit {})",
                lines, self.config.max_lines
            );
            return Err(FerroAaError::LineLimitExceeded {
                lines,
                max_lines: self.config.max_lines,
            });
        }
        Ok(())
    }

    fn convert_unchecked<S: AsRef<str> + Sync>(&self, lines: &[S]) -> BatchOutput {
        let start = Instant::now();
        let direction = self.config.direction;
        let stop = self.config.stop_symbol;

        #[cfg(feature = "parallel")]
        let converted = if lines.len() >= PARALLEL_THRESHOLD {
            crate::parallel::convert_lines_parallel(lines, direction, stop)
        } else {
            convert_sequential(lines, direction, stop)
        };
        #[cfg(not(feature = "parallel"))]
        let converted = convert_sequential(lines, direction, stop);

        let output = BatchOutput {
            lines: converted,
            duration: start.elapsed(),
        };
        debug!(
            "Converted {} lines ({}) in {:?}",
            output.total(),
            direction,
            output.duration
        );
        output
    }
}

fn convert_sequential<S: AsRef<str>>(
    lines: &[S],
    direction: Direction,
    stop: StopSymbol,
) -> Vec<ConvertedLine> {
    lines
        .iter()
        .map(|line| convert_one(line.as_ref(), direction, stop))
        .collect()
}

pub(crate) fn convert_one(line: &str, direction: Direction, stop: StopSymbol) -> ConvertedLine {
    ConvertedLine {
        input: line.to_string(),
        output: direction.convert(line, stop),
    }
}
