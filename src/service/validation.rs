//! Input validation for web service requests

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a description forwarded to mutalyzer
const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Validation errors for user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Input string is empty
    Empty,
    /// Input string is too long
    TooLong { max: usize, actual: usize },
    /// Input contains non-ASCII characters
    NonAscii,
    /// Input contains control characters
    ControlCharacters,
    /// Requested line limit is zero
    ZeroLineLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Input cannot be empty"),
            ValidationError::TooLong { max, actual } => {
                write!(f, "Input too long: {} characters (max: {})", actual, max)
            }
            ValidationError::NonAscii => write!(f, "Input must contain only ASCII characters"),
            ValidationError::ControlCharacters => {
                write!(f, "Input must not contain control characters")
            }
            ValidationError::ZeroLineLimit => write!(f, "max_lines must be greater than 0"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a variant description before it is forwarded upstream
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_DESCRIPTION_LENGTH,
            actual: description.len(),
        });
    }
    if !description.is_ascii() {
        return Err(ValidationError::NonAscii);
    }
    if description.chars().any(|c| c.is_ascii_control()) {
        return Err(ValidationError::ControlCharacters);
    }
    Ok(())
}

/// Resolve the effective line limit for a request.
///
/// A requested limit can only lower the server's limit.
pub fn effective_max_lines(
    server_max: usize,
    requested: Option<usize>,
) -> Result<usize, ValidationError> {
    match requested {
        Some(0) => Err(ValidationError::ZeroLineLimit),
        Some(n) => Ok(n.min(server_max)),
        None => Ok(server_max),
    }
}
