//! Error types for ferro-aa
//!
//! Conversion itself is permissive: malformed variant text passes through
//! unchanged and is never reported as an error. The only conversion-time
//! failure is a batch that exceeds the configured line limit. The remaining
//! variants cover option parsing, configuration and I/O at the edges.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Input errors (E1xxx)
    /// Input has more lines than the configured maximum
    LineLimitExceeded = 1001,

    // Option errors (E2xxx)
    /// Unrecognized conversion direction
    InvalidDirection = 2001,
    /// Unrecognized stop codon symbol
    InvalidStopSymbol = 2002,
    /// Unrecognized option value
    InvalidOption = 2003,

    // Configuration errors (E8xxx)
    /// Configuration file could not be read or parsed
    ConfigError = 8001,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON serialization error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::LineLimitExceeded => "input exceeds the maximum line count",
            ErrorCode::InvalidDirection => "invalid conversion direction",
            ErrorCode::InvalidStopSymbol => "invalid stop codon symbol",
            ErrorCode::InvalidOption => "invalid option value",
            ErrorCode::ConfigError => "configuration error",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-aa operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FerroAaError {
    /// The batch was rejected before any line was converted
    #[error("Input has {lines} lines, exceeding the maximum of {max_lines}")]
    LineLimitExceeded { lines: usize, max_lines: usize },

    /// An option string (direction, stop symbol, ...) was not recognized
    #[error("Invalid {option}: '{value}'")]
    InvalidOption { option: &'static str, value: String },

    /// Configuration file error
    #[error("Config error: {msg}")]
    Config { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl FerroAaError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            FerroAaError::LineLimitExceeded { .. } => ErrorCode::LineLimitExceeded,
            FerroAaError::InvalidOption { option, .. } => match *option {
                "direction" => ErrorCode::InvalidDirection,
                "stop symbol" => ErrorCode::InvalidStopSymbol,
                _ => ErrorCode::InvalidOption,
            },
            FerroAaError::Config { .. } => ErrorCode::ConfigError,
            FerroAaError::Io { .. } => ErrorCode::IoError,
            FerroAaError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Format the error prefixed with its code, e.g. `[E1001] Input has ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }

    /// Whether this is the line-limit condition
    pub fn is_line_limit(&self) -> bool {
        matches!(self, FerroAaError::LineLimitExceeded { .. })
    }
}

impl From<std::io::Error> for FerroAaError {
    fn from(err: std::io::Error) -> Self {
        FerroAaError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FerroAaError {
    fn from(err: serde_json::Error) -> Self {
        FerroAaError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FerroAaError {
    fn from(err: toml::de::Error) -> Self {
        FerroAaError::Config {
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::LineLimitExceeded.as_str(), "E1001");
        assert_eq!(ErrorCode::InvalidDirection.as_str(), "E2001");
        assert_eq!(ErrorCode::InvalidStopSymbol.as_str(), "E2002");
        assert_eq!(ErrorCode::ConfigError.as_str(), "E8001");
        assert_eq!(ErrorCode::IoError.as_str(), "E9001");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::LineLimitExceeded), "E1001");
        assert_eq!(format!("{}", ErrorCode::JsonError), "E9002");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(
            ErrorCode::LineLimitExceeded.description(),
            "input exceeds the maximum line count"
        );
        assert_eq!(
            ErrorCode::InvalidStopSymbol.description(),
            "invalid stop codon symbol"
        );
    }

    #[test]
    fn test_line_limit_display() {
        let err = FerroAaError::LineLimitExceeded {
            lines: 1001,
            max_lines: 1000,
        };
        let msg = err.to_string();
        assert!(msg.contains("1001"));
        assert!(msg.contains("1000"));
        assert!(err.is_line_limit());
    }

    #[test]
    fn test_error_codes() {
        let err = FerroAaError::InvalidOption {
            option: "direction",
            value: "sideways".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidDirection);
        assert!(!err.is_line_limit());

        let err = FerroAaError::InvalidOption {
            option: "stop symbol",
            value: "Stop".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidStopSymbol);

        let err = FerroAaError::InvalidOption {
            option: "output format",
            value: "xml".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidOption);

        let err = FerroAaError::Config {
            msg: "bad".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::ConfigError);
    }

    #[test]
    fn test_detailed_message() {
        let err = FerroAaError::LineLimitExceeded {
            lines: 5,
            max_lines: 2,
        };
        assert!(err.detailed_message().starts_with("[E1001] "));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FerroAaError = io_err.into();
        assert!(matches!(err, FerroAaError::Io { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_error_equality() {
        let a = FerroAaError::LineLimitExceeded {
            lines: 3,
            max_lines: 2,
        };
        let b = FerroAaError::LineLimitExceeded {
            lines: 3,
            max_lines: 2,
        };
        assert_eq!(a, b);
    }
}
