//! Request and response types for the ferro-aa web service

use serde::{Deserialize, Serialize};

use crate::amino_acid::{AminoAcidEntry, StopSymbol};
use crate::convert::Direction;
use crate::error::FerroAaError;

/// Request body for `POST /api/v1/convert`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertRequest {
    /// One variant per line
    pub text: String,
    /// Conversion direction (default: three-to-one)
    #[serde(default)]
    pub direction: Direction,
    /// Stop codon symbol (default: `*`)
    #[serde(default)]
    pub stop_symbol: Option<StopSymbol>,
    /// Line limit; may only be lower than the server's
    #[serde(default)]
    pub max_lines: Option<usize>,
}

/// Response body for `POST /api/v1/convert`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Converted lines joined with `\n`
    pub output: String,
    /// Number of lines converted
    pub lines: usize,
    /// Number of lines whose text changed
    pub changed: usize,
    /// Direction used
    pub direction: Direction,
    /// Stop symbol used
    pub stop_symbol: StopSymbol,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Response body for `GET /api/v1/amino-acids`
#[derive(Debug, Clone, Serialize)]
pub struct AminoAcidsResponse {
    /// The twenty residues in table order
    pub amino_acids: Vec<AminoAcidEntry>,
    /// Recognized stop spellings
    pub stop_symbols: Vec<&'static str>,
}

/// Service health response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the app was created
    pub uptime_seconds: i64,
    /// Whether the mutalyzer proxy is served
    pub mutalyzer_enabled: bool,
    /// Response time (RFC 3339)
    pub timestamp: String,
}

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<serde_json::Value>,
}

/// Service error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Input has {lines} lines, exceeding the maximum of {max_lines}")]
    LineLimitExceeded { lines: usize, max_lines: usize },

    #[error("Tool unavailable: {0}")]
    ToolUnavailable(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// Convert to HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::LineLimitExceeded { .. } => 413,
            ServiceError::ToolUnavailable(_) => 503,
            ServiceError::Upstream(_) => 502,
            ServiceError::Timeout => 504,
            ServiceError::ConfigError(_) => 500,
            ServiceError::InternalError(_) => 500,
        }
    }

    /// Convert to error response
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            ServiceError::LineLimitExceeded { lines, max_lines } => Some(serde_json::json!({
                "lines": lines,
                "max_lines": max_lines,
            })),
            _ => None,
        };
        ErrorResponse {
            error: match self {
                ServiceError::BadRequest(_) => "bad_request".to_string(),
                ServiceError::NotFound(_) => "not_found".to_string(),
                ServiceError::LineLimitExceeded { .. } => "line_limit_exceeded".to_string(),
                ServiceError::ToolUnavailable(_) => "tool_unavailable".to_string(),
                ServiceError::Upstream(_) => "upstream_error".to_string(),
                ServiceError::Timeout => "timeout".to_string(),
                ServiceError::ConfigError(_) => "config_error".to_string(),
                ServiceError::InternalError(_) => "internal_error".to_string(),
            },
            message: self.to_string(),
            details,
        }
    }
}

impl From<FerroAaError> for ServiceError {
    fn from(err: FerroAaError) -> Self {
        match err {
            FerroAaError::LineLimitExceeded { lines, max_lines } => {
                ServiceError::LineLimitExceeded { lines, max_lines }
            }
            FerroAaError::InvalidOption { .. } => ServiceError::BadRequest(err.to_string()),
            FerroAaError::Config { msg } => ServiceError::ConfigError(msg),
            FerroAaError::Io { .. } | FerroAaError::Json { .. } => {
                ServiceError::InternalError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_limit_response() {
        let err = ServiceError::from(FerroAaError::LineLimitExceeded {
            lines: 1001,
            max_lines: 1000,
        });
        assert_eq!(err.status_code(), 413);
        let response = err.to_response();
        assert_eq!(response.error, "line_limit_exceeded");
        let details = response.details.unwrap();
        assert_eq!(details["lines"], 1001);
        assert_eq!(details["max_lines"], 1000);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(ServiceError::ToolUnavailable("x".into()).status_code(), 503);
        assert_eq!(ServiceError::Upstream("x".into()).status_code(), 502);
        assert_eq!(ServiceError::Timeout.status_code(), 504);
    }

    #[test]
    fn test_convert_request_defaults() {
        let request: ConvertRequest = serde_json::from_str(r#"{"text": "p.Leu858Arg"}"#).unwrap();
        assert_eq!(request.direction, Direction::ThreeToOne);
        assert_eq!(request.stop_symbol, None);
        assert_eq!(request.max_lines, None);
    }

    #[test]
    fn test_convert_request_full() {
        let request: ConvertRequest = serde_json::from_str(
            r#"{"text": "p.L858R", "direction": "one-to-three", "stop_symbol": "Ter", "max_lines": 5}"#,
        )
        .unwrap();
        assert_eq!(request.direction, Direction::OneToThree);
        assert_eq!(request.stop_symbol, Some(StopSymbol::Ter));
        assert_eq!(request.max_lines, Some(5));
    }
}
