//! Web server setup using Axum framework

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::service::{
    config::ServiceConfig,
    handlers,
    mutalyzer::MutalyzerProxy,
    types::{ErrorResponse, ServiceError},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// Mutalyzer proxy, when enabled
    pub mutalyzer: Option<Arc<MutalyzerProxy>>,
    /// When the app was created
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Build state from configuration
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let mutalyzer = if config.mutalyzer.enabled {
            tracing::info!("Mutalyzer proxy enabled: {}", config.mutalyzer.api_url);
            Some(Arc::new(MutalyzerProxy::new(&config.mutalyzer)?))
        } else {
            tracing::debug!("Mutalyzer proxy disabled");
            None
        };

        Ok(Self {
            config: Arc::new(config),
            mutalyzer,
            started_at: chrono::Utc::now(),
        })
    }
}

/// Create the Axum application with all routes and middleware
pub fn create_app(config: ServiceConfig) -> Result<(Router, AppState), ServiceError> {
    // Parse max request size
    let max_size = parse_size(&config.server.max_request_size)
        .map_err(|e| ServiceError::ConfigError(format!("Invalid max_request_size: {}", e)))?;

    let state = AppState::new(config)?;

    let app = Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/health", get(handlers::health::health_check))
        // Conversion
        .route("/api/v1/convert", post(handlers::convert::convert))
        // Lookup table
        .route(
            "/api/v1/amino-acids",
            get(handlers::amino_acids::list_amino_acids),
        )
        .route(
            "/api/v1/amino-acids/{code}",
            get(handlers::amino_acids::lookup),
        )
        // Mutalyzer passthrough
        .route(
            "/api/v1/mutalyzer/normalize/{*description}",
            get(handlers::mutalyzer::normalize),
        )
        // API info endpoint
        .route("/api/v1/info", get(handlers::info::service_info))
        // Handle 404s
        .fallback(handle_404)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(max_size));

    Ok((app, state))
}

/// Handle 404 errors
pub async fn handle_404() -> (StatusCode, Json<ErrorResponse>) {
    let error = ServiceError::NotFound("Endpoint not found".to_string());
    (StatusCode::NOT_FOUND, Json(error.to_response()))
}

/// Parse size strings like "10MB", "1GB", etc.
fn parse_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_uppercase();
    let invalid = || format!("Invalid size format: {}", size_str);

    // Longer suffixes first so "MB" is not read as "B"
    for (suffix, scale) in [("GB", 1usize << 30), ("MB", 1 << 20), ("KB", 1 << 10), ("B", 1)] {
        if let Some(num_str) = size_str.strip_suffix(suffix) {
            let num: usize = num_str.trim().parse().map_err(|_| invalid())?;
            return num.checked_mul(scale).ok_or_else(invalid);
        }
    }

    // Plain number (bytes)
    size_str.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size("100B").unwrap(), 100);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("10MB").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);

        // Case insensitive
        assert_eq!(parse_size("10mb").unwrap(), 10 * 1024 * 1024);

        // Invalid formats
        assert!(parse_size("invalid").is_err());
        assert!(parse_size("10XB").is_err());
    }

    #[test]
    fn test_create_app_rejects_bad_size() {
        let mut config = ServiceConfig::default();
        config.server.max_request_size = "lots".to_string();
        assert!(matches!(
            create_app(config),
            Err(ServiceError::ConfigError(_))
        ));
    }

    #[test]
    fn test_state_without_mutalyzer() {
        let mut config = ServiceConfig::default();
        config.mutalyzer.enabled = false;
        let state = AppState::new(config).unwrap();
        assert!(state.mutalyzer.is_none());
    }
}
