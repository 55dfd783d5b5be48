//! Health check endpoint

use axum::{extract::State, response::Json};

use crate::service::{server::AppState, types::HealthResponse};

/// Report liveness, version and uptime
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.started_at).num_seconds(),
        mutalyzer_enabled: state.mutalyzer.is_some(),
        timestamp: now.to_rfc3339(),
    })
}
