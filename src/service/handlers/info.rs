//! Service information endpoints

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::service::server::AppState;

/// Provide basic service information
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "ferro-aa-web",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Protein variant amino acid notation converter",
        "limits": {
            "max_lines": state.config.convert.max_lines,
            "max_request_size": state.config.server.max_request_size,
        },
        "mutalyzer": {
            "enabled": state.mutalyzer.is_some(),
            "api_url": state.mutalyzer.as_ref().map(|m| m.base_url().to_string()),
        },
        "endpoints": {
            "convert": "POST /api/v1/convert",
            "amino_acids": "GET /api/v1/amino-acids",
            "lookup": "GET /api/v1/amino-acids/{code}",
            "mutalyzer": "GET /api/v1/mutalyzer/normalize/{description}",
            "health": "GET /api/v1/health"
        },
        "documentation": {
            "repository": "https://github.com/fulcrumgenomics/ferro-hgvs",
            "api_docs": "/api/v1/info"
        }
    }))
}
