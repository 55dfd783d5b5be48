//! Mutalyzer passthrough endpoint

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::service::{
    handlers::{error_reply, ErrorReply},
    server::AppState,
    types::ServiceError,
    validation::validate_description,
};

/// Forward a description to mutalyzer's normalizer and relay the answer
pub async fn normalize(
    State(state): State<AppState>,
    Path(description): Path<String>,
) -> Result<Response, ErrorReply> {
    let proxy = state.mutalyzer.as_ref().ok_or_else(|| {
        error_reply(ServiceError::ToolUnavailable(
            "mutalyzer proxy is disabled".to_string(),
        ))
    })?;

    validate_description(&description)
        .map_err(|e| error_reply(ServiceError::BadRequest(e.to_string())))?;

    let upstream = proxy.normalize(&description).await.map_err(|e| {
        tracing::warn!("Mutalyzer proxy failed for {}: {}", description, e);
        error_reply(e)
    })?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Ok((
        status,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, proxy.cache_control().to_string()),
        ],
        upstream.body,
    )
        .into_response())
}
