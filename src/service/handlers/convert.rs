//! Notation conversion endpoint

use axum::{extract::State, response::Json};

use crate::batch::{BatchConfig, BatchConverter};
use crate::service::{
    handlers::{error_reply, ErrorReply},
    server::AppState,
    types::{ConvertRequest, ConvertResponse, ServiceError},
    validation::effective_max_lines,
};

/// Convert a block of variants, one per line
pub async fn convert(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ErrorReply> {
    let max_lines = effective_max_lines(state.config.convert.max_lines, request.max_lines)
        .map_err(|e| error_reply(ServiceError::BadRequest(e.to_string())))?;

    let config = BatchConfig::new(request.direction)
        .stop_symbol(request.stop_symbol.unwrap_or_default())
        .max_lines(max_lines);

    let output = BatchConverter::new(config.clone())
        .convert(&request.text)
        .map_err(|e| error_reply(e.into()))?;

    Ok(Json(ConvertResponse {
        output: output.text(),
        lines: output.total(),
        changed: output.changed_count(),
        direction: config.direction,
        stop_symbol: config.stop_symbol,
        processing_time_ms: output.duration.as_millis() as u64,
    }))
}
