//! HTTP request handlers for the ferro-aa web service

pub mod amino_acids;
pub mod convert;
pub mod health;
pub mod info;
pub mod mutalyzer;

use axum::{http::StatusCode, response::Json};

use crate::service::types::{ErrorResponse, ServiceError};

/// Error half of every handler's return type
pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Turn a [`ServiceError`] into its HTTP reply
pub fn error_reply(error: ServiceError) -> ErrorReply {
    (
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(error.to_response()),
    )
}
