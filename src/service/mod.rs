//! Web service module for protein notation conversion
//!
//! This module provides a REST API over the converter:
//! - `POST /api/v1/convert` converts a block of variants under a line limit
//! - `GET /api/v1/amino-acids` serves the lookup table
//! - `GET /api/v1/mutalyzer/normalize/{description}` relays requests to the
//!   Mutalyzer normalizer

pub mod config;
pub mod handlers;
pub mod mutalyzer;
pub mod server;
pub mod types;
pub mod validation;

pub use config::ServiceConfig;
pub use server::{create_app, AppState};
pub use types::*;
