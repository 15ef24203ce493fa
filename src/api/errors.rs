//! Error handling for the flowgen server API
//!
//! This module contains standardized error handling for the API: every
//! [`ServerError`] maps to a status code and a JSON body with a
//! human-readable message.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, warn};

use crate::error::ServerError;

/// General error response handler for API errors
///
/// Client faults map to 400; configuration, upstream, and parsing faults map
/// to 500. A malformed model response additionally carries the exact raw
/// upstream text under `raw_response` to aid debugging.
pub fn api_error_response(err: &ServerError) -> axum::response::Response {
    let (status, body) = match err {
        ServerError::MissingInput(msg) => {
            warn!("Rejected request: {}", msg);
            (StatusCode::BAD_REQUEST, json!({ "error": msg }))
        }
        ServerError::MalformedResponse { raw } => {
            error!("Model returned non-JSON text");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to decode JSON from model response.",
                    "raw_response": raw,
                }),
            )
        }
        ServerError::ConfigurationError(_)
        | ServerError::UpstreamError { .. }
        | ServerError::InvalidShape(_)
        | ServerError::InternalError(_) => {
            error!("Request failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            )
        }
    };

    (status, Json(body)).into_response()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        api_error_response(&self)
    }
}
