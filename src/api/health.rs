//! Health check endpoint for the flowgen server

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
///
/// The server holds no connections or state worth probing; reachability plus
/// the running version is the whole story.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
