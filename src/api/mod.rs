//! API module for the flowgen server
//!
//! This module contains the API routes and handlers.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod errors;
pub mod health;

use crate::flowchart::EditRequest;
use crate::server::FlowgenServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<FlowgenServer>) -> Router {
    Router::new()
        // Flowchart generation
        .route("/generate-flowchart", post(handle_generate_flowchart))
        // Health check
        .route("/health", get(health::health_check))
        // CORS is wide open so the front-end dev server can reach us
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}

/// Handler for flowchart generation requests
async fn handle_generate_flowchart(
    State(server): State<Arc<FlowgenServer>>,
    Json(request): Json<EditRequest>,
) -> impl IntoResponse {
    match server.generate_flowchart(request).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(err) => errors::api_error_response(&err),
    }
}

// Re-export for easier imports
pub use errors::api_error_response;
