//!
//! Flowgen Server - backend for natural-language flowchart generation
//!
//! Accepts a process description (and optionally the current flowchart state),
//! forwards it to a generative model, and relays the validated JSON reply to
//! the front-end renderer. This module exports all the components of the
//! server.

use std::sync::Arc;
use std::time::Duration;

/// API module
pub mod api;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Flowchart data model module
pub mod flowchart;

/// Model provider client module
pub mod model;

/// Response normalization module
pub mod normalizer;

/// Prompt construction module
pub mod prompt;

/// Server module
pub mod server;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use flowchart::{Edge, EditRequest, ModelReply, Node, NodeType};
pub use server::FlowgenServer;

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let model_client = create_model_client(&config)?;

    // Create server
    let server = FlowgenServer::new(config, model_client);

    // Run server
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt().with_env_filter(filter).with_target(true).init();
}

/// Create the model provider client
pub fn create_model_client(config: &ServerConfig) -> ServerResult<Arc<dyn model::ModelClient>> {
    tracing::info!(model = %config.gemini_model, "Using Gemini model client");
    let client = model::gemini::GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;
    Ok(Arc::new(client))
}
