//! Main flowgen server implementation
//!
//! This module contains the FlowgenServer implementation: the composition of
//! request validation, prompt construction, the upstream model call, and
//! response normalization into one request/response cycle.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::flowchart::{EditRequest, ModelReply};
use crate::model::ModelClient;
use crate::{normalizer, prompt};

/// Main server implementation
///
/// Stateless between calls: the only fields are configuration and the model
/// client, so concurrent requests share nothing mutable.
#[derive(Clone)]
pub struct FlowgenServer {
    /// Configuration
    pub config: ServerConfig,

    /// Model provider client
    model_client: Arc<dyn ModelClient>,
}

/// Manual Debug implementation that doesn't try to debug the trait object
impl std::fmt::Debug for FlowgenServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowgenServer")
            .field("config", &self.config)
            .finish()
    }
}

impl FlowgenServer {
    /// Create a new FlowgenServer
    pub fn new(config: ServerConfig, model_client: Arc<dyn ModelClient>) -> Self {
        Self {
            config,
            model_client,
        }
    }

    /// Handle one flowchart generation request end to end.
    ///
    /// Validate → build prompt → call upstream → normalize. Exactly one
    /// outbound call, no retries: the caller is interactive and a failure is
    /// more useful surfaced immediately than retried.
    pub async fn generate_flowchart(&self, request: EditRequest) -> ServerResult<ModelReply> {
        if request.description.trim().is_empty() {
            return Err(ServerError::MissingInput(
                "No description provided.".to_string(),
            ));
        }

        let user_prompt = prompt::build_user_prompt(&request)?;
        debug!(
            prompt_len = user_prompt.len(),
            has_existing_graph = request.nodes.is_some(),
            "Forwarding request to model"
        );

        let raw = self
            .model_client
            .complete(&user_prompt, prompt::SYSTEM_PROMPT)
            .await?;

        let reply = normalizer::normalize(&raw)?;
        debug!(is_graph = reply.is_graph(), "Model reply validated");
        Ok(reply)
    }

    /// Run the server until a shutdown signal (Ctrl-C) arrives
    pub async fn run(self) -> ServerResult<()> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Run the server until the given future resolves, then drain in-flight
    /// requests and return
    pub async fn run_with_shutdown(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> ServerResult<()> {
        info!("Starting flowgen server");

        // Build the API router
        let app = crate::api::build_router(Arc::new(self.clone()));

        // Create and bind the TCP listener
        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| {
                ServerError::ConfigurationError(format!("Invalid bind address: {}", e))
            })?;
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        // Run the server
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Wait for Ctrl-C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => error!("Failed to listen for shutdown signal: {}", err),
    }
}
