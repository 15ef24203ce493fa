//! Configuration for the flowgen server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use crate::error::ServerResult;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// API key for the Gemini API
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Base URL of the Gemini API
    #[serde(default = "default_api_base_url")]
    pub gemini_api_url: String,

    /// Model identifier used for generation
    #[serde(default = "default_model")]
    pub gemini_model: String,

    /// Timeout for the upstream model call, in seconds
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    // 5001 avoids clashing with the front-end dev server on 3000
    5001
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override from environment variables
        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Ok(host) = env::var("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            config.gemini_api_key = Some(api_key);
        }

        if let Ok(api_url) = env::var("GEMINI_API_URL") {
            config.gemini_api_url = api_url;
        }

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.gemini_model = model;
        }

        if let Ok(timeout) = env::var("UPSTREAM_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.upstream_timeout_secs = secs;
            } else {
                warn!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", timeout);
            }
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        // The key is checked per request so the server still boots without it,
        // but flag the misconfiguration early.
        if config.gemini_api_key.as_deref().unwrap_or("").is_empty() {
            warn!("No GEMINI_API_KEY provided - flowchart generation requests will fail!");
        }

        info!("Loaded server configuration");
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            gemini_api_key: None,
            gemini_api_url: default_api_base_url(),
            gemini_model: default_model(),
            upstream_timeout_secs: default_upstream_timeout(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_expectations() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(
            config.gemini_api_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.upstream_timeout_secs, 30);
        assert!(config.gemini_api_key.is_none());
    }
}
