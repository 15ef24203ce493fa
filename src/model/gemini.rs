//! Gemini implementation of the ModelClient
//!
//! This module provides integration with the Google generative language API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use super::ModelClient;
use crate::error::{ServerError, ServerResult};

/// Gemini implementation of ModelClient
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// API key; absence is surfaced as a configuration error per request so
    /// the server can still boot without one
    api_key: Option<String>,

    /// Base URL for the generative language API
    api_base_url: String,

    /// Model identifier
    model: String,

    /// HTTP client
    client: Client,
}

impl GeminiClient {
    /// Create a new GeminiClient
    pub fn new(
        api_key: Option<String>,
        api_base_url: String,
        model: String,
        timeout: Duration,
    ) -> ServerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_base_url,
            model,
            client,
        })
    }

    /// Get the generateContent URL for the configured model
    fn generate_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base_url, self.model, api_key
        )
    }

    /// Pull the generated text out of the candidates envelope
    fn extract_text(result: &Value) -> Option<&str> {
        result
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn complete(&self, prompt: &str, system_instruction: &str) -> ServerResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ServerError::ConfigurationError(
                    "GEMINI_API_KEY environment variable not set. Check your deployment configuration.".to_string(),
                )
            })?;

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
            "generationConfig": {
                "responseMimeType": "application/json",
            }
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini generateContent");

        let response = self
            .client
            .post(self.generate_url(api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServerError::UpstreamError {
                status: Some(status.as_u16()),
                reason: format!("Gemini API returned an error: {}", body),
            });
        }

        let result: Value = response.json().await?;

        let text = Self::extract_text(&result).ok_or_else(|| ServerError::UpstreamError {
            status: Some(status.as_u16()),
            reason: "Gemini response contained no candidate text".to_string(),
        })?;

        Ok(text.to_string())
    }
}
