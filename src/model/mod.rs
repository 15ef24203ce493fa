//! Model provider integration
//!
//! This module contains the model client trait and the Gemini implementation.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ServerResult;

/// Interface for the generative model provider
///
/// One operation is all the server depends on; the provider behind it is
/// swappable, and tests substitute a deterministic fake.
#[async_trait]
pub trait ModelClient: Send + Sync + Debug {
    /// Run one completion and return the raw text payload
    async fn complete(&self, prompt: &str, system_instruction: &str) -> ServerResult<String>;
}

/// Re-export specific implementations
pub mod gemini;
