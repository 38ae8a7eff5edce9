//! LLM provider clients
//!
//! A provider knows how to invoke one hosted backend for each invocation
//! shape. It classifies its own failures but never retries; retry belongs to
//! the gateway.

pub mod azure;

pub use azure::AzureClient;

use crate::core::types::ResponseFormat;
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One LLM backend
///
/// Implementations are shared across concurrent calls and must not hold
/// per-call mutable state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider identifier used in error details and logs
    fn name(&self) -> &'static str;

    /// Schema-constrained generation
    ///
    /// # Returns
    /// The provider's JSON payload decoded into a mapping. A payload that does
    /// not decode is an LLM-kind error carrying `model`.
    async fn structured_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        model: &str,
        format: &ResponseFormat,
    ) -> Result<Map<String, Value>, ServiceError>;

    /// Single-turn generation over one concatenated prompt, no temperature
    async fn reasoning_completion(&self, prompt: &str, model: &str)
    -> Result<String, ServiceError>;

    /// System and user message exchange with temperature applied
    async fn chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        model: &str,
    ) -> Result<String, ServiceError>;
}
