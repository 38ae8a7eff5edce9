//! Generation gateway
//!
//! The only entry point callers use to reach an LLM. Resolves the route, picks
//! the invocation shape, and runs the provider call under the retry policy.

use super::providers::{AzureClient, LlmProvider};
use super::providers::azure::AzureConfig;
use super::router::ModelRouter;
use super::types::{GenerationRequest, GenerationResult, InvocationShape};
use crate::config::Config;
use crate::utils::error::{Result, RetryPolicy, ServiceError};
use std::sync::Arc;
use tracing::{error, info};

/// LLM call gateway
///
/// Holds only read-only state and is shared across workers behind an `Arc`.
#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn LlmProvider>,
    router: ModelRouter,
    retry: RetryPolicy,
}

impl Gateway {
    pub fn new(provider: Arc<dyn LlmProvider>, router: ModelRouter, retry: RetryPolicy) -> Self {
        Self {
            provider,
            router,
            retry,
        }
    }

    /// Build the gateway against the configured Azure OpenAI resource
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = AzureClient::new(AzureConfig::from(config.llm()))?;
        info!(
            provider = client.name(),
            chat = %config.llm().chat_deployment,
            reasoning = %config.llm().reasoning_deployment,
            "LLM router initialized"
        );

        Ok(Self::new(
            Arc::new(client),
            ModelRouter::from_config(config.llm()),
            RetryPolicy::new(config.retry().to_retry_config()),
        ))
    }

    pub fn router(&self) -> &ModelRouter {
        &self.router
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Generate a completion
    ///
    /// Only [`ServiceError`] leaves this function. A request with a response
    /// format always takes the structured path; otherwise the route decides.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResult, ServiceError> {
        info!(mode = %request.mode, provider = %request.provider, "LLM request routed");

        let route = self
            .router
            .resolve(&request.provider, &request.mode)
            .map_err(|e| {
                error!(mode = %request.mode, error = %e, "LLM generation failed");
                ServiceError::llm(
                    self.router.provider(),
                    format!("Error during LLM generation: {}", e),
                )
                .with_detail("mode", request.mode.as_str())
            })?;

        let provider = self.provider.as_ref();
        let model = route.model.as_str();

        match (&request.response_format, route.shape) {
            (Some(format), _) => self
                .retry
                .call("structured_completion", || {
                    provider.structured_completion(
                        &request.system_prompt,
                        &request.user_prompt,
                        request.temperature,
                        model,
                        format,
                    )
                })
                .await
                .map(GenerationResult::Structured),
            (None, InvocationShape::Reasoning) => {
                let prompt = format!("{}{}", request.system_prompt, request.user_prompt);
                self.retry
                    .call("reasoning_completion", || {
                        provider.reasoning_completion(&prompt, model)
                    })
                    .await
                    .map(GenerationResult::Text)
            }
            (None, _) => self
                .retry
                .call("chat_completion", || {
                    provider.chat_completion(
                        &request.system_prompt,
                        &request.user_prompt,
                        request.temperature,
                        model,
                    )
                })
                .await
                .map(GenerationResult::Text),
        }
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("provider", &self.provider.name())
            .field("router", &self.router)
            .field("retry", &self.retry)
            .finish()
    }
}
