//! Azure OpenAI Client
//!
//! HTTP client wrapper for Azure OpenAI Service

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::PROVIDER_NAME;
use super::chat::{ChatCompletionRequest, ChatCompletionResponse};
use super::config::AzureConfig;
use super::error::AzureErrorMapper;
use super::utils::AzureUtils;
use crate::core::providers::LlmProvider;
use crate::core::types::ResponseFormat;
use crate::utils::error::{Result, ServiceError};
use crate::utils::logging::preview;

/// Azure OpenAI client
///
/// Owns one pooled `reqwest::Client`; cloning shares the pool.
#[derive(Debug, Clone)]
pub struct AzureClient {
    config: AzureConfig,
    http_client: reqwest::Client,
}

impl AzureClient {
    /// Create new Azure client
    pub fn new(config: AzureConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder().timeout(config.timeout).build()?;

        if config.azure_endpoint.is_none() || config.api_key.is_none() {
            warn!("Azure OpenAI endpoint or API key missing; requests will fail until configured");
        }
        info!(api_version = %config.api_version, "Azure OpenAI client initialized");

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    /// Build request URL
    pub fn build_url(&self, deployment_name: &str) -> std::result::Result<String, ServiceError> {
        let endpoint = self
            .config
            .azure_endpoint
            .as_deref()
            .ok_or_else(|| ServiceError::llm(PROVIDER_NAME, "Azure endpoint not configured"))?;

        Ok(AzureUtils::build_azure_url(
            endpoint,
            deployment_name,
            &self.config.api_version,
        ))
    }

    /// Build request headers
    fn build_headers(&self) -> std::result::Result<HeaderMap, ServiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::llm(PROVIDER_NAME, "No API key available"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| ServiceError::llm(PROVIDER_NAME, format!("Invalid API key: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Send one completion and return the first choice's content
    ///
    /// Every error carries the `model` detail.
    async fn complete(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> std::result::Result<String, ServiceError> {
        info!(model = request.model, "Calling Azure OpenAI API");

        self.execute(request)
            .await
            .map_err(|e| e.with_detail("model", request.model))
    }

    async fn execute(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> std::result::Result<String, ServiceError> {
        let url = self.build_url(request.model)?;
        let headers = self.build_headers()?;
        let timeout_seconds = self.config.timeout_seconds();

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| AzureErrorMapper::map_request_error(&e, timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = AzureUtils::retry_after_secs(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(AzureErrorMapper::map_http_error(
                status.as_u16(),
                &body,
                retry_after,
            ));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AzureErrorMapper::map_request_error(&e, timeout_seconds))?;

        let message = body
            .first_message()
            .ok_or_else(|| ServiceError::llm(PROVIDER_NAME, "Provider returned no choices"))?;

        match (&message.content, &message.refusal) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(refusal)) => Err(ServiceError::llm(
                PROVIDER_NAME,
                format!("Model refused the request: {}", refusal),
            )),
            (None, None) => Err(ServiceError::llm(
                PROVIDER_NAME,
                "Provider returned empty content",
            )),
        }
    }
}

#[async_trait]
impl LlmProvider for AzureClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn structured_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        model: &str,
        format: &ResponseFormat,
    ) -> std::result::Result<Map<String, Value>, ServiceError> {
        debug!(model, schema = %format.name, "Using structured response");
        let request =
            ChatCompletionRequest::structured(model, system_prompt, user_prompt, temperature, format);

        let content = self.complete(&request).await.inspect_err(|e| {
            warn!(model, error = %e, "Structured generation failed");
        })?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ServiceError::llm(
                PROVIDER_NAME,
                format!("Model response is not a JSON object: {}", preview(&other.to_string(), 80)),
            )
            .with_detail("model", model)),
            Err(e) => {
                warn!(model, error = %e, "Failed to parse JSON response");
                Err(AzureErrorMapper::map_parsing_error(&e).with_detail("model", model))
            }
        }
    }

    async fn reasoning_completion(
        &self,
        prompt: &str,
        model: &str,
    ) -> std::result::Result<String, ServiceError> {
        debug!(model, "Calling reasoning model");
        let request = ChatCompletionRequest::reasoning(model, prompt);

        self.complete(&request).await.inspect_err(|e| {
            warn!(model, error = %e, prompt = %preview(prompt, 200), "Reasoning generation failed");
        })
    }

    async fn chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        model: &str,
    ) -> std::result::Result<String, ServiceError> {
        debug!(model, "Calling chat model");
        let request = ChatCompletionRequest::chat(model, system_prompt, user_prompt, temperature);

        self.complete(&request).await.inspect_err(|e| {
            warn!(model, error = %e, "Chat generation failed");
        })
    }
}
