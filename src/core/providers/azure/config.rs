//! Azure OpenAI Configuration

use crate::config::LlmConfig;
use std::time::Duration;

/// Azure OpenAI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AzureConfig {
    /// Azure API key
    pub api_key: Option<String>,
    /// Azure endpoint URL
    pub azure_endpoint: Option<String>,
    /// API version
    pub api_version: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

impl AzureConfig {
    /// Create new Azure configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set Azure endpoint
    pub fn with_azure_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.azure_endpoint = Some(endpoint.into());
        self
    }

    /// Set API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole seconds, as reported in error details
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout.as_secs()
    }
}

impl From<&LlmConfig> for AzureConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            azure_endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}
