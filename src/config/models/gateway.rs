//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM provider configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Retry policy for provider calls
    #[serde(default)]
    pub retry: RetrySettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Defaults with the LLM section read from the environment
    pub fn from_env() -> Self {
        Self {
            llm: LlmConfig::default().with_env_overrides(),
            ..Self::default()
        }
    }
}
