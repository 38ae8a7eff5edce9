//! LLM provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variables holding the API key, in lookup order
pub const API_KEY_VARS: [&str; 3] = ["OPENAI_API_KEY", "AZURE_OPENAI_KEY", "AZURE_API_KEY"];
/// Environment variables holding the resource endpoint, in lookup order
pub const ENDPOINT_VARS: [&str; 2] = ["AZURE_OPENAI_ENDPOINT", "AZURE_ENDPOINT"];
pub const API_VERSION_VAR: &str = "OPENAI_API_VERSION";
pub const CHAT_DEPLOYMENT_VAR: &str = "DEPLOYMENT_4O";
pub const REASONING_DEPLOYMENT_VAR: &str = "DEPLOYMENT_o1";

/// Configuration of the single hosted provider and its deployments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmConfig {
    /// Provider every request is routed to
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API key; never written back out
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Deployment serving the `chat` mode
    #[serde(default = "default_chat_deployment")]
    pub chat_deployment: String,
    /// Deployment serving the `reasoning` mode
    #[serde(default = "default_reasoning_deployment")]
    pub reasoning_deployment: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            endpoint: None,
            api_version: default_api_version(),
            chat_deployment: default_chat_deployment(),
            reasoning_deployment: default_reasoning_deployment(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

impl LlmConfig {
    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|var| lookup(*var)) {
            self.api_key = Some(key);
        }
        if let Some(endpoint) = ENDPOINT_VARS.iter().find_map(|var| lookup(*var)) {
            self.endpoint = Some(endpoint);
        }
        if let Some(version) = lookup(API_VERSION_VAR) {
            self.api_version = version;
        }
        if let Some(deployment) = lookup(CHAT_DEPLOYMENT_VAR) {
            self.chat_deployment = deployment;
        }
        if let Some(deployment) = lookup(REASONING_DEPLOYMENT_VAR) {
            self.reasoning_deployment = deployment;
        }
        self
    }

    /// Whether both the key and the endpoint are present
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.endpoint.is_some()
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_api_version() -> String {
    "2024-08-01-preview".to_string()
}

fn default_chat_deployment() -> String {
    "gpt-4o".to_string()
}

fn default_reasoning_deployment() -> String {
    "o1".to_string()
}
