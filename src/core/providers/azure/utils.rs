//! Azure OpenAI Utilities

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Azure OpenAI utilities
pub struct AzureUtils;

impl AzureUtils {
    /// Build the chat completions URL for a deployment
    pub fn build_azure_url(
        azure_endpoint: &str,
        deployment_name: &str,
        api_version: &str,
    ) -> String {
        let base = azure_endpoint.trim_end_matches('/');
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            base, deployment_name, api_version
        )
    }

    /// Seconds from a `retry-after` header, if it holds an integer
    pub fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
        headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }
}
