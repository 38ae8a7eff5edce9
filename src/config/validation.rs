//! Configuration validation
//!
//! Every configuration section implements [`Validate`]; [`super::Config::validate`]
//! runs them in order and reports the first failure.

use super::models::*;
use tracing::warn;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Workers cannot be 0".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Validate for LlmConfig {
    fn validate(&self) -> Result<(), String> {
        if self.chat_deployment.trim().is_empty() {
            return Err("Chat deployment cannot be empty".to_string());
        }

        if self.reasoning_deployment.trim().is_empty() {
            return Err("Reasoning deployment cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("LLM timeout cannot be 0".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            let url = Url::parse(endpoint)
                .map_err(|e| format!("Endpoint has invalid URL format: {}", e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!(
                    "Endpoint must use http:// or https:// scheme, got: {}",
                    url.scheme()
                ));
            }
        }

        // Calls fail with a classified LLM error until credentials arrive
        if !self.has_credentials() {
            warn!("LLM endpoint or API key not configured; generation calls will fail");
        }

        Ok(())
    }
}

impl Validate for RetrySettings {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=MAX_RETRY_DELAY_SECS).contains(&self.base_delay_secs) {
            return Err(format!(
                "Base delay must be between 0 and {} seconds",
                MAX_RETRY_DELAY_SECS
            ));
        }

        if !(0.0..=MAX_RETRY_DELAY_SECS).contains(&self.max_delay_secs) {
            return Err(format!(
                "Max delay must be between 0 and {} seconds",
                MAX_RETRY_DELAY_SECS
            ));
        }

        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            return Err("Backoff multiplier must be at least 1.0".to_string());
        }

        if !(0.0..=1.0).contains(&self.jitter) {
            return Err("Jitter must be between 0.0 and 1.0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
