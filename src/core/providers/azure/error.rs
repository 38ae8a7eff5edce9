//! Azure OpenAI Error Handling
//!
//! Every provider-side failure becomes an LLM-kind [`ServiceError`]; only a
//! transport timeout becomes a provider timeout.

use super::PROVIDER_NAME;
use crate::utils::error::ServiceError;

/// Azure error mapper
#[derive(Debug)]
pub struct AzureErrorMapper;

impl AzureErrorMapper {
    /// Classify a non-success HTTP response
    pub fn map_http_error(
        status_code: u16,
        response_body: &str,
        retry_after: Option<u64>,
    ) -> ServiceError {
        let message = extract_azure_error_message(response_body);
        let error = match status_code {
            400 => ServiceError::llm(PROVIDER_NAME, format!("Bad request: {}", message)),
            401 => ServiceError::llm(PROVIDER_NAME, "Invalid Azure API key or credentials"),
            403 => ServiceError::llm(PROVIDER_NAME, "Forbidden: insufficient permissions"),
            404 => ServiceError::llm(PROVIDER_NAME, "Azure deployment not found"),
            429 => ServiceError::llm(PROVIDER_NAME, "Rate limit exceeded"),
            500..=599 => ServiceError::llm(PROVIDER_NAME, format!("Server error: {}", message)),
            _ => ServiceError::llm(PROVIDER_NAME, message),
        }
        .with_detail("status", status_code);

        match retry_after {
            Some(secs) if status_code == 429 => error.with_detail("retry_after", secs),
            _ => error,
        }
    }

    /// Classify a transport failure
    pub fn map_request_error(error: &reqwest::Error, timeout_seconds: u64) -> ServiceError {
        if error.is_timeout() {
            ServiceError::provider_timeout(PROVIDER_NAME, timeout_seconds)
        } else {
            ServiceError::llm(
                PROVIDER_NAME,
                format!("Error calling Azure OpenAI API: {}", error),
            )
        }
    }

    /// Classify content that could not be decoded
    pub fn map_parsing_error(error: &serde_json::Error) -> ServiceError {
        ServiceError::llm(
            PROVIDER_NAME,
            format!("Failed to parse model response as JSON: {}", error),
        )
    }
}

/// Extract error message from an Azure error body
pub fn extract_azure_error_message(body: &str) -> String {
    let Ok(response) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    if let Some(error) = response.get("error") {
        let message = error.get("message").and_then(|m| m.as_str());
        let code = error.get("code").and_then(|c| c.as_str());
        match (code, message) {
            (Some(code), Some(message)) => return format!("{}: {}", code, message),
            (None, Some(message)) => return message.to_string(),
            _ => {}
        }
    }

    response.to_string()
}
