//! Helper constructors for each error kind

use super::kind::ErrorKind;
use super::types::{GatewayError, ServiceError};

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }
}

impl ServiceError {
    /// Generic service failure
    pub fn service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Service, message)
    }

    /// Request validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A named resource does not exist
    pub fn resource_not_found(resource_type: &str, resource_id: &str) -> Self {
        Self::new(
            ErrorKind::ResourceNotFound,
            format!("Resource not found: {} (ID: {})", resource_type, resource_id),
        )
        .with_detail("resource_type", resource_type)
        .with_detail("resource_id", resource_id)
    }

    /// Data processing failure
    pub fn data_processing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataProcessing, message)
    }

    /// A file could not be read
    pub fn file_read(file_path: &str) -> Self {
        Self::new(
            ErrorKind::FileRead,
            format!("Failed to read file: {}", file_path),
        )
        .with_detail("file_path", file_path)
    }

    /// LLM provider failure
    pub fn llm(provider: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Llm, message).with_detail("provider", provider)
    }

    /// The requested LLM provider does not exist
    pub fn provider_not_found(provider: &str) -> Self {
        Self::new(
            ErrorKind::ProviderNotFound,
            format!("LLM provider not found: {}", provider),
        )
        .with_detail("provider", provider)
    }

    /// The LLM provider did not answer within `timeout_seconds`
    pub fn provider_timeout(provider: &str, timeout_seconds: u64) -> Self {
        Self::new(
            ErrorKind::ProviderTimeout,
            format!("LLM provider timed out: {}", provider),
        )
        .with_detail("provider", provider)
        .with_detail("timeout_seconds", timeout_seconds)
    }

    /// Database failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Database query failure
    pub fn query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Query, message)
    }

    /// Database connection failure
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }
}
