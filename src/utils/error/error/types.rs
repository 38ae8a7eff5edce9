//! Error types for the gateway

use super::kind::ErrorKind;
use serde_json::{Map, Value};
use thiserror::Error;

/// Result type alias for start-up and plumbing code
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Start-up and infrastructure errors
///
/// These never reach an HTTP client; request-path failures are [`ServiceError`]s.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Classified failure outside a request, e.g. one-shot extraction
    #[error("{} ({})", .0, .0.kind())]
    Service(#[from] ServiceError),
}

/// A classified failure
///
/// Created at the failure site closest to the cause and propagated unchanged.
/// `details` is a flat, machine-readable map rendered into the error envelope.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ServiceError {
    pub(super) kind: ErrorKind,
    pub(super) message: String,
    pub(super) details: Map<String, Value>,
}

impl ServiceError {
    /// Create an error of the given kind with no details
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Attach a detail entry, replacing any previous value for `key`
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Merge a map of details into this error
    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details.extend(details);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Look up a single detail
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// HTTP status code for this error's kind
    pub fn http_code(&self) -> u16 {
        self.kind.http_code()
    }

    /// Whether this error's kind is `kind` or one of its descendants
    pub fn is_a(&self, kind: ErrorKind) -> bool {
        self.kind.is_a(kind)
    }
}
