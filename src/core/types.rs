//! Request and result types of the generation gateway

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Default provider id when a caller does not name one
pub const DEFAULT_PROVIDER: &str = "openai";

/// Invocation mode requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Role-based exchange with temperature
    Chat,
    /// Single concatenated prompt, provider-side temperature ignored
    Reasoning,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::Reasoning => "reasoning",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the provider is invoked for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationShape {
    /// Schema-constrained output decoded into a mapping
    Structured,
    Reasoning,
    Chat,
}

/// Declared output schema for structured generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Schema name reported to the provider
    pub name: String,
    /// JSON schema of the expected object
    pub schema: Value,
    /// Ask the provider to enforce the schema strictly
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl ResponseFormat {
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
            strict: true,
        }
    }
}

fn default_strict() -> bool {
    true
}

/// One generation call
///
/// `mode` stays the caller-supplied string; the router decides whether it is
/// meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub response_format: Option<ResponseFormat>,
    pub temperature: f32,
    pub provider: String,
    pub mode: String,
}

impl GenerationRequest {
    /// Chat request against the default provider at temperature 1.0
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            response_format: None,
            temperature: 1.0,
            provider: DEFAULT_PROVIDER.to_string(),
            mode: Mode::Chat.as_str().to_string(),
        }
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// Decoded provider output
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Text(String),
    Structured(Map<String, Value>),
}

impl GenerationResult {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Text(text) => Some(text),
            GenerationResult::Structured(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<Map<String, Value>> {
        match self {
            GenerationResult::Structured(map) => Some(map),
            GenerationResult::Text(_) => None,
        }
    }
}
