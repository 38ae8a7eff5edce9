//! Provider and mode routing
//!
//! One real provider backs every request. Unknown provider ids are replaced
//! with it and logged; unknown modes are a caller bug and fail fast.

use super::types::{InvocationShape, Mode};
use crate::config::LlmConfig;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Routing failure
///
/// Deliberately not a classified service error: a bad mode is a programming or
/// configuration mistake and must not be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

impl FromStr for Mode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Mode::Chat),
            "reasoning" => Ok(Mode::Reasoning),
            other => Err(RouteError::UnknownMode(other.to_string())),
        }
    }
}

/// Resolved routing target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Provider that will actually serve the call
    pub provider: String,
    /// Model or deployment id
    pub model: String,
    pub mode: Mode,
    pub shape: InvocationShape,
}

/// Maps `(provider, mode)` to a concrete model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRouter {
    provider: String,
    chat_model: String,
    reasoning_model: String,
}

impl ModelRouter {
    pub fn new(
        provider: impl Into<String>,
        chat_model: impl Into<String>,
        reasoning_model: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            chat_model: chat_model.into(),
            reasoning_model: reasoning_model.into(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            &config.provider,
            &config.chat_deployment,
            &config.reasoning_deployment,
        )
    }

    /// The single supported provider
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn model_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Chat => &self.chat_model,
            Mode::Reasoning => &self.reasoning_model,
        }
    }

    /// Resolve the target for a request
    ///
    /// A provider other than the supported one is substituted, never rejected.
    pub fn resolve(&self, provider: &str, mode: &str) -> Result<Route, RouteError> {
        if provider != self.provider {
            warn!(
                requested = provider,
                provider = %self.provider,
                "Requested provider {} ignored, using {}",
                provider,
                self.provider
            );
        }

        let mode: Mode = mode.parse()?;
        let shape = match mode {
            Mode::Chat => InvocationShape::Chat,
            Mode::Reasoning => InvocationShape::Reasoning,
        };
        let model = self.model_for(mode).to_string();

        debug!(provider = %self.provider, mode = %mode, model = %model, "Route resolved");

        Ok(Route {
            provider: self.provider.clone(),
            model,
            mode,
            shape,
        })
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::from_config(&LlmConfig::default())
    }
}
