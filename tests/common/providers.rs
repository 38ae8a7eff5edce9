//! Provider and extractor doubles
//!
//! The library's mockall mocks only exist under `cfg(test)` of the library
//! itself, so the integration crate carries hand-written ones.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use transcript_gateway::{InformationExtractor, LlmProvider, ResponseFormat, ServiceError};

/// One recorded provider invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Structured { model: String, schema: String },
    Reasoning { model: String, prompt: String },
    Chat { model: String, temperature: f32 },
}

pub type Outcome = Result<Value, ServiceError>;

/// Provider replaying scripted outcomes in order
///
/// Once the script runs out every call fails with an LLM error.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Outcome {
        self.calls.lock().unwrap().push(call);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::llm("openai", "script exhausted")))
    }

    fn text(outcome: Outcome) -> Result<String, ServiceError> {
        match outcome? {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn structured_completion(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _temperature: f32,
        model: &str,
        format: &ResponseFormat,
    ) -> Result<Map<String, Value>, ServiceError> {
        let outcome = self.next(Call::Structured {
            model: model.to_string(),
            schema: format.name.clone(),
        });
        match outcome? {
            Value::Object(map) => Ok(map),
            other => Err(ServiceError::llm("openai", format!("not an object: {}", other))),
        }
    }

    async fn reasoning_completion(
        &self,
        prompt: &str,
        model: &str,
    ) -> Result<String, ServiceError> {
        Self::text(self.next(Call::Reasoning {
            model: model.to_string(),
            prompt: prompt.to_string(),
        }))
    }

    async fn chat_completion(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        temperature: f32,
        model: &str,
    ) -> Result<String, ServiceError> {
        Self::text(self.next(Call::Chat {
            model: model.to_string(),
            temperature,
        }))
    }
}

/// Extractor returning a fixed outcome
#[derive(Debug, Clone)]
pub struct StaticExtractor(pub Result<Vec<String>, ServiceError>);

#[async_trait]
impl InformationExtractor for StaticExtractor {
    async fn extract(&self, _transcript: &str) -> Result<Vec<String>, ServiceError> {
        self.0.clone()
    }
}
