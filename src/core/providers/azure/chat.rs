//! Azure OpenAI chat completion wire format

use crate::core::types::ResponseFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Chat completion request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: MessageContent<'a>,
}

/// Plain string content or a list of typed parts
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentPart<'a> {
    #[serde(rename = "type")]
    pub part_type: &'static str,
    pub text: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// System and user messages with temperature
    pub fn chat(
        model: &'a str,
        system_prompt: &'a str,
        user_prompt: &'a str,
        temperature: f32,
    ) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Text(user_prompt),
                },
            ],
            temperature: Some(temperature),
            response_format: None,
        }
    }

    /// One user message carrying a single text part; reasoning models reject temperature
    pub fn reasoning(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![ContentPart {
                    part_type: "text",
                    text: prompt,
                }]),
            }],
            temperature: None,
            response_format: None,
        }
    }

    /// Chat request constrained to a JSON schema
    pub fn structured(
        model: &'a str,
        system_prompt: &'a str,
        user_prompt: &'a str,
        temperature: f32,
        format: &ResponseFormat,
    ) -> Self {
        let mut request = Self::chat(model, system_prompt, user_prompt, temperature);
        request.response_format = Some(json!({
            "type": "json_schema",
            "json_schema": {
                "name": format.name,
                "schema": format.schema,
                "strict": format.strict,
            }
        }));
        request
    }
}

/// Chat completion response body, reduced to what the gateway reads
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

impl ChatCompletionResponse {
    /// Message of the first choice
    pub fn first_message(&self) -> Option<&ResponseMessage> {
        self.choices.first().map(|choice| &choice.message)
    }
}
