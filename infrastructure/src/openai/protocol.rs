//! Wire types for the `/chat/completions` protocol.
//!
//! Only the fields this adapter actually sends and reads are modeled;
//! unknown response fields are ignored.

use scope_application::StructuredRequest;
use scope_domain::Model;
use serde::{Deserialize, Serialize};

/// Sampling temperature used for non-reasoning models.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Reasoning effort hint sent to o-series models.
pub const REASONING_EFFORT: &str = "medium";

/// A chat message in the request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Structured-output constraint attached to the request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaSpec },
}

/// The named schema the response must conform to.
///
/// `strict` requires the service to validate against the schema rather than
/// treat it as a hint.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaSpec {
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

/// Request body for one completion call
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
    pub response_format: ResponseFormat,
}

impl ChatCompletionRequest {
    /// Build a schema-constrained request from the port-level value.
    ///
    /// Reasoning models take a reasoning-effort hint and no temperature;
    /// sampling models get [`DEFAULT_TEMPERATURE`].
    pub fn structured(model: &Model, request: &StructuredRequest) -> Self {
        let (temperature, reasoning_effort) = if model.is_reasoning() {
            (None, Some(REASONING_EFFORT.to_string()))
        } else {
            (Some(DEFAULT_TEMPERATURE), None)
        };

        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(request.system.clone()),
                ChatMessage::user(request.prompt.clone()),
            ],
            temperature,
            reasoning_effort,
            response_format: ResponseFormat::JsonSchema {
                json_schema: JsonSchemaSpec {
                    name: request.schema_name.clone(),
                    strict: true,
                    schema: request.schema.clone(),
                },
            },
        }
    }
}

/// Response body of one completion call
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if present and non-empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}
