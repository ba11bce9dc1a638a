//! Bounding shape for schema-constrained generation.
//!
//! The generation service is not asked for free text: the request carries a
//! JSON Schema describing "an object with a `questions` array of at most N
//! strings", and the service is required to emit a conforming value. The
//! shape is built here as a value and passed through the gateway port
//! uninterpreted.

use crate::core::error::DomainError;

/// Identifier attached to the schema in structured-output requests.
pub const FOLLOW_UP_SCHEMA_NAME: &str = "follow_up_questions";

/// The bound for a follow-up question list (Value Object)
///
/// Validated at construction: a zero bound is rejected before any request
/// is composed, so a misconfigured session never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedQuestionList {
    max_questions: usize,
}

impl BoundedQuestionList {
    pub fn new(max_questions: usize) -> Result<Self, DomainError> {
        if max_questions == 0 {
            return Err(DomainError::InvalidQuestionLimit(max_questions));
        }
        Ok(Self { max_questions })
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// Render the bound as a JSON Schema value for the generation request.
    pub fn to_json_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "maxItems": self.max_questions,
                    "description": "Follow-up questions to clarify the research direction."
                }
            },
            "required": ["questions"],
            "additionalProperties": false
        })
    }
}
