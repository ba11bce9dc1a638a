//! Generate Questions use case.
//!
//! Issues the single schema-constrained generation request of a session and
//! returns the validated, bounded question set.
//!
//! The bound is checked before anything touches the network; the service's
//! response is deserialized and then defensively truncated to the requested
//! count, so an over-eager (or malicious) service can never push more
//! questions into the session than the caller asked for.

use crate::ports::generation_gateway::{GatewayError, GenerationGateway, StructuredRequest};
use chrono::{DateTime, SecondsFormat, Utc};
use scope_domain::util::preview;
use scope_domain::{
    BoundedQuestionList, DEFAULT_QUESTION_COUNT, DomainError, FOLLOW_UP_SCHEMA_NAME, Model, Query,
    QuestionSet, ScopingPromptTemplate,
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during question generation.
#[derive(Error, Debug)]
pub enum GenerateQuestionsError {
    #[error("Invalid configuration: {0}")]
    InvalidLimit(#[from] DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Malformed generation payload: {0}")]
    MalformedPayload(String),
}

/// Input for the [`GenerateQuestionsUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    /// The operator's research query.
    pub query: Query,
    /// Upper bound on the number of questions returned.
    pub max_questions: usize,
    /// Model serving the request.
    pub model: Model,
    /// Instant embedded in the persona. Defaults to now; inject a fixed
    /// value for reproducible prompts in tests.
    pub timestamp: DateTime<Utc>,
}

impl GenerateQuestionsInput {
    pub fn new(query: Query, model: Model) -> Self {
        Self {
            query,
            max_questions: DEFAULT_QUESTION_COUNT,
            model,
            timestamp: Utc::now(),
        }
    }

    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Expected shape of the service's structured response.
#[derive(Debug, Deserialize)]
struct FollowUpPayload {
    questions: Vec<String>,
}

/// Use case for generating the follow-up question set.
pub struct GenerateQuestionsUseCase {
    gateway: Arc<dyn GenerationGateway>,
}

impl GenerateQuestionsUseCase {
    pub fn new(gateway: Arc<dyn GenerationGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the generation request.
    ///
    /// Exactly one outbound call; no retries, no local state between
    /// invocations. On success the result holds at most
    /// `input.max_questions` questions, in the order the service produced
    /// them.
    pub async fn execute(
        &self,
        input: &GenerateQuestionsInput,
    ) -> Result<QuestionSet, GenerateQuestionsError> {
        // Rejected before any outbound call
        let bound = BoundedQuestionList::new(input.max_questions)?;

        let request = StructuredRequest::new(
            ScopingPromptTemplate::researcher_system(
                &input.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            ScopingPromptTemplate::followup_request(&input.query, bound.max_questions()),
            FOLLOW_UP_SCHEMA_NAME,
            bound.to_json_schema(),
        );

        debug!(
            "Requesting up to {} follow-up questions from {} for: {}",
            bound.max_questions(),
            input.model,
            preview(input.query.content(), 100)
        );

        let value = self
            .gateway
            .generate_structured(&input.model, &request)
            .await?;

        let payload: FollowUpPayload = serde_json::from_value(value)
            .map_err(|e| GenerateQuestionsError::MalformedPayload(e.to_string()))?;

        // Defensive truncation: a response exceeding the bound is corrected,
        // not rejected.
        let questions = QuestionSet::truncated(payload.questions, bound.max_questions());

        info!("Generated {} follow-up questions", questions.len());

        Ok(questions)
    }
}
