//! Run Scoping use case.
//!
//! Drives a full scoping session: generate the follow-up questions, collect
//! one answer per question in order, compose the research context, hand it
//! off.
//!
//! The session yields exactly once — while the generation request is in
//! flight. Everything after that is sequential, blocking, operator-paced
//! work. If generation fails the session drops straight to its terminal
//! failed phase and the answer port is never touched: there is no partial
//! answer collection and no partially composed context.

use crate::config::GenerationParams;
use crate::ports::answer_input::{AnswerInputError, AnswerInputPort};
use crate::ports::generation_gateway::GenerationGateway;
use crate::ports::progress::{NoScopingProgress, ScopingProgress};
use crate::use_cases::generate_questions::{
    GenerateQuestionsError, GenerateQuestionsInput, GenerateQuestionsUseCase,
};
use chrono::{DateTime, Utc};
use scope_domain::util::preview;
use scope_domain::{DomainError, Query, ResearchContext, ResearchParams, ScopingSession};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running a scoping session.
#[derive(Error, Debug)]
pub enum RunScopingError {
    #[error("Question generation failed: {0}")]
    Generation(#[from] GenerateQuestionsError),

    #[error("Answer collection failed: {0}")]
    Input(#[from] AnswerInputError),

    #[error("Session error: {0}")]
    Session(#[from] DomainError),
}

/// Input for the [`RunScopingUseCase`].
#[derive(Debug, Clone)]
pub struct RunScopingInput {
    /// The operator's research query.
    pub query: Query,
    /// Breadth (question bound) and depth for the downstream stage.
    pub params: ResearchParams,
    /// Generation request parameters — only the model is used here; the
    /// timeout is consumed where the gateway is built.
    pub generation: GenerationParams,
    /// Instant embedded in the persona; injectable for reproducible tests.
    pub timestamp: DateTime<Utc>,
}

impl RunScopingInput {
    pub fn new(query: Query, params: ResearchParams, generation: GenerationParams) -> Self {
        Self {
            query,
            params,
            generation,
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Use case for running a complete scoping session.
pub struct RunScopingUseCase {
    generator: GenerateQuestionsUseCase,
    answer_input: Arc<dyn AnswerInputPort>,
}

impl RunScopingUseCase {
    pub fn new(gateway: Arc<dyn GenerationGateway>, answer_input: Arc<dyn AnswerInputPort>) -> Self {
        Self {
            generator: GenerateQuestionsUseCase::new(gateway),
            answer_input,
        }
    }

    /// Execute the session without progress callbacks.
    pub async fn execute(&self, input: RunScopingInput) -> Result<ResearchContext, RunScopingError> {
        self.execute_with_progress(input, &NoScopingProgress).await
    }

    /// Execute the session with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: RunScopingInput,
        progress: &dyn ScopingProgress,
    ) -> Result<ResearchContext, RunScopingError> {
        info!(
            "Starting scoping session (breadth={}, depth={}): {}",
            input.params.breadth,
            input.params.depth,
            preview(input.query.content(), 100)
        );

        let mut session = ScopingSession::new(input.query.clone(), input.params);
        session.begin_generation()?;

        let generation_input =
            GenerateQuestionsInput::new(input.query, input.generation.model.clone())
                .with_max_questions(input.params.breadth)
                .with_timestamp(input.timestamp);

        progress.on_generation_start(&input.generation.model);
        let questions = match self.generator.execute(&generation_input).await {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Generation failed, aborting session: {}", e);
                session.fail(e.to_string());
                return Err(e.into());
            }
        };
        progress.on_generation_complete(questions.len());

        session.questions_received(questions)?;

        let total = session.questions().len();
        while let Some(question) = session.next_question().cloned() {
            progress.on_answer_start(session.transcript().len(), total);
            let answer = match self.answer_input.collect_answer(&question) {
                Ok(answer) => answer,
                Err(e) => {
                    session.fail(e.to_string());
                    return Err(e.into());
                }
            };
            session.record_answer(answer)?;
        }

        let context = session.compose()?;
        session.finish()?;

        info!(
            "Scoping session complete: {} answers collected",
            context.pairs().len()
        );

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generation_gateway::{GatewayError, StructuredRequest};
    use async_trait::async_trait;
    use scope_domain::{Answer, FollowUpQuestion, Model};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        response: Result<serde_json::Value, &'static str>,
        calls: Mutex<usize>,
    }

    impl MockGateway {
        fn returning(value: serde_json::Value) -> Self {
            Self {
                response: Ok(value),
                calls: Mutex::new(0),
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                response: Err(message),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerationGateway for MockGateway {
        async fn generate_structured(
            &self,
            _model: &Model,
            _request: &StructuredRequest,
        ) -> Result<serde_json::Value, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            match &self.response {
                Ok(value) => Ok(value.clone()),
                Err(msg) => Err(GatewayError::RequestFailed(msg.to_string())),
            }
        }
    }

    struct ScriptedAnswers {
        answers: Mutex<VecDeque<&'static str>>,
        prompts_seen: Mutex<Vec<String>>,
    }

    impl ScriptedAnswers {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                prompts_seen: Mutex::new(Vec::new()),
            }
        }

        fn prompt_count(&self) -> usize {
            self.prompts_seen.lock().unwrap().len()
        }
    }

    impl AnswerInputPort for ScriptedAnswers {
        fn collect_answer(
            &self,
            question: &FollowUpQuestion,
        ) -> Result<Answer, AnswerInputError> {
            self.prompts_seen
                .lock()
                .unwrap()
                .push(question.content().to_string());
            let text = self
                .answers
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| AnswerInputError::IoError("no more answers".to_string()))?;
            Ok(Answer::new(text))
        }
    }

    fn scoping_input(breadth: usize) -> RunScopingInput {
        RunScopingInput::new(
            Query::new("can pigs fly"),
            ResearchParams::new(breadth, 2),
            GenerationParams::default(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_full_session_composes_expected_context() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": ["Q1", "Q2", "Q3"]
        })));
        let answers = Arc::new(ScriptedAnswers::new(&["A1", "", "A2\nline2"]));
        let use_case = RunScopingUseCase::new(gateway, answers.clone());

        let context = use_case.execute(scoping_input(3)).await.unwrap();

        assert_eq!(
            context.composed(),
            "Initial query: can pigs fly\nQ: Q1\nA: A1\nQ: Q2\nA: \nQ: Q3\nA: A2\nline2"
        );
        assert_eq!(context.breadth(), 3);
        assert_eq!(context.depth(), 2);
        assert_eq!(answers.prompt_count(), 3);
        // Questions answered in presentation order
        assert_eq!(
            *answers.prompts_seen.lock().unwrap(),
            vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_composition_is_reproducible() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": ["Q1"]
        })));
        let answers = Arc::new(ScriptedAnswers::new(&["A1"]));
        let use_case = RunScopingUseCase::new(gateway, answers);

        let context = use_case.execute(scoping_input(1)).await.unwrap();
        assert_eq!(context.composed(), context.composed());
    }

    #[tokio::test]
    async fn test_generation_failure_skips_answer_collection() {
        let gateway = Arc::new(MockGateway::failing("service down"));
        let answers = Arc::new(ScriptedAnswers::new(&["never used"]));
        let use_case = RunScopingUseCase::new(gateway, answers.clone());

        let err = use_case.execute(scoping_input(3)).await.unwrap_err();

        assert!(matches!(err, RunScopingError::Generation(_)));
        assert_eq!(answers.prompt_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_breadth_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": []
        })));
        let answers = Arc::new(ScriptedAnswers::new(&[]));
        let use_case = RunScopingUseCase::new(gateway.clone(), answers);

        let err = use_case.execute(scoping_input(0)).await.unwrap_err();

        assert!(matches!(
            err,
            RunScopingError::Generation(GenerateQuestionsError::InvalidLimit(_))
        ));
        assert_eq!(*gateway.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_question_set_composes_bare_context() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": []
        })));
        let answers = Arc::new(ScriptedAnswers::new(&[]));
        let use_case = RunScopingUseCase::new(gateway, answers.clone());

        let context = use_case.execute(scoping_input(3)).await.unwrap();

        assert_eq!(context.composed(), "Initial query: can pigs fly\n");
        assert_eq!(answers.prompt_count(), 0);
    }

    #[tokio::test]
    async fn test_overlong_response_collects_only_bounded_answers() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": ["Q1", "Q2", "Q3", "Q4", "Q5"]
        })));
        let answers = Arc::new(ScriptedAnswers::new(&["A1", "A2"]));
        let use_case = RunScopingUseCase::new(gateway, answers.clone());

        let context = use_case.execute(scoping_input(2)).await.unwrap();

        assert_eq!(context.pairs().len(), 2);
        assert_eq!(answers.prompt_count(), 2);
    }

    #[tokio::test]
    async fn test_input_failure_aborts_session() {
        let gateway = Arc::new(MockGateway::returning(serde_json::json!({
            "questions": ["Q1", "Q2"]
        })));
        // Only one scripted answer for two questions
        let answers = Arc::new(ScriptedAnswers::new(&["A1"]));
        let use_case = RunScopingUseCase::new(gateway, answers);

        let err = use_case.execute(scoping_input(2)).await.unwrap_err();
        assert!(matches!(err, RunScopingError::Input(_)));
    }
}
