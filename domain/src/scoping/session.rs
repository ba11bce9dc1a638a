//! Scoping session state machine

use crate::core::error::DomainError;
use crate::core::query::Query;
use crate::scoping::context::ResearchContext;
use crate::scoping::params::ResearchParams;
use crate::scoping::question::{FollowUpQuestion, QuestionSet};
use crate::scoping::transcript::{Answer, Transcript};
use serde::{Deserialize, Serialize};

/// Phase of a scoping session.
///
/// ```text
/// Idle → QuestionsRequested → CollectingAnswers(0) → ... → CollectingAnswers(n)
///                                                              ↓
///                                                          Composed → Done
/// ```
///
/// Any phase can drop to the terminal `Failed`; in particular a generation
/// failure moves `QuestionsRequested` straight to `Failed` so answer
/// collection never runs against an unset question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopingPhase {
    /// Session created, nothing requested yet
    Idle,
    /// Follow-up generation request in flight
    QuestionsRequested,
    /// Collecting the answer to question `i`
    CollectingAnswers(usize),
    /// Context composed from the full transcript
    Composed,
    /// Context handed off
    Done,
    /// Terminal failure, no context produced
    Failed,
}

impl ScopingPhase {
    /// Phase name without any index payload
    pub fn name(&self) -> &'static str {
        match self {
            ScopingPhase::Idle => "idle",
            ScopingPhase::QuestionsRequested => "questions_requested",
            ScopingPhase::CollectingAnswers(_) => "collecting_answers",
            ScopingPhase::Composed => "composed",
            ScopingPhase::Done => "done",
            ScopingPhase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ScopingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopingPhase::CollectingAnswers(i) => write!(f, "collecting_answers({})", i),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// A single scoping session (Entity)
///
/// Owns the query, the question set, and the append-only transcript, and
/// enforces the phase order. One logical thread of control drives it; there
/// is no concurrent mutation.
#[derive(Debug, Clone)]
pub struct ScopingSession {
    query: Query,
    params: ResearchParams,
    phase: ScopingPhase,
    questions: QuestionSet,
    transcript: Transcript,
    error: Option<String>,
}

impl ScopingSession {
    pub fn new(query: Query, params: ResearchParams) -> Self {
        Self {
            query,
            params,
            phase: ScopingPhase::Idle,
            questions: QuestionSet::default(),
            transcript: Transcript::new(),
            error: None,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn params(&self) -> ResearchParams {
        self.params
    }

    pub fn phase(&self) -> &ScopingPhase {
        &self.phase
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark the generation request as issued. Valid only from `Idle`.
    pub fn begin_generation(&mut self) -> Result<(), DomainError> {
        match self.phase {
            ScopingPhase::Idle => {
                self.phase = ScopingPhase::QuestionsRequested;
                Ok(())
            }
            _ => Err(self.transition_error("questions_requested")),
        }
    }

    /// Accept the generated question set (possibly empty) and start
    /// collecting answers. Valid only from `QuestionsRequested`.
    pub fn questions_received(&mut self, questions: QuestionSet) -> Result<(), DomainError> {
        match self.phase {
            ScopingPhase::QuestionsRequested => {
                self.questions = questions;
                self.phase = ScopingPhase::CollectingAnswers(0);
                Ok(())
            }
            _ => Err(self.transition_error("collecting_answers")),
        }
    }

    /// The question currently awaiting an answer, if any.
    pub fn next_question(&self) -> Option<&FollowUpQuestion> {
        match self.phase {
            ScopingPhase::CollectingAnswers(i) => self.questions.get(i),
            _ => None,
        }
    }

    /// Record the answer to the current question and advance.
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), DomainError> {
        let ScopingPhase::CollectingAnswers(i) = self.phase else {
            return Err(self.transition_error("collecting_answers"));
        };
        let question = self
            .questions
            .get(i)
            .cloned()
            .ok_or(DomainError::NoPendingQuestion)?;

        self.transcript.record(question, answer);
        self.phase = ScopingPhase::CollectingAnswers(i + 1);
        Ok(())
    }

    /// Compose the research context from the complete transcript.
    ///
    /// Valid only once every question has an answer; composing a partial
    /// transcript is a transition error, never a truncated artifact.
    pub fn compose(&mut self) -> Result<ResearchContext, DomainError> {
        match self.phase {
            ScopingPhase::CollectingAnswers(i) if i == self.questions.len() => {
                self.phase = ScopingPhase::Composed;
                Ok(ResearchContext::new(
                    self.query.clone(),
                    &self.transcript,
                    self.params,
                ))
            }
            _ => Err(self.transition_error("composed")),
        }
    }

    /// Mark the composed context as handed off. Valid only from `Composed`.
    pub fn finish(&mut self) -> Result<(), DomainError> {
        match self.phase {
            ScopingPhase::Composed => {
                self.phase = ScopingPhase::Done;
                Ok(())
            }
            _ => Err(self.transition_error("done")),
        }
    }

    /// Drop to the terminal `Failed` phase, recording the reason.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.error = Some(reason.into());
        self.phase = ScopingPhase::Failed;
    }

    fn transition_error(&self, to: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            from: self.phase.name(),
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_set(items: &[&str]) -> QuestionSet {
        QuestionSet::truncated(items.iter().map(|s| s.to_string()).collect(), items.len())
    }

    fn session() -> ScopingSession {
        ScopingSession::new(Query::new("can pigs fly"), ResearchParams::new(3, 2))
    }

    #[test]
    fn test_full_session_lifecycle() {
        let mut s = session();
        assert_eq!(*s.phase(), ScopingPhase::Idle);

        s.begin_generation().unwrap();
        assert_eq!(*s.phase(), ScopingPhase::QuestionsRequested);

        s.questions_received(question_set(&["Q1", "Q2"])).unwrap();
        assert_eq!(*s.phase(), ScopingPhase::CollectingAnswers(0));

        assert_eq!(s.next_question().unwrap().content(), "Q1");
        s.record_answer(Answer::new("A1")).unwrap();
        assert_eq!(s.next_question().unwrap().content(), "Q2");
        s.record_answer(Answer::empty()).unwrap();
        assert!(s.next_question().is_none());

        let context = s.compose().unwrap();
        assert_eq!(*s.phase(), ScopingPhase::Composed);
        assert_eq!(context.pairs().len(), 2);

        s.finish().unwrap();
        assert_eq!(*s.phase(), ScopingPhase::Done);
    }

    #[test]
    fn test_empty_question_set_composes_immediately() {
        let mut s = session();
        s.begin_generation().unwrap();
        s.questions_received(QuestionSet::default()).unwrap();

        assert!(s.next_question().is_none());
        let context = s.compose().unwrap();
        assert!(context.pairs().is_empty());
    }

    #[test]
    fn test_answer_before_questions_rejected() {
        let mut s = session();
        let err = s.record_answer(Answer::new("too early")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[test]
    fn test_compose_with_pending_answers_rejected() {
        let mut s = session();
        s.begin_generation().unwrap();
        s.questions_received(question_set(&["Q1"])).unwrap();

        let err = s.compose().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }

    #[test]
    fn test_answer_past_end_rejected() {
        let mut s = session();
        s.begin_generation().unwrap();
        s.questions_received(question_set(&["Q1"])).unwrap();
        s.record_answer(Answer::new("A1")).unwrap();

        let err = s.record_answer(Answer::new("extra")).unwrap_err();
        assert!(matches!(err, DomainError::NoPendingQuestion));
    }

    #[test]
    fn test_generation_failure_is_terminal() {
        let mut s = session();
        s.begin_generation().unwrap();
        s.fail("service unreachable");

        assert_eq!(*s.phase(), ScopingPhase::Failed);
        assert_eq!(s.error(), Some("service unreachable"));
        // No answer collection against an unset question list
        assert!(s.record_answer(Answer::new("A1")).is_err());
        assert!(s.compose().is_err());
    }

    #[test]
    fn test_double_generation_rejected() {
        let mut s = session();
        s.begin_generation().unwrap();
        let err = s.begin_generation().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
    }
}
