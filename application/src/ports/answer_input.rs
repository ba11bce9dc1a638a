//! Answer input port for operator-paced answer collection.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerInputPort`] - defined here in the application layer
//! - **Adapter**: `InteractiveAnswerInput` - implemented in the presentation
//!   layer
//!
//! # Blocking, not suspending
//!
//! The trait is deliberately synchronous. Answer collection waits on a
//! local resource (the operator's terminal), not a remote one, so it blocks
//! the session's thread of control rather than suspending a task. The one
//! genuine suspension point in a session is the generation call on
//! [`GenerationGateway`](super::generation_gateway::GenerationGateway) —
//! the two must not be conflated.
//!
//! A blocked read is never abandoned: the session waits for the operator
//! indefinitely, by design.

use scope_domain::{Answer, FollowUpQuestion};

/// Error type for answer collection.
///
/// These errors represent terminal failures, not operator decisions — an
/// empty answer is a valid result, not an error.
#[derive(Debug, Clone)]
pub enum AnswerInputError {
    /// Input/output error (e.g. terminal read failure, closed stdin).
    IoError(String),
}

impl std::fmt::Display for AnswerInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerInputError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AnswerInputError {}

/// Port for collecting one answer per follow-up question.
///
/// Implementations are responsible for:
/// 1. Displaying the question to the operator
/// 2. Reading lines until a blank line terminates the block
/// 3. Returning the trimmed, newline-preserving answer
///
/// # Implementations
///
/// - **Interactive (CLI)**: `InteractiveAnswerInput` in the presentation
///   layer
/// - **Skip everything**: [`SkipAllAnswers`]
pub trait AnswerInputPort: Send + Sync {
    /// Collect the answer to one question, blocking until the operator
    /// terminates the block with a blank line.
    fn collect_answer(&self, question: &FollowUpQuestion) -> Result<Answer, AnswerInputError>;
}

/// Non-interactive implementation that skips every question.
///
/// Every answer comes back empty, which the session treats as an
/// intentional skip. Useful when the composed context should be produced
/// without an operator at the terminal.
pub struct SkipAllAnswers;

impl AnswerInputPort for SkipAllAnswers {
    fn collect_answer(&self, _question: &FollowUpQuestion) -> Result<Answer, AnswerInputError> {
        Ok(Answer::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_all_answers_returns_empty() {
        let port = SkipAllAnswers;
        let answer = port
            .collect_answer(&FollowUpQuestion::new("What timeframe?"))
            .unwrap();
        assert!(answer.is_empty());
    }
}
