//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Question limit must be a positive integer (got {0})")]
    InvalidQuestionLimit(usize),

    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("No question is pending an answer")]
    NoPendingQuestion,
}
