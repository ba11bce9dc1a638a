//! Follow-up question types

use serde::{Deserialize, Serialize};

/// Default number of follow-up questions requested when the caller does not
/// supply a bound.
pub const DEFAULT_QUESTION_COUNT: usize = 3;

/// A single clarifying question produced by the generation service (Value Object)
///
/// Ordering is meaningful: questions are presented and answered in the order
/// the service produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    content: String,
}

impl FollowUpQuestion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the question text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for FollowUpQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// An ordered set of follow-up questions, at most `limit` long (Value Object)
///
/// Produced exactly once per session. The constructor truncates rather than
/// rejects an over-long input: a service that returns more questions than
/// requested is corrected, not treated as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<FollowUpQuestion>,
}

impl QuestionSet {
    /// Build a question set from raw strings, keeping at most the first
    /// `limit` entries in their original order. No deduplication, no
    /// reordering.
    pub fn truncated(questions: Vec<String>, limit: usize) -> Self {
        Self {
            questions: questions
                .into_iter()
                .take(limit)
                .map(FollowUpQuestion::new)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at `index`, if any
    pub fn get(&self, index: usize) -> Option<&FollowUpQuestion> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FollowUpQuestion> {
        self.questions.iter()
    }
}
