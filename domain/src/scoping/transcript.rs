//! Session transcript — answers and question/answer pairs

use crate::scoping::question::FollowUpQuestion;
use serde::{Deserialize, Serialize};

/// An operator's answer to one follow-up question (Value Object)
///
/// May be empty (a question can be intentionally skipped). Internal newlines
/// are preserved; leading and trailing whitespace is stripped on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    /// An intentionally skipped answer
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// One question paired with its collected answer (Value Object)
///
/// Created when the answer is recorded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    question: FollowUpQuestion,
    answer: Answer,
}

impl QaPair {
    pub fn new(question: FollowUpQuestion, answer: Answer) -> Self {
        Self { question, answer }
    }

    pub fn question(&self) -> &FollowUpQuestion {
        &self.question
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }
}

/// The ordered record of collected answers (Entity)
///
/// Append-only: pairs accumulate strictly in question order and are owned
/// exclusively by the session that built them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pairs: Vec<QaPair>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair to the transcript
    pub fn record(&mut self, question: FollowUpQuestion, answer: Answer) {
        self.pairs.push(QaPair::new(question, answer));
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_trims_outer_whitespace() {
        let a = Answer::new("  keep\ninternal\nnewlines  \n");
        assert_eq!(a.text(), "keep\ninternal\nnewlines");
    }

    #[test]
    fn test_answer_may_be_empty() {
        assert!(Answer::new("   ").is_empty());
        assert!(Answer::empty().is_empty());
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.record(FollowUpQuestion::new("Q1"), Answer::new("A1"));
        transcript.record(FollowUpQuestion::new("Q2"), Answer::empty());

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.pairs()[0].question().content(), "Q1");
        assert_eq!(transcript.pairs()[1].question().content(), "Q2");
        assert!(transcript.pairs()[1].answer().is_empty());
    }
}
