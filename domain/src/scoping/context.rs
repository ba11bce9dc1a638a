//! The composed research context — the terminal artifact of a session

use crate::core::query::Query;
use crate::scoping::params::ResearchParams;
use crate::scoping::transcript::{QaPair, Transcript};
use serde::Serialize;

/// Read-only artifact combining the query, the full transcript, and the
/// breadth/depth scalars (Value Object)
///
/// Built exactly once, from the complete transcript, and handed to the
/// downstream research stage. Never mutated incrementally.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchContext {
    query: Query,
    pairs: Vec<QaPair>,
    breadth: usize,
    depth: usize,
}

impl ResearchContext {
    pub fn new(query: Query, transcript: &Transcript, params: ResearchParams) -> Self {
        Self {
            query,
            pairs: transcript.pairs().to_vec(),
            breadth: params.breadth,
            depth: params.depth,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    pub fn breadth(&self) -> usize {
        self.breadth
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Render the context as a single text block.
    ///
    /// One header line with the initial query, then a `Q:`/`A:` block per
    /// pair in collection order, answers exactly as collected. Pure and
    /// byte-for-byte reproducible: no timestamps, no randomness, no
    /// locale-dependent formatting.
    pub fn composed(&self) -> String {
        let mut out = format!("Initial query: {}\n", self.query);
        let blocks: Vec<String> = self
            .pairs
            .iter()
            .map(|pair| format!("Q: {}\nA: {}", pair.question(), pair.answer()))
            .collect();
        out.push_str(&blocks.join("\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoping::question::FollowUpQuestion;
    use crate::scoping::transcript::Answer;

    fn transcript(entries: &[(&str, &str)]) -> Transcript {
        let mut t = Transcript::new();
        for (q, a) in entries {
            t.record(FollowUpQuestion::new(*q), Answer::new(*a));
        }
        t
    }

    #[test]
    fn test_composed_format() {
        let t = transcript(&[("Q1", "A1"), ("Q2", ""), ("Q3", "A2\nline2")]);
        let context = ResearchContext::new(
            Query::new("can pigs fly"),
            &t,
            ResearchParams::new(3, 2),
        );

        assert_eq!(
            context.composed(),
            "Initial query: can pigs fly\nQ: Q1\nA: A1\nQ: Q2\nA: \nQ: Q3\nA: A2\nline2"
        );
    }

    #[test]
    fn test_composed_is_deterministic() {
        let t = transcript(&[("Q1", "A1"), ("Q2", "A2")]);
        let context = ResearchContext::new(Query::new("Q0"), &t, ResearchParams::default());

        assert_eq!(context.composed(), context.composed());
    }

    #[test]
    fn test_composed_with_empty_transcript() {
        let context = ResearchContext::new(
            Query::new("just the query"),
            &Transcript::new(),
            ResearchParams::default(),
        );

        assert_eq!(context.composed(), "Initial query: just the query\n");
    }

    #[test]
    fn test_serializes_to_json() {
        let t = transcript(&[("Q1", "A1")]);
        let context = ResearchContext::new(Query::new("q"), &t, ResearchParams::new(3, 2));
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["breadth"], 3);
        assert_eq!(json["depth"], 2);
        assert_eq!(json["pairs"][0]["question"]["content"], "Q1");
    }
}
