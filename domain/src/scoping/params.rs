//! Research parameters — breadth and depth scalars

use serde::{Deserialize, Serialize};

/// Default breadth when the operator is prompted and supplies nothing usable.
pub const DEFAULT_BREADTH: usize = 4;

/// Default depth when the operator is prompted and supplies nothing usable.
pub const DEFAULT_DEPTH: usize = 2;

/// Breadth/depth pair carried through the session (Value Object)
///
/// Breadth bounds the follow-up question count; depth is captured for the
/// downstream research stage and not acted on here. Operator input that is
/// blank, non-numeric, or zero falls back to the documented defaults rather
/// than failing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchParams {
    pub breadth: usize,
    pub depth: usize,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            breadth: DEFAULT_BREADTH,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl ResearchParams {
    pub fn new(breadth: usize, depth: usize) -> Self {
        Self { breadth, depth }
    }

    pub fn with_breadth(mut self, breadth: usize) -> Self {
        self.breadth = breadth;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Parse an operator-supplied breadth, substituting [`DEFAULT_BREADTH`]
    /// for anything that is not a positive integer.
    pub fn parse_breadth(input: &str) -> usize {
        parse_positive(input).unwrap_or(DEFAULT_BREADTH)
    }

    /// Parse an operator-supplied depth, substituting [`DEFAULT_DEPTH`]
    /// for anything that is not a positive integer.
    pub fn parse_depth(input: &str) -> usize {
        parse_positive(input).unwrap_or(DEFAULT_DEPTH)
    }
}

fn parse_positive(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
