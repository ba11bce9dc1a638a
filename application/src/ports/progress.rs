//! Progress notification port for scoping sessions

use scope_domain::Model;

/// Callbacks for observing session progress.
///
/// Implementations must not block: the notifier is called from the session's
/// single thread of control, between phases.
pub trait ScopingProgress: Send + Sync {
    /// The generation request is about to be issued.
    fn on_generation_start(&self, _model: &Model) {}

    /// The question set arrived (possibly shorter than requested).
    fn on_generation_complete(&self, _question_count: usize) {}

    /// About to collect the answer for question `index` (0-based).
    fn on_answer_start(&self, _index: usize, _total: usize) {}
}

/// No-op progress notifier
pub struct NoScopingProgress;

impl ScopingProgress for NoScopingProgress {}
