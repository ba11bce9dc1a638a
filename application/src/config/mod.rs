//! Application configuration — generation request parameters

use scope_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Static parameters for the generation request.
///
/// Groups the knobs that shape the single outbound call of a session.
/// `request_timeout` defaults to `None`: an operator-driven tool is allowed
/// to wait on the service indefinitely, and bounding the wait is opt-in
/// hardening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model serving the follow-up generation request.
    pub model: Model,
    /// Optional upper bound on the request duration.
    pub request_timeout: Option<Duration>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            request_timeout: None,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.model, Model::O3Mini);
        assert!(params.request_timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_model(Model::Gpt4oMini)
            .with_request_timeout(Some(Duration::from_secs(60)));

        assert_eq!(params.model, Model::Gpt4oMini);
        assert_eq!(params.request_timeout, Some(Duration::from_secs(60)));
    }
}
