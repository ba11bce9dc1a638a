//! Generation gateway port
//!
//! Defines the interface for the schema-constrained generation service.

use async_trait::async_trait;
use scope_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Service returned an unusable payload: {0}")]
    InvalidPayload(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One structured-output request: persona, user instruction, and the
/// bounding schema the response must conform to.
///
/// The schema is carried as an opaque value — the gateway passes it to the
/// service, it never interprets it.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub system: String,
    pub prompt: String,
    pub schema_name: String,
    pub schema: serde_json::Value,
}

impl StructuredRequest {
    pub fn new(
        system: impl Into<String>,
        prompt: impl Into<String>,
        schema_name: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            schema_name: schema_name.into(),
            schema,
        }
    }
}

/// Gateway to the generation service
///
/// This port defines how the application layer reaches the external
/// generation capability. Implementations (adapters) live in the
/// infrastructure layer.
///
/// The call suspends the calling task while the request is in flight; it is
/// the single suspension point in a scoping session. No retries happen at
/// this boundary — a failed call is terminal for the session.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Issue one request and return the schema-conforming JSON value.
    async fn generate_structured(
        &self,
        model: &Model,
        request: &StructuredRequest,
    ) -> Result<serde_json::Value, GatewayError>;
}
