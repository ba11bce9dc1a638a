//! OpenAI generation gateway implementation

use crate::openai::error::{OpenAiError, Result};
use crate::openai::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use scope_application::{GatewayError, GenerationGateway, StructuredRequest};
use scope_domain::Model;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable holding the API key (required).
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable overriding the model id.
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Default endpoint when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Generation gateway for OpenAI-compatible endpoints
///
/// One request per call, no retries, no state kept between invocations.
/// Requests run without a deadline unless a timeout is configured — an
/// operator-driven session is allowed to wait on the service.
pub struct OpenAiGenerationGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGenerationGateway {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        info!("OpenAiGenerationGateway initialized for {}", base_url);

        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Rebuild the HTTP client with an upper bound on request duration.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Result<Self> {
        if let Some(timeout) = timeout {
            self.client = reqwest::Client::builder().timeout(timeout).build()?;
        }
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| OpenAiError::Parse {
            error: e.to_string(),
            raw,
        })
    }
}

#[async_trait]
impl GenerationGateway for OpenAiGenerationGateway {
    async fn generate_structured(
        &self,
        model: &Model,
        request: &StructuredRequest,
    ) -> std::result::Result<serde_json::Value, GatewayError> {
        let body = ChatCompletionRequest::structured(model, request);

        debug!("Sending structured completion request to {}", self.endpoint());

        let response = self.complete(&body).await.map_err(to_gateway_error)?;

        let content = response
            .first_content()
            .ok_or_else(|| GatewayError::InvalidPayload("response contained no content".to_string()))?;

        serde_json::from_str(content).map_err(|e| {
            GatewayError::InvalidPayload(format!("content is not valid JSON: {}", e))
        })
    }
}

fn to_gateway_error(error: OpenAiError) -> GatewayError {
    match error {
        OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
        OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
        OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
        OpenAiError::Api { status, body } => {
            GatewayError::RequestFailed(format!("status {}: {}", status, body))
        }
        OpenAiError::Parse { error, .. } => GatewayError::InvalidPayload(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = OpenAiGenerationGateway::new("key", "https://api.openai.com/v1");
        assert_eq!(
            gateway.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let gateway = OpenAiGenerationGateway::new("key", "http://localhost:8080/v1/");
        assert_eq!(gateway.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_api_error_maps_to_request_failed() {
        let mapped = to_gateway_error(OpenAiError::Api {
            status: 429,
            body: "rate limited".to_string(),
        });
        assert!(matches!(mapped, GatewayError::RequestFailed(_)));
    }

    #[test]
    fn test_parse_error_maps_to_invalid_payload() {
        let mapped = to_gateway_error(OpenAiError::Parse {
            error: "expected value".to_string(),
            raw: "not json".to_string(),
        });
        assert!(matches!(mapped, GatewayError::InvalidPayload(_)));
    }
}
