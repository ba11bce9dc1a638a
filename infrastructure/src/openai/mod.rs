//! OpenAI-compatible generation service adapter.
//!
//! Implements the application layer's
//! [`GenerationGateway`](scope_application::GenerationGateway) against any
//! endpoint speaking the `/chat/completions` protocol, using JSON-Schema
//! constrained `response_format` so the service emits a conforming value
//! instead of free text.

pub mod error;
pub mod gateway;
pub mod protocol;
