//! Infrastructure layer for research-scope
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGenerationConfig, FileResearchConfig};
pub use openai::{
    error::{OpenAiError, Result},
    gateway::{
        API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, MODEL_ENV, OpenAiGenerationGateway,
    },
};
