//! Application layer for research-scope
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    answer_input::{AnswerInputError, AnswerInputPort, SkipAllAnswers},
    generation_gateway::{GatewayError, GenerationGateway, StructuredRequest},
    progress::{NoScopingProgress, ScopingProgress},
};
pub use use_cases::generate_questions::{
    GenerateQuestionsError, GenerateQuestionsInput, GenerateQuestionsUseCase,
};
pub use use_cases::run_scoping::{RunScopingError, RunScopingInput, RunScopingUseCase};
