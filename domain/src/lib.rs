//! Domain layer for research-scope
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Scoping Session
//!
//! A scoping session turns a raw research query into a structured research
//! context:
//!
//! - **Follow-up generation**: a bounded set of clarifying questions is
//!   requested from a generation service, constrained by a JSON schema
//! - **Answer collection**: the operator answers each question in order,
//!   one multi-line block at a time
//! - **Composition**: query and transcript are merged into a single
//!   deterministic context block, ready for the deep-research stage
//!
//! ## Breadth / Depth
//!
//! - **Breadth**: how many follow-up questions to request (and, later, how
//!   wide the research fan-out should be)
//! - **Depth**: how many recursive research rounds the downstream stage
//!   should run; captured here, not acted on

pub mod core;
pub mod prompt;
pub mod scoping;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, query::Query};
pub use prompt::ScopingPromptTemplate;
pub use scoping::{
    context::ResearchContext,
    params::{DEFAULT_BREADTH, DEFAULT_DEPTH, ResearchParams},
    question::{DEFAULT_QUESTION_COUNT, FollowUpQuestion, QuestionSet},
    schema::{BoundedQuestionList, FOLLOW_UP_SCHEMA_NAME},
    session::{ScopingPhase, ScopingSession},
    transcript::{Answer, QaPair, Transcript},
};
