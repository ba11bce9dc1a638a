//! Prompt templates for the scoping flow

pub mod scoping;

pub use scoping::ScopingPromptTemplate;
