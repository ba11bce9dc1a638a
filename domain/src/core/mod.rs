//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — available generation models (o-series, GPT-4o, etc.)
//! - [`query::Query`] — a validated research query from the operator
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod query;
