//! Scoping subdomain — from raw query to composed research context.
//!
//! - [`question`] — follow-up questions and the bounded question set
//! - [`transcript`] — answers, question/answer pairs, the session transcript
//! - [`context`] — the composed, terminal research context
//! - [`schema`] — the bounding shape for schema-constrained generation
//! - [`params`] — breadth/depth scalars with lenient parsing
//! - [`session`] — the session state machine

pub mod context;
pub mod params;
pub mod question;
pub mod schema;
pub mod session;
pub mod transcript;
