//! Interactive terminal input

pub mod interactive;

pub use interactive::{InteractiveAnswerInput, read_multiline_block};
