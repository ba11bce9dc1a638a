//! Progress reporting for the scoping session

pub mod spinner;

pub use spinner::GenerationSpinner;
