//! Core operations.
//!
//! Business logic for the blade command, separated from argument parsing
//! and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
