//! Core utilities and types for bladesmith.
//!
//! This crate provides fundamental types and utilities used across
//! the bladesmith workspace.

mod entity;
mod file;
mod type_mapper;
mod types;
mod utils;

pub use entity::EntityName;
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use type_mapper::TypeMapper;
// Fundamental types
pub use types::{ColumnType, InputKind};
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case, validate_identifier};
