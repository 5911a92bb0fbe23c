//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints on the schema and collects diagnostics
//! - [`LowerPhase`] - transforms the schema into a [`Resource`](bladesmith_ir::Resource)

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    ColumnNamingLint, DuplicateColumnLint, EmptySchemaLint, Lint, ReservedColumnLint,
    UnknownTypeLint, ValidatePhase,
};
