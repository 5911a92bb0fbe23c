//! Schema loading and configuration for bladesmith.
//!
//! A schema file is a JSON array of column descriptors:
//!
//! ```json
//! [
//!   { "name": "email", "type": "string" },
//!   { "name": "age", "type": "integer" }
//! ]
//! ```
//!
//! The entity name is derived from the file name (`User.json` → `User`).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod schema;

pub use config::{Config, FailureMode, GenerateConfig, OutputConfig, RoutesMode, UnknownTypePolicy};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigFile, SchemaFile};
pub use schema::{Column, Schema, parse_columns};
