//! Intermediate representation types for bladesmith.
//!
//! # Architecture
//!
//! ```text
//! schema (JSON) → blade-schema (parsing) → blade-ir (lowered resource) → codegen
//! ```
//!
//! The IR is what every artifact generator reads. Names are derived once from
//! the canonical [`EntityName`](bladesmith_core::EntityName) and each field
//! already carries its resolved presentation kind.

mod resource;

pub use resource::{Field, Resource, ResourceNames};
