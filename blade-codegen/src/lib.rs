//! Scaffold artifact generation for bladesmith.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`pipeline`] - Validate and lower a schema into a [`Resource`](bladesmith_ir::Resource)
//! - [`files`] - One [`GeneratedFile`](bladesmith_core::GeneratedFile) per artifact kind
//! - [`generator`] - Preview and write every artifact, with per-artifact outcomes

pub mod builder;
pub mod files;
pub mod generator;
pub mod pipeline;
mod type_mapper;

pub use builder::{CodeBuilder, Indent};
pub use generator::{
    ArtifactKind, ArtifactOutcome, GenerateOutcome, Generator, GeneratorOptions, PreviewFile,
    Rollback,
};
pub use type_mapper::HtmlInputMapper;
