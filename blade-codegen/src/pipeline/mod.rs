//! Compilation pipeline from a loaded schema to a lowered resource.
//!
//! The pipeline runs two phases in order:
//!
//! - [`phases::ValidatePhase`] - runs lints and collects diagnostics
//! - [`phases::LowerPhase`] - resolves names and input kinds into a [`Resource`](bladesmith_ir::Resource)
//!
//! # Example
//!
//! ```ignore
//! use bladesmith_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().unknown_types(policy).run(schema)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let generator = Generator::from_context(&mut ctx, options)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
