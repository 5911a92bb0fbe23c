//! Validate phase - runs lints on the schema.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    ColumnNamingLint, DuplicateColumnLint, EmptySchemaLint, ReservedColumnLint, UnknownTypeLint,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the schema using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnknownTypeLint),
                Box::new(DuplicateColumnLint),
                Box::new(ReservedColumnLint),
                Box::new(ColumnNamingLint),
                Box::new(EmptySchemaLint),
            ],
        }
    }

    /// Run every lint and record its diagnostics without failing.
    pub fn check(&self, ctx: &mut CompilationContext) {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            debug!(lint = lint.name(), "{}", lint.description());
            let before = diagnostics.len();
            lint.check(ctx, &mut diagnostics);
            debug!(
                lint = lint.name(),
                found = diagnostics.len() - before,
                "lint finished"
            );
        }
        ctx.diagnostics.extend(diagnostics);
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the schema and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.check(ctx);

        // Warnings and infos are allowed
        if ctx.has_errors() {
            let details: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            bail!(
                "validation failed with {} error(s):\n{}",
                ctx.error_count(),
                details.join("\n")
            );
        }

        Ok(())
    }
}
