//! Lint for schemas without columns.

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Lint that notes an empty column list.
pub struct EmptySchemaLint;

impl Lint for EmptySchemaLint {
    fn name(&self) -> &'static str {
        "empty-schema"
    }

    fn description(&self) -> &'static str {
        "Note schemas that declare no columns"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        if ctx.schema.is_empty() {
            diagnostics.push(Diagnostic::info(
                "validate",
                format!(
                    "schema for '{}' has no columns; artifacts will only carry the id and timestamps",
                    ctx.schema.entity
                ),
            ));
        }
    }
}
