//! Lint for columns that collide with generated ones.

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Columns every migration adds on its own.
const RESERVED: [&str; 3] = ["id", "created_at", "updated_at"];

/// Lint that warns when a column repeats one the migration already creates.
pub struct ReservedColumnLint;

impl Lint for ReservedColumnLint {
    fn name(&self) -> &'static str {
        "reserved-column"
    }

    fn description(&self) -> &'static str {
        "Detect columns named id, created_at or updated_at"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for (index, column) in ctx.schema.columns.iter().enumerate() {
            if RESERVED.contains(&column.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column '{}' collides with a column the migration always creates",
                            column.name
                        ),
                    )
                    .at_column(index),
                );
            }
        }
    }
}
