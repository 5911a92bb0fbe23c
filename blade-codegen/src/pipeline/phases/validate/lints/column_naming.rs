//! Lint for column naming conventions.

use bladesmith_core::validate_identifier;

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Lint that warns when a column name cannot be used as a plain identifier.
///
/// Such names are still emitted verbatim, but break property access in the
/// views (`$user->first name`).
pub struct ColumnNamingLint;

impl Lint for ColumnNamingLint {
    fn name(&self) -> &'static str {
        "column-naming"
    }

    fn description(&self) -> &'static str {
        "Check that column names are plain identifiers"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for (index, column) in ctx.schema.columns.iter().enumerate() {
            if let Some(reason) = validate_identifier(&column.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column name '{}' is not a plain identifier: {}",
                            column.name, reason
                        ),
                    )
                    .at_column(index),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bladesmith_core::EntityName;
    use bladesmith_schema::{Column, Schema, UnknownTypePolicy};

    use super::*;

    fn check(columns: Vec<Column>) -> Vec<Diagnostic> {
        let schema = Schema::new(EntityName::new("User").unwrap(), columns);
        let ctx = CompilationContext::new(schema, UnknownTypePolicy::Reject);
        let mut diagnostics = Vec::new();
        ColumnNamingLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_names() {
        let diagnostics = check(vec![
            Column::new("email", "string"),
            Column::new("_hidden", "string"),
            Column::new("address2", "string"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_names() {
        let diagnostics = check(vec![
            Column::new("first name", "string"),
            Column::new("2fa", "boolean"),
            Column::new("", "string"),
        ]);

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
