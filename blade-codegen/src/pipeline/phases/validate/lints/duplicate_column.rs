//! Lint for duplicate column detection.

use std::collections::HashMap;

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Lint that warns on repeated column names.
///
/// Duplicates are still generated as written; the warning points at the
/// second occurrence and names the first.
pub struct DuplicateColumnLint;

impl Lint for DuplicateColumnLint {
    fn name(&self) -> &'static str {
        "duplicate-column"
    }

    fn description(&self) -> &'static str {
        "Detect column names that appear more than once"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, column) in ctx.schema.columns.iter().enumerate() {
            // Database column names are case-insensitive on most engines
            let normalized = column.name.to_lowercase();
            if let Some(first) = seen.get(&normalized) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "duplicate column '{}' (first defined at columns[{}])",
                            column.name, first
                        ),
                    )
                    .at_column(index),
                );
            } else {
                seen.insert(normalized, index);
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
        DuplicateColumnLint.check(&ctx, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let diagnostics = check(vec![
            Column::new("email", "string"),
            Column::new("age", "integer"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_points_at_second_occurrence() {
        let diagnostics = check(vec![
            Column::new("email", "string"),
            Column::new("age", "integer"),
            Column::new("Email", "text"),
        ]);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("columns[0]"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("columns[2]"));
    }
}
