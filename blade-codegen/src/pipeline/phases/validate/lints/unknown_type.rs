//! Lint for column types without an input mapping.

use bladesmith_core::TypeMapper;
use bladesmith_schema::UnknownTypePolicy;

use super::super::Lint;
use crate::{
    HtmlInputMapper,
    pipeline::{CompilationContext, Diagnostic, Severity},
};

/// Lint that flags column types the input mapper does not know.
///
/// Reported as an error under [`UnknownTypePolicy::Reject`] and as a warning
/// under [`UnknownTypePolicy::Fallback`].
pub struct UnknownTypeLint;

impl Lint for UnknownTypeLint {
    fn name(&self) -> &'static str {
        "unknown-type"
    }

    fn description(&self) -> &'static str {
        "Detect column types with no form-input mapping"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let (severity, consequence) = match ctx.unknown_types {
            UnknownTypePolicy::Reject => (
                Severity::Error,
                "pass --allow-unknown-types to render it as text",
            ),
            UnknownTypePolicy::Fallback => (Severity::Warning, "rendered as a text input"),
        };

        for (index, column) in ctx.schema.columns.iter().enumerate() {
            if HtmlInputMapper.map_column_type(&column.column_type).is_some() {
                continue;
            }
            diagnostics.push(
                Diagnostic::new(
                    severity,
                    "validate",
                    format!(
                        "unknown column type '{}' for column '{}' ({})",
                        column.column_type, column.name, consequence
                    ),
                )
                .at_column(index),
            );
        }
    }
}
