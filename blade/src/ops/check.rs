//! Check operation - schema validation without generation.

use std::path::Path;

use bladesmith_codegen::pipeline::{CompilationContext, phases::ValidatePhase};
use bladesmith_schema::{Schema, UnknownTypePolicy};

use crate::reports::CheckReport;

/// Run every lint over `schema` and collect the diagnostics.
///
/// Unlike the generation pipeline this never stops at the first error.
pub fn check(schema: Schema, schema_path: &Path, unknown_types: UnknownTypePolicy) -> CheckReport {
    let entity = schema.entity.class_name();
    let mut ctx = CompilationContext::new(schema, unknown_types);
    ValidatePhase::new().check(&mut ctx);

    let mut diagnostics = ctx.diagnostics;
    diagnostics.sort_by_key(|d| d.severity);

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        entity,
        diagnostics,
    }
}
