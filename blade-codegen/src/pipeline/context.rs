use bladesmith_ir::Resource;
use bladesmith_schema::{Schema, UnknownTypePolicy};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// State threaded through the pipeline phases.
///
/// Phases read the schema and policy, push diagnostics, and the lower phase
/// fills in `resource`.
#[derive(Debug)]
pub struct CompilationContext {
    pub schema: Schema,
    /// How column types without an input mapping are treated.
    pub unknown_types: UnknownTypePolicy,
    /// Set by `LowerPhase`.
    pub resource: Option<Resource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema, unknown_types: UnknownTypePolicy) -> Self {
        Self {
            schema,
            unknown_types,
            resource: None,
            diagnostics: Vec::new(),
        }
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Move the lowered resource out, failing if lowering never ran.
    pub fn take_resource(&mut self) -> Result<Resource> {
        self.resource
            .take()
            .ok_or_else(|| eyre!("resource not lowered; did LowerPhase run?"))
    }
}
