use crate::pipeline::{CompilationContext, Diagnostic};

/// A single rule checked against the schema.
///
/// Lints read the whole context so they can honour its policies, but report
/// through `diagnostics` only.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `duplicate-column`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>);
}
