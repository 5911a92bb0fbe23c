use eyre::Result;

use super::CompilationContext;

/// One step from schema to resource.
///
/// A phase either records diagnostics on the context and returns `Ok`, or
/// returns an error to stop the run before anything is generated.
pub trait Phase: Send + Sync {
    /// Short name used in diagnostics and logs.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
