//! Pipeline orchestrator.

use bladesmith_schema::{Schema, UnknownTypePolicy};
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs validation, then lowering.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .unknown_types(UnknownTypePolicy::Fallback)
///     .run(schema)?;
/// ```
pub struct Pipeline {
    unknown_types: UnknownTypePolicy,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            unknown_types: UnknownTypePolicy::default(),
        }
    }

    /// Set the policy for column types without an input mapping.
    pub fn unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Run the pipeline on a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if validation records an error diagnostic or any
    /// phase fails fatally.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema, self.unknown_types);

        let phases: [Box<dyn Phase>; 2] = [Box::new(ValidatePhase::new()), Box::new(LowerPhase)];

        for phase in &phases {
            debug!(
                phase = phase.name(),
                description = phase.description(),
                "running phase"
            );
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use bladesmith_core::{EntityName, InputKind};
    use bladesmith_schema::Column;

    use super::*;

    fn make_schema(columns: Vec<Column>) -> Schema {
        Schema::new(EntityName::new("User").unwrap(), columns)
    }

    #[test]
    fn test_pipeline_lowers_resource() {
        let schema = make_schema(vec![
            Column::new("email", "string"),
            Column::new("age", "integer"),
        ]);

        let mut ctx = Pipeline::new().run(schema).expect("pipeline should succeed");
        let resource = ctx.take_resource().unwrap();

        assert_eq!(resource.names.class, "User");
        assert_eq!(resource.fields[1].input, InputKind::Number);
    }

    #[test]
    fn test_pipeline_rejects_unknown_types_by_default() {
        let schema = make_schema(vec![Column::new("meta", "jsonb")]);

        let err = Pipeline::new().run(schema).unwrap_err();
        assert!(err.to_string().contains("jsonb"));
    }

    #[test]
    fn test_pipeline_falls_back_when_allowed() {
        let schema = make_schema(vec![Column::new("meta", "jsonb")]);

        let mut ctx = Pipeline::new()
            .unknown_types(UnknownTypePolicy::Fallback)
            .run(schema)
            .expect("pipeline should succeed");

        assert!(ctx.has_warnings());
        assert_eq!(ctx.take_resource().unwrap().fields[0].input, InputKind::Text);
    }
}
