//! Generate operation - schema to Laravel artifacts.

use std::path::Path;

use bladesmith_codegen::{Generator, GeneratorOptions, pipeline::Pipeline};
use bladesmith_schema::{FailureMode, Schema, UnknownTypePolicy};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory for the artifacts.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub unknown_types: UnknownTypePolicy,
    pub failure_mode: FailureMode,
    /// File names and routes handling.
    pub generator: GeneratorOptions,
}

/// Execute the generate operation.
///
/// Validation errors abort before anything is written. Write failures are
/// reported through the returned report rather than as an error.
pub fn generate(schema: Schema, opts: GenerateOptions) -> Result<GenerateReport> {
    let entity = schema.entity.class_name();

    let mut ctx = Pipeline::new()
        .unknown_types(opts.unknown_types)
        .run(schema)
        .wrap_err_with(|| format!("Cannot generate {}", entity))?;

    let warnings = ctx.warnings().map(|d| d.to_string()).collect();

    let generator = Generator::from_context(&mut ctx, opts.generator)?;
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            outcome: generator.generate(opts.output_dir, opts.failure_mode),
        })
    };

    Ok(GenerateReport {
        entity,
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bladesmith_codegen::ArtifactKind;
    use bladesmith_core::EntityName;
    use bladesmith_schema::parse_columns;
    use tempfile::TempDir;

    use super::*;

    fn schema(json: &str) -> Schema {
        Schema::new(
            EntityName::new("User").unwrap(),
            parse_columns(json, "User.json").unwrap(),
        )
    }

    fn options(output_dir: &Path, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            dry_run,
            unknown_types: UnknownTypePolicy::Reject,
            failure_mode: FailureMode::FailFast,
            generator: GeneratorOptions::default(),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("output");

        let report = generate(schema(r#"[{"name":"email","type":"string"}]"#), options(&out, true))
            .unwrap();

        assert!(report.is_success());
        assert!(!out.exists());
        match report.result {
            GenerationResult::Preview(files) => assert_eq!(files.len(), ArtifactKind::ALL.len()),
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_writes_artifacts() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("output");

        let report = generate(schema(r#"[{"name":"email","type":"string"}]"#), options(&out, false))
            .unwrap();

        assert!(report.is_success());
        assert!(out.join("User.php").is_file());
        assert!(out.join("views/user/edit.blade.php").is_file());
    }

    #[test]
    fn test_unknown_type_is_rejected_before_writing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("output");

        let err = generate(schema(r#"[{"name":"meta","type":"jsonb"}]"#), options(&out, false))
            .unwrap_err();

        assert!(format!("{:#}", err).contains("meta"));
        assert!(!out.exists());
    }

    #[test]
    fn test_warnings_are_carried() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("output");
        fs::create_dir_all(&out).unwrap();

        let report = generate(schema(r#"[{"name":"id","type":"integer"}]"#), options(&out, true))
            .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("id"));
    }
}
