//! Generate command report data structures.

use std::path::{Path, PathBuf};

use bladesmith_codegen::{GenerateOutcome, PreviewFile, Rollback};
use bladesmith_core::WriteResult;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Entity class name.
    pub entity: String,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub outcome: GenerateOutcome,
}

impl GenerateReport {
    /// Whether every artifact was produced.
    pub fn is_success(&self) -> bool {
        match &self.result {
            GenerationResult::Written(written) => written.outcome.is_success(),
            GenerationResult::Preview(_) => true,
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let outcome = &written.outcome;
        let display = |path: &Path| {
            path.strip_prefix(&written.output_dir)
                .unwrap_or(path)
                .display()
                .to_string()
        };

        out.section(&format!("Artifacts for {}", self.entity));
        for artifact in &outcome.artifacts {
            let label = format!("{} ({})", display(&artifact.path), artifact.kind);
            match &artifact.result {
                Ok(WriteResult::Written) => out.added_item(&label),
                Ok(WriteResult::Appended) => out.updated_item(&format!("{}, route appended", label)),
                Ok(WriteResult::Skipped) => out.unchanged_item(&format!("{}, up to date", label)),
                Err(e) => out.failed_item(&format!("{}: {}", label, e)),
            }
        }

        if !outcome.not_attempted.is_empty() {
            let kinds: Vec<&str> = outcome.not_attempted.iter().map(|k| k.as_str()).collect();
            out.newline();
            out.key_value("Not attempted", &kinds.join(", "));
        }

        if let Some(rollback) = &outcome.rollback {
            self.render_rollback(out, rollback, &display);
        }

        out.newline();
        let succeeded = outcome.artifacts.len() - outcome.failure_count();
        if outcome.is_success() {
            out.key_value("Generated", &written.output_dir.display().to_string());
        } else if let Some(rollback) = &outcome.rollback {
            if rollback.is_complete() {
                out.error(&format!(
                    "generation failed ({}); no artifacts were kept",
                    outcome.mode
                ));
            } else {
                out.error(&format!(
                    "generation failed ({}); rollback incomplete, {} step(s) could not be undone",
                    outcome.mode,
                    rollback.errors.len()
                ));
            }
        } else {
            out.error(&format!(
                "{} of {} artifact(s) failed ({}); {} written to {}",
                outcome.failure_count(),
                outcome.artifacts.len(),
                outcome.mode,
                succeeded,
                written.output_dir.display()
            ));
        }
    }

    fn render_rollback(
        &self,
        out: &mut dyn Output,
        rollback: &Rollback,
        display: &dyn Fn(&Path) -> String,
    ) {
        out.newline();
        out.section("Rolled back");
        for path in &rollback.removed {
            out.removed_item(&display(path));
        }
        for path in &rollback.restored {
            out.updated_item(&format!("{}, restored", display(path)));
        }
        for path in &rollback.removed_dirs {
            out.removed_item(&format!("{}/", display(path)));
        }
        for error in &rollback.errors {
            out.error(&format!("rollback: {}", error));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }
        out.key_value(
            "Preview",
            &format!("{} file(s) for {}, nothing written", files.len(), self.entity),
        );
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}
