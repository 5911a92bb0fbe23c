//! Check report.

use std::path::PathBuf;

use bladesmith_codegen::pipeline::{Diagnostic, Severity};
use eyre::Result;

use super::output::{Output, Report};

/// Diagnostics from validating a schema.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Entity class name.
    pub entity: String,
    /// Every diagnostic, most severe first.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// The diagnostics as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.diagnostics)?)
    }
}

fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = describe(diag);
            match diag.severity {
                Severity::Error => out.error(&msg),
                Severity::Warning => out.warning(&msg),
                Severity::Info => out.info(&msg),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({})",
                self.schema_path.display(),
                self.entity
            ));
        } else {
            let errors = self.diagnostics.iter().filter(|d| d.severity.is_error()).count();
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.schema_path.display(),
                errors
            ));
        }
    }
}
