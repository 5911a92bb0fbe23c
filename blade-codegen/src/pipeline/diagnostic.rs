//! Diagnostic types for the compilation pipeline.

use std::fmt;

use serde::Serialize;

/// How much a diagnostic matters. Orders most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks generation.
    Error,
    /// Generation continues, but the output may not be what was intended.
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        *self == Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finding about the schema, tagged with the phase that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the producing phase, e.g. `validate`.
    pub phase: String,
    pub message: String,
    /// Where in the schema the finding applies, e.g. `columns[2]`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, phase, message)
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Location of the column at `index` in the schema array.
    pub fn at_column(self, index: usize) -> Self {
        self.at(format!("columns[{}]", index))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("validate", "unknown column type 'jsonb'");
        assert!(diag.severity.is_error());
        assert_eq!(diag.phase, "validate");
    }

    #[test]
    fn test_diagnostic_with_column_location() {
        let diag = Diagnostic::warning("validate", "duplicate column").at_column(2);
        assert_eq!(diag.location.as_deref(), Some("columns[2]"));
        assert_eq!(diag.to_string(), "warning: duplicate column (at columns[2])");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_severity_orders_errors_first() {
        let mut severities = vec![Severity::Info, Severity::Error, Severity::Warning];
        severities.sort();
        assert_eq!(severities, [Severity::Error, Severity::Warning, Severity::Info]);
    }
}
