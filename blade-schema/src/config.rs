//! blade.toml configuration.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::{Result, SourceContext};

/// Root configuration for blade.toml. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where and how artifacts are written
    pub output: OutputConfig,

    /// Generation policies
    pub generate: GenerateConfig,
}

impl FromStr for Config {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "blade.toml")
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.toml_error(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output root directory
    pub dir: PathBuf,
    /// File name of the migration script
    pub migration_file: String,
    /// File name of the route declarations
    pub routes_file: String,
    /// How the route declaration file is updated
    pub routes: RoutesMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            migration_file: "migration.php".to_string(),
            routes_file: "web.php".to_string(),
            routes: RoutesMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// What to do with column types that have no presentation mapping
    pub unknown_types: UnknownTypePolicy,
    /// What to do when an artifact fails to write
    pub failure_mode: FailureMode,
}

/// How the routes file is updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutesMode {
    /// Rewrite the whole file
    #[default]
    Overwrite,
    /// Append the route line unless it is already present
    Append,
}

/// Handling of column types outside the recognized set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownTypePolicy {
    /// Fail validation before anything is written
    #[default]
    Reject,
    /// Render the column as a text input and warn
    Fallback,
}

/// Handling of a failed artifact write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureMode {
    /// Stop at the first failure and roll back everything written in the run
    #[default]
    FailFast,
    /// Write every artifact that can be written and report the failures
    BestEffort,
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::FailFast => write!(f, "fail-fast"),
            FailureMode::BestEffort => write!(f, "best-effort"),
        }
    }
}
