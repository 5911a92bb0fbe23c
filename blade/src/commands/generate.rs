use std::path::{Path, PathBuf};

use bladesmith_codegen::GeneratorOptions;
use bladesmith_schema::{Config, ConfigFile, FailureMode, SchemaFile, UnknownTypePolicy};
use clap::Args;
use eyre::Result;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "blade.toml";

#[derive(Args)]
pub struct GenerateCommand {
    /// Schema file; its name (without extension) names the entity, e.g. User.json
    pub schema: PathBuf,

    /// Output directory [default: output, or [output].dir from the config]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to blade.toml (defaults to ./blade.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print every artifact instead of writing to disk
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Validate the schema and print diagnostics without generating
    #[arg(long)]
    pub check: bool,

    /// Print check diagnostics as JSON
    #[arg(long, requires = "check")]
    pub json: bool,

    /// Keep writing after a failed artifact instead of rolling back
    #[arg(long)]
    pub best_effort: bool,

    /// Render columns of unknown type as text inputs instead of failing
    #[arg(long)]
    pub allow_unknown_types: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config().unwrap_or_exit();
        let schema_file = SchemaFile::open(&self.schema).unwrap_or_exit();
        let options = self.options(&config);

        if self.check {
            let path = schema_file.path().to_path_buf();
            let report = ops::check(schema_file.into_schema(), &path, options.unknown_types);
            if self.json {
                println!("{}", report.to_json()?);
            } else {
                report.render(&mut TerminalOutput::new());
            }
            if !report.is_valid() {
                std::process::exit(1);
            }
            return Ok(());
        }

        let report = ops::generate(schema_file.into_schema(), options)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn load_config(&self) -> bladesmith_schema::Result<Config> {
        match &self.config {
            Some(path) => Ok(ConfigFile::open(path)?.config().clone()),
            None => ConfigFile::open_or_default(DEFAULT_CONFIG),
        }
    }

    /// Merge the config with command-line overrides.
    fn options<'a>(&'a self, config: &'a Config) -> GenerateOptions<'a> {
        let output_dir: &Path = self.output.as_deref().unwrap_or(&config.output.dir);

        let unknown_types = if self.allow_unknown_types {
            UnknownTypePolicy::Fallback
        } else {
            config.generate.unknown_types
        };

        let failure_mode = if self.best_effort {
            FailureMode::BestEffort
        } else {
            config.generate.failure_mode
        };

        debug!(
            output = %output_dir.display(),
            ?unknown_types,
            %failure_mode,
            "resolved options"
        );

        GenerateOptions {
            output_dir,
            dry_run: self.dry_run,
            unknown_types,
            failure_mode,
            generator: GeneratorOptions::from(&config.output),
        }
    }
}
