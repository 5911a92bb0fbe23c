//! Artifact generation and writing.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use bladesmith_core::{GeneratedFile, WriteResult};
use bladesmith_ir::Resource;
use bladesmith_schema::{FailureMode, OutputConfig, RoutesMode};
use eyre::{Result, WrapErr};
use tracing::{debug, error, info, warn};

use crate::{
    files::{
        ControllerPhp, CreateBlade, EditBlade, IndexBlade, MigrationPhp, ModelPhp, ShowBlade,
        WebPhp,
    },
    pipeline::CompilationContext,
};

/// The artifacts written for every resource, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Model,
    Migration,
    Controller,
    ShowView,
    IndexView,
    EditView,
    CreateView,
    Routes,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 8] = [
        ArtifactKind::Model,
        ArtifactKind::Migration,
        ArtifactKind::Controller,
        ArtifactKind::ShowView,
        ArtifactKind::IndexView,
        ArtifactKind::EditView,
        ArtifactKind::CreateView,
        ArtifactKind::Routes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Migration => "migration",
            ArtifactKind::Controller => "controller",
            ArtifactKind::ShowView => "show view",
            ArtifactKind::IndexView => "index view",
            ArtifactKind::EditView => "edit view",
            ArtifactKind::CreateView => "create view",
            ArtifactKind::Routes => "routes",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output file naming and routes handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub migration_file: String,
    pub routes_file: String,
    pub routes: RoutesMode,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for GeneratorOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            migration_file: config.migration_file.clone(),
            routes_file: config.routes_file.clone(),
            routes: config.routes,
        }
    }
}

/// A rendered artifact that has not been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub kind: ArtifactKind,
    /// Path relative to the output root.
    pub path: PathBuf,
    pub content: String,
}

/// What happened to one artifact.
#[derive(Debug)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// The write result, or the reason the write failed.
    pub result: std::result::Result<WriteResult, String>,
}

impl ArtifactOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Files touched while undoing a failed fail-fast run.
#[derive(Debug, Default)]
pub struct Rollback {
    /// Files created in the run and deleted again.
    pub removed: Vec<PathBuf>,
    /// Files overwritten in the run and restored to their previous content.
    pub restored: Vec<PathBuf>,
    /// Directories created in the run and deleted again.
    pub removed_dirs: Vec<PathBuf>,
    /// Steps that could not be undone.
    pub errors: Vec<String>,
}

impl Rollback {
    /// Whether the output tree is back to its state before the run.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The result of a generate run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub mode: FailureMode,
    /// One outcome per attempted artifact, in write order.
    pub artifacts: Vec<ArtifactOutcome>,
    /// Artifacts never attempted because a fail-fast run stopped early.
    pub not_attempted: Vec<ArtifactKind>,
    /// Present when a fail-fast run was rolled back.
    pub rollback: Option<Rollback>,
}

impl GenerateOutcome {
    pub fn is_success(&self) -> bool {
        self.artifacts.iter().all(ArtifactOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| !a.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Renders and writes every artifact of a resource.
pub struct Generator {
    resource: Resource,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(resource: Resource, options: GeneratorOptions) -> Self {
        Self { resource, options }
    }

    /// Create a generator from the lowered resource of a pipeline run.
    pub fn from_context(ctx: &mut CompilationContext, options: GeneratorOptions) -> Result<Self> {
        Ok(Self::new(ctx.take_resource()?, options))
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    fn artifacts(&self) -> Vec<(ArtifactKind, Box<dyn GeneratedFile + '_>)> {
        let resource = &self.resource;
        let options = &self.options;

        ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let file: Box<dyn GeneratedFile + '_> = match kind {
                    ArtifactKind::Model => Box::new(ModelPhp::new(resource)),
                    ArtifactKind::Migration => {
                        Box::new(MigrationPhp::new(resource, &options.migration_file))
                    }
                    ArtifactKind::Controller => Box::new(ControllerPhp::new(resource)),
                    ArtifactKind::ShowView => Box::new(ShowBlade::new(resource)),
                    ArtifactKind::IndexView => Box::new(IndexBlade::new(resource)),
                    ArtifactKind::EditView => Box::new(EditBlade::new(resource)),
                    ArtifactKind::CreateView => Box::new(CreateBlade::new(resource)),
                    ArtifactKind::Routes => Box::new(WebPhp::new(
                        resource,
                        &options.routes_file,
                        options.routes,
                    )),
                };
                (kind, file)
            })
            .collect()
    }

    /// Render every artifact without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts()
            .into_iter()
            .map(|(kind, file)| PreviewFile {
                kind,
                path: file.path(Path::new("")),
                content: file.render(),
            })
            .collect()
    }

    /// Write every artifact under `output_dir`.
    ///
    /// Under [`FailureMode::FailFast`] the first failure stops the run and
    /// everything written so far is undone. Under [`FailureMode::BestEffort`]
    /// every artifact is attempted and successful writes are kept.
    pub fn generate(&self, output_dir: &Path, mode: FailureMode) -> GenerateOutcome {
        let mut journal = Journal::default();
        let mut outcome = GenerateOutcome {
            mode,
            artifacts: Vec::new(),
            not_attempted: Vec::new(),
            rollback: None,
        };

        let mut artifacts = self.artifacts().into_iter();
        for (kind, file) in artifacts.by_ref() {
            let path = file.path(output_dir);
            let snapshot = if mode == FailureMode::FailFast {
                journal.record(&path)
            } else {
                Ok(())
            };

            let result = match snapshot.and_then(|()| file.write(output_dir)) {
                Ok(written) => {
                    info!(
                        artifact = %kind,
                        path = %path.display(),
                        result = ?written,
                        "wrote artifact"
                    );
                    Ok(written)
                }
                Err(e) => {
                    error!(
                        artifact = %kind,
                        path = %path.display(),
                        error = %e,
                        "failed to write artifact"
                    );
                    Err(format!("{:#}", e))
                }
            };

            let failed = result.is_err();
            outcome.artifacts.push(ArtifactOutcome { kind, path, result });

            if failed && mode == FailureMode::FailFast {
                break;
            }
        }

        outcome.not_attempted = artifacts.map(|(kind, _)| kind).collect();

        if mode == FailureMode::FailFast && !outcome.is_success() {
            warn!("rolling back artifacts written in this run");
            outcome.rollback = Some(journal.rollback());
        }

        outcome
    }
}

/// State of a path before the run touched it.
#[derive(Debug)]
enum Prior {
    Missing,
    /// Exact bytes of the existing file.
    Content(Vec<u8>),
    /// Something other than a file sits there, so the write cannot replace it.
    NotAFile,
}

/// Records what a run is about to change so it can be undone.
#[derive(Debug, Default)]
struct Journal {
    files: Vec<(PathBuf, Prior)>,
    created_dirs: Vec<PathBuf>,
}

impl Journal {
    /// Snapshot `path` and its missing ancestors before writing it.
    ///
    /// Fails when an existing file cannot be read back, since it could not
    /// be restored afterwards.
    fn record(&mut self, path: &Path) -> Result<()> {
        if self.files.iter().any(|(p, _)| p == path) {
            return Ok(());
        }

        let mut dir = path.parent();
        while let Some(d) = dir {
            if d.as_os_str().is_empty() || d.exists() {
                break;
            }
            if !self.created_dirs.iter().any(|c| c == d) {
                self.created_dirs.push(d.to_path_buf());
            }
            dir = d.parent();
        }

        let prior = if !path.exists() {
            Prior::Missing
        } else if path.is_file() {
            let bytes = fs::read(path).wrap_err_with(|| {
                format!("cannot snapshot '{}', refusing to overwrite it", path.display())
            })?;
            Prior::Content(bytes)
        } else {
            Prior::NotAFile
        };
        debug!(path = %path.display(), prior = prior_label(&prior), "recorded");
        self.files.push((path.to_path_buf(), prior));
        Ok(())
    }

    /// Undo every recorded change, newest first.
    fn rollback(self) -> Rollback {
        let mut rollback = Rollback::default();

        for (path, prior) in self.files.into_iter().rev() {
            match prior {
                Prior::Missing => {
                    if !path.is_file() {
                        continue;
                    }
                    match fs::remove_file(&path) {
                        Ok(()) => rollback.removed.push(path),
                        Err(e) => rollback
                            .errors
                            .push(format!("failed to remove '{}': {}", path.display(), e)),
                    }
                }
                Prior::Content(bytes) => match fs::write(&path, bytes) {
                    Ok(()) => rollback.restored.push(path),
                    Err(e) => rollback
                        .errors
                        .push(format!("failed to restore '{}': {}", path.display(), e)),
                },
                Prior::NotAFile => {}
            }
        }

        // Deepest first so parents are empty by the time they are removed
        let mut dirs = self.created_dirs;
        dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for dir in dirs {
            if !dir.is_dir() {
                continue;
            }
            match fs::remove_dir(&dir) {
                Ok(()) => rollback.removed_dirs.push(dir),
                Err(e) => rollback
                    .errors
                    .push(format!("failed to remove '{}': {}", dir.display(), e)),
            }
        }

        for e in &rollback.errors {
            warn!(error = %e, "rollback incomplete");
        }

        rollback
    }
}

fn prior_label(prior: &Prior) -> &'static str {
    match prior {
        Prior::Missing => "missing",
        Prior::Content(_) => "content",
        Prior::NotAFile => "not a file",
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::files::test_support;

    #[test]
    fn test_preview_paths_in_write_order() {
        let generator = Generator::new(test_support::user(), GeneratorOptions::default());

        let paths: Vec<PathBuf> = generator.preview().into_iter().map(|p| p.path).collect();

        assert_eq!(
            paths,
            [
                PathBuf::from("User.php"),
                PathBuf::from("migration.php"),
                PathBuf::from("UserController.php"),
                Path::new("views").join("user").join("show.blade.php"),
                Path::new("views").join("user").join("index.blade.php"),
                Path::new("views").join("user").join("edit.blade.php"),
                Path::new("views").join("user").join("create.blade.php"),
                PathBuf::from("web.php"),
            ]
        );
    }

    #[test]
    fn test_generate_writes_everything() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(test_support::user(), GeneratorOptions::default());

        let outcome = generator.generate(temp.path(), FailureMode::FailFast);

        assert!(outcome.is_success());
        assert_eq!(outcome.artifacts.len(), ArtifactKind::ALL.len());
        assert!(outcome.not_attempted.is_empty());
        assert!(outcome.rollback.is_none());
        for preview in generator.preview() {
            let written = fs::read_to_string(temp.path().join(&preview.path)).unwrap();
            assert_eq!(written, preview.content);
        }
    }

    #[test]
    fn test_journal_restores_overwritten_and_removes_created() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("User.php");
        let created = temp.path().join("views").join("user").join("show.blade.php");
        fs::write(&existing, "old").unwrap();

        let mut journal = Journal::default();
        journal.record(&existing).unwrap();
        journal.record(&created).unwrap();
        fs::write(&existing, "new").unwrap();
        fs::create_dir_all(created.parent().unwrap()).unwrap();
        fs::write(&created, "new").unwrap();

        let rollback = journal.rollback();

        assert!(rollback.is_complete());
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert!(!created.exists());
        assert!(!temp.path().join("views").exists());
        assert_eq!(rollback.removed_dirs.len(), 2);
    }

    #[test]
    fn test_fail_fast_restores_non_utf8_model() {
        let temp = TempDir::new().unwrap();
        let model = temp.path().join("User.php");
        let latin1 = b"<?php // caf\xe9 latin-1\n".to_vec();
        fs::write(&model, &latin1).unwrap();
        // A plain file where the views directory should go fails the show view.
        fs::write(temp.path().join("views"), "blocking").unwrap();
        let generator = Generator::new(test_support::user(), GeneratorOptions::default());

        let outcome = generator.generate(temp.path(), FailureMode::FailFast);

        assert!(!outcome.is_success());
        let rollback = outcome.rollback.as_ref().unwrap();
        assert!(rollback.is_complete());
        assert!(rollback.restored.contains(&model));
        assert_eq!(fs::read(&model).unwrap(), latin1);
        assert!(!temp.path().join("migration.php").exists());
        assert!(!temp.path().join("UserController.php").exists());
    }

    #[test]
    fn test_journal_snapshots_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("web.php");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let mut journal = Journal::default();
        journal.record(&path).unwrap();
        fs::write(&path, "replaced").unwrap();
        let rollback = journal.rollback();

        assert_eq!(rollback.restored, [path.clone()]);
        assert_eq!(fs::read(&path).unwrap(), [0xff, 0xfe, b'\n']);
    }

    #[test]
    fn test_from_context_requires_lowering() {
        use bladesmith_core::EntityName;
        use bladesmith_schema::{Schema, UnknownTypePolicy};

        let schema = Schema::new(EntityName::new("User").unwrap(), Vec::new());
        let mut ctx = CompilationContext::new(schema, UnknownTypePolicy::Reject);

        assert!(Generator::from_context(&mut ctx, GeneratorOptions::default()).is_err());
    }
}
