//! Writing rendered artifacts to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// An artifact that renders to one file under an output root.
pub trait GeneratedFile {
    /// Where the file lands under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// The complete file content.
    fn render(&self) -> String;

    /// Content appended to an existing file under [`Overwrite::AppendMissing`].
    ///
    /// Defaults to the full rendered content.
    fn fragment(&self) -> String {
        self.render()
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        self.rules()
            .overwrite
            .apply(&path, &self.render(), &self.fragment())
    }
}

/// What a write did to the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Created or replaced with the full content
    Written,
    /// Fragment added to the end of an existing file
    Appended,
    /// Left untouched because it already contains the fragment
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How an existing file is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace it with the full content
    #[default]
    Always,
    /// Create it if missing, otherwise append the fragment once
    AppendMissing,
}

impl Overwrite {
    /// Write `full` (or append `fragment`) at `path` under this rule.
    ///
    /// Missing parent directories are created.
    pub fn apply(self, path: &Path, full: &str, fragment: &str) -> Result<WriteResult> {
        match self {
            Overwrite::Always => {
                write_file(path, full)?;
                Ok(WriteResult::Written)
            }
            Overwrite::AppendMissing => append_missing(path, full, fragment),
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Whether `content` has a line equal to `line`, ignoring surrounding whitespace.
fn contains_line(content: &str, line: &str) -> bool {
    let line = line.trim();
    content.lines().any(|l| l.trim() == line)
}

fn append_missing(path: &Path, full: &str, fragment: &str) -> Result<WriteResult> {
    if !path.exists() {
        write_file(path, full)?;
        return Ok(WriteResult::Written);
    }

    let mut content =
        fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    if contains_line(&content, fragment) {
        return Ok(WriteResult::Skipped);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(fragment);
    if !content.ends_with('\n') {
        content.push('\n');
    }
    write_file(path, &content)?;
    Ok(WriteResult::Appended)
}
