use std::path::{Path, PathBuf};

use bladesmith_core::EntityName;
use tracing::debug;

use crate::{Config, Error, Result, Schema, parse_columns};

/// A schema file and the schema parsed from it.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a schema file.
    ///
    /// The entity name is derived from the file name before the content is
    /// read, so a badly named file fails without touching the disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entity =
            EntityName::from_path(&path).map_err(|reason| Error::invalid_entity_name(&path, reason))?;

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let columns = parse_columns(&content, &filename)?;

        debug!(
            path = %path.display(),
            entity = %entity,
            columns = columns.len(),
            "loaded schema"
        );

        Ok(Self {
            path,
            schema: Schema::new(entity, columns),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the file, keeping only the parsed schema.
    pub fn into_schema(self) -> Schema {
        self.schema
    }
}

/// A parsed blade.toml file.
pub struct ConfigFile {
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        debug!(path = %path.display(), "loaded config");

        Ok(Self { config })
    }

    /// Open `path` when it exists, otherwise fall back to the default config.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if path.exists() {
            Ok(Self::open(path)?.config)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
