//! Canonical entity naming.

use std::{fmt, path::Path};

use crate::utils::{to_camel_case, to_pascal_case, to_snake_case, validate_identifier};

/// Canonical name of the scaffolded entity.
///
/// Holds the name exactly as it was derived from the schema file name. Every
/// casing used by generated artifacts is derived from it by a fixed rule:
///
/// | accessor | rule | `blog_post` |
/// |---|---|---|
/// | [`class_name`](Self::class_name) | PascalCase | `BlogPost` |
/// | [`table_name`](Self::table_name) | snake_case | `blog_post` |
/// | [`resource_key`](Self::resource_key) | snake_case | `blog_post` |
/// | [`variable_name`](Self::variable_name) | camelCase | `blogPost` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName {
    raw: String,
}

impl EntityName {
    /// Create an entity name, validating that every derived casing is an identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, &'static str> {
        let raw = raw.into();
        if let Some(reason) = validate_identifier(&raw.replace('-', "_")) {
            return Err(reason);
        }
        if !raw.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err("name must start with a letter");
        }
        Ok(Self { raw })
    }

    /// Derive the entity name from a schema path by stripping its extension.
    ///
    /// Only the final path component is used, so `schemas/User.json` yields `User`.
    pub fn from_path(path: &Path) -> Result<Self, &'static str> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or("file name is not valid UTF-8")?;
        Self::new(stem)
    }

    /// The name as derived from the input
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Model and controller type name
    pub fn class_name(&self) -> String {
        to_pascal_case(&self.raw)
    }

    /// Database table name
    pub fn table_name(&self) -> String {
        to_snake_case(&self.raw)
    }

    /// Route path segment, route-name prefix and view folder
    pub fn resource_key(&self) -> String {
        to_snake_case(&self.raw)
    }

    /// Variable holding a single record
    pub fn variable_name(&self) -> String {
        to_camel_case(&self.raw)
    }

    /// Controller type name
    pub fn controller_name(&self) -> String {
        format!("{}Controller", self.class_name())
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
