//! Column descriptors and schema parsing.

use bladesmith_core::{ColumnType, EntityName};
use serde::{Deserialize, Deserializer};

use crate::{Result, SourceContext};

/// One column of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    /// Column name, used verbatim in every artifact
    pub name: String,

    /// Abstract column type; unrecognized names are kept as [`ColumnType::Unknown`]
    #[serde(rename = "type", deserialize_with = "deserialize_column_type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

fn deserialize_column_type<'de, D>(deserializer: D) -> std::result::Result<ColumnType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(ColumnType::from(raw.as_str()))
}

/// A loaded schema: the entity name plus its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub entity: EntityName,
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(entity: EntityName, columns: Vec<Column>) -> Self {
        Self { entity, columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Parse the column list from JSON source.
///
/// Only the shape is checked: a top-level array of objects with string
/// `name` and `type` fields. Extra fields are ignored.
pub fn parse_columns(content: &str, filename: &str) -> Result<Vec<Column>> {
    let ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| ctx.json_error(e))
}
