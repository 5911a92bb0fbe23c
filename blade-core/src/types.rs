//! Column and presentation types shared across crates.

use std::{fmt, str::FromStr};

/// Abstract column type as written in a schema file.
///
/// Unrecognized type names are kept verbatim in [`ColumnType::Unknown`] so
/// that loading never fails on a type; the pipeline decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Integer,
    Boolean,
    Date,
    DateTime,
    Text,
    Float,
    Double,
    Decimal,
    Time,
    Timestamp,
    Unknown(String),
}

impl ColumnType {
    /// Every recognized column type, in schema documentation order.
    pub const KNOWN: [ColumnType; 11] = [
        ColumnType::String,
        ColumnType::Integer,
        ColumnType::Boolean,
        ColumnType::Date,
        ColumnType::DateTime,
        ColumnType::Text,
        ColumnType::Float,
        ColumnType::Double,
        ColumnType::Decimal,
        ColumnType::Time,
        ColumnType::Timestamp,
    ];

    /// Get the schema type name (used in the JSON schema)
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Text => "text",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Decimal => "decimal",
            ColumnType::Time => "time",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Unknown(raw) => raw,
        }
    }

    /// Name of the schema-builder method that adds a column of this type.
    ///
    /// Unknown types are passed through unchanged.
    pub fn blueprint_method(&self) -> &str {
        match self {
            ColumnType::DateTime => "dateTime",
            other => other.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ColumnType::Unknown(_))
    }
}

impl From<&str> for ColumnType {
    fn from(s: &str) -> Self {
        match s {
            "string" => ColumnType::String,
            "integer" => ColumnType::Integer,
            "boolean" => ColumnType::Boolean,
            "date" => ColumnType::Date,
            "datetime" => ColumnType::DateTime,
            "text" => ColumnType::Text,
            "float" => ColumnType::Float,
            "double" => ColumnType::Double,
            "decimal" => ColumnType::Decimal,
            "time" => ColumnType::Time,
            "timestamp" => ColumnType::Timestamp,
            other => ColumnType::Unknown(other.to_string()),
        }
    }
}

impl FromStr for ColumnType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-input category used when rendering an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Number,
    Checkbox,
    Date,
    DateTimeLocal,
    Textarea,
    Time,
}

impl InputKind {
    /// The HTML `type` attribute value (or element name for `textarea`).
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Checkbox => "checkbox",
            InputKind::Date => "date",
            InputKind::DateTimeLocal => "datetime-local",
            InputKind::Textarea => "textarea",
            InputKind::Time => "time",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
