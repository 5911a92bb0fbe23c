//! HTML form-input type mapper.

use bladesmith_core::{ColumnType, InputKind, TypeMapper};

/// Maps column types to the HTML input kinds used by the edit and create views.
pub struct HtmlInputMapper;

impl TypeMapper for HtmlInputMapper {
    fn map_column_type(&self, column_type: &ColumnType) -> Option<InputKind> {
        let kind = match column_type {
            ColumnType::String => InputKind::Text,
            ColumnType::Integer => InputKind::Number,
            ColumnType::Boolean => InputKind::Checkbox,
            ColumnType::Date => InputKind::Date,
            ColumnType::DateTime => InputKind::DateTimeLocal,
            ColumnType::Text => InputKind::Textarea,
            ColumnType::Float => InputKind::Number,
            ColumnType::Double => InputKind::Number,
            ColumnType::Decimal => InputKind::Number,
            ColumnType::Time => InputKind::Time,
            ColumnType::Timestamp => InputKind::DateTimeLocal,
            ColumnType::Unknown(_) => return None,
        };
        Some(kind)
    }
}
