//! Type mapping between schema column types and presentation types.

use crate::types::{ColumnType, InputKind};

/// Trait for mapping schema column types to form-input presentation kinds.
///
/// Implement this trait for each presentation target.
pub trait TypeMapper {
    /// Map a column type to its input kind, or `None` when the type has no mapping
    fn map_column_type(&self, column_type: &ColumnType) -> Option<InputKind>;

    /// Map a column type, resolving a missing mapping to `fallback`
    fn map_or(&self, column_type: &ColumnType, fallback: InputKind) -> InputKind {
        self.map_column_type(column_type).unwrap_or(fallback)
    }
}
