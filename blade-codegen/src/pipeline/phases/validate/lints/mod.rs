//! Built-in lints for schema validation.

mod column_naming;
mod duplicate_column;
mod empty_schema;
mod reserved_column;
mod unknown_type;

pub use column_naming::ColumnNamingLint;
pub use duplicate_column::DuplicateColumnLint;
pub use empty_schema::EmptySchemaLint;
pub use reserved_column::ReservedColumnLint;
pub use unknown_type::UnknownTypeLint;
