//! Lower phase - transforms the schema into a [`Resource`].

use bladesmith_core::{InputKind, TypeMapper};
use bladesmith_ir::{Field, Resource};
use bladesmith_schema::{Column, Schema, UnknownTypePolicy};
use eyre::{Result, bail};

use crate::{
    HtmlInputMapper,
    pipeline::{CompilationContext, Phase},
};

/// Phase that resolves every column into a [`Field`] with its input kind.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the schema into a resource"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.resource = Some(lower_schema(&ctx.schema, ctx.unknown_types)?);
        Ok(())
    }
}

/// Lower a schema into a resource.
fn lower_schema(schema: &Schema, policy: UnknownTypePolicy) -> Result<Resource> {
    let fields = schema
        .columns
        .iter()
        .map(|column| lower_column(column, policy))
        .collect::<Result<Vec<_>>>()?;

    Ok(Resource::new(schema.entity.clone(), fields))
}

fn lower_column(column: &Column, policy: UnknownTypePolicy) -> Result<Field> {
    let input = match policy {
        UnknownTypePolicy::Fallback => HtmlInputMapper.map_or(&column.column_type, InputKind::Text),
        UnknownTypePolicy::Reject => {
            let Some(kind) = HtmlInputMapper.map_column_type(&column.column_type) else {
                bail!(
                    "column '{}' has unknown type '{}'",
                    column.name,
                    column.column_type
                );
            };
            kind
        }
    };

    Ok(Field {
        name: column.name.clone(),
        column_type: column.column_type.clone(),
        input,
    })
}

#[cfg(test)]
mod tests {
    use bladesmith_core::{ColumnType, EntityName};

    use super::*;

    fn make_schema(columns: Vec<Column>) -> Schema {
        Schema::new(EntityName::new("blog_post").unwrap(), columns)
    }

    #[test]
    fn test_lower_keeps_order_and_resolves_inputs() {
        let schema = make_schema(vec![
            Column::new("title", "string"),
            Column::new("body", "text"),
            Column::new("published_at", "datetime"),
        ]);

        let resource = lower_schema(&schema, UnknownTypePolicy::Reject).unwrap();

        assert_eq!(resource.names.class, "BlogPost");
        assert_eq!(
            resource.field_names().collect::<Vec<_>>(),
            ["title", "body", "published_at"]
        );
        assert_eq!(resource.fields[1].input, InputKind::Textarea);
        assert_eq!(resource.fields[2].input, InputKind::DateTimeLocal);
        assert_eq!(resource.fields[2].column_type, ColumnType::DateTime);
    }

    #[test]
    fn test_lower_empty_schema() {
        let resource = lower_schema(&make_schema(Vec::new()), UnknownTypePolicy::Reject).unwrap();
        assert!(resource.fields.is_empty());
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        let schema = make_schema(vec![Column::new("meta", "jsonb")]);

        let resource = lower_schema(&schema, UnknownTypePolicy::Fallback).unwrap();

        assert_eq!(resource.fields[0].input, InputKind::Text);
        assert_eq!(
            resource.fields[0].column_type,
            ColumnType::Unknown("jsonb".to_string())
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let schema = make_schema(vec![Column::new("meta", "jsonb")]);
        assert!(lower_schema(&schema, UnknownTypePolicy::Reject).is_err());
    }
}
