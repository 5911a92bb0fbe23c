//! Lowered resource types.

use bladesmith_core::{ColumnType, EntityName, InputKind};

/// Every name an artifact needs, derived once from the entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Model class name (e.g., `BlogPost`).
    pub class: String,
    /// Controller class name (e.g., `BlogPostController`).
    pub controller: String,
    /// Database table name (e.g., `blog_post`).
    pub table: String,
    /// Route key, route-name prefix and view folder (e.g., `blog_post`).
    pub resource: String,
    /// Single-record variable name without the sigil (e.g., `blogPost`).
    pub variable: String,
}

impl ResourceNames {
    pub fn derive(entity: &EntityName) -> Self {
        Self {
            class: entity.class_name(),
            controller: entity.controller_name(),
            table: entity.table_name(),
            resource: entity.resource_key(),
            variable: entity.variable_name(),
        }
    }

    /// Fully qualified route name for a resource action (e.g., `user.show`).
    pub fn route(&self, action: &str) -> String {
        format!("{}.{}", self.resource, action)
    }

    /// View name for a page (e.g., `user.index`).
    pub fn view(&self, page: &str) -> String {
        format!("{}.{}", self.resource, page)
    }
}

/// One column of the resource, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name as written in the schema.
    pub name: String,
    /// Abstract column type.
    pub column_type: ColumnType,
    /// Resolved form-input kind.
    pub input: InputKind,
}

/// The scaffolded resource: an entity and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub entity: EntityName,
    pub names: ResourceNames,
    pub fields: Vec<Field>,
}

impl Resource {
    pub fn new(entity: EntityName, fields: Vec<Field>) -> Self {
        let names = ResourceNames::derive(&entity);
        Self {
            entity,
            names,
            fields,
        }
    }

    /// Column names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_derived_once() {
        let resource = Resource::new(EntityName::new("BlogPost").unwrap(), Vec::new());

        assert_eq!(resource.names.class, "BlogPost");
        assert_eq!(resource.names.controller, "BlogPostController");
        assert_eq!(resource.names.table, "blog_post");
        assert_eq!(resource.names.variable, "blogPost");
        assert_eq!(resource.names.route("show"), "blog_post.show");
        assert_eq!(resource.names.view("index"), "blog_post.index");
    }

    #[test]
    fn test_field_names_keep_order() {
        let fields = vec![
            Field {
                name: "email".to_string(),
                column_type: ColumnType::String,
                input: InputKind::Text,
            },
            Field {
                name: "age".to_string(),
                column_type: ColumnType::Integer,
                input: InputKind::Number,
            },
        ];
        let resource = Resource::new(EntityName::new("User").unwrap(), fields);

        assert_eq!(resource.field_names().collect::<Vec<_>>(), ["email", "age"]);
    }
}
