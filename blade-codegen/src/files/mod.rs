//! One [`GeneratedFile`](bladesmith_core::GeneratedFile) per artifact kind.

mod controller_php;
mod create_blade;
mod edit_blade;
mod index_blade;
mod markup;
mod migration_php;
mod model_php;
mod show_blade;
mod web_php;

pub use controller_php::ControllerPhp;
pub use create_blade::CreateBlade;
pub use edit_blade::EditBlade;
pub use index_blade::IndexBlade;
pub use migration_php::MigrationPhp;
pub use model_php::ModelPhp;
pub use show_blade::ShowBlade;
pub use web_php::WebPhp;

use std::path::{Path, PathBuf};

use bladesmith_ir::Resource;

/// Path of a view template: `views/<resource>/<page>.blade.php`.
fn view_path(base: &Path, resource: &Resource, page: &str) -> PathBuf {
    base.join("views")
        .join(&resource.names.resource)
        .join(format!("{}.blade.php", page))
}

/// Title shared by a view's `<title>` and heading, e.g. `User Show Page`.
fn page_title(resource: &Resource, page: &str) -> String {
    format!("{} {} Page", resource.names.class, page)
}

#[cfg(test)]
pub(crate) mod test_support {
    use bladesmith_core::{ColumnType, EntityName, InputKind};
    use bladesmith_ir::{Field, Resource};

    /// `User` with `email: string` and `age: integer`.
    pub fn user() -> Resource {
        Resource::new(
            EntityName::new("User").unwrap(),
            vec![
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
            ],
        )
    }

    pub fn empty(name: &str) -> Resource {
        Resource::new(EntityName::new(name).unwrap(), Vec::new())
    }
}
