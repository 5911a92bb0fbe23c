use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::{
    markup::{FormMode, form_fields, page, route_url},
    page_title, view_path,
};

/// Update form for an existing record, pre-filled from the record.
pub struct EditBlade<'a> {
    pub resource: &'a Resource,
}

impl<'a> EditBlade<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }
}

impl GeneratedFile for EditBlade<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        view_path(base, self.resource, "edit")
    }

    fn render(&self) -> String {
        let names = &self.resource.names;
        let id = format!("${}->id", names.variable);
        let mode = FormMode::Edit {
            variable: &names.variable,
        };

        page(&page_title(self.resource, "Edit"), |b| {
            b.block_with_close(
                &format!(
                    r#"<form action="{}" method="POST">"#,
                    route_url(&names.route("update"), Some(&id))
                ),
                "</form>",
                |b| {
                    b.line("@csrf")
                        .line("@method('PUT')")
                        .with(|b| form_fields(b, &self.resource.fields, mode))
                        .line(r#"<button type="submit">Submit</button>"#)
                },
            )
        })
    }
}
