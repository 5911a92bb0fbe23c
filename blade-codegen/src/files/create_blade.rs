use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::{
    markup::{FormMode, form_fields, page, route_url},
    page_title, view_path,
};

/// Form for a new record. Controls carry placeholders and no values.
pub struct CreateBlade<'a> {
    pub resource: &'a Resource,
}

impl<'a> CreateBlade<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }
}

impl GeneratedFile for CreateBlade<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        view_path(base, self.resource, "create")
    }

    fn render(&self) -> String {
        let names = &self.resource.names;

        page(&page_title(self.resource, "Create"), |b| {
            b.block_with_close(
                &format!(
                    r#"<form action="{}" method="POST">"#,
                    route_url(&names.route("store"), None)
                ),
                "</form>",
                |b| {
                    b.line("@csrf")
                        .with(|b| form_fields(b, &self.resource.fields, FormMode::Create))
                        .line(r#"<button type="submit">Submit</button>"#)
                },
            )
        })
    }
}
