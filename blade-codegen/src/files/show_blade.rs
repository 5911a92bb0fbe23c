use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::{
    markup::{delete_form, escape_html, page, route_url},
    page_title, view_path,
};

/// Detail page for a single record.
pub struct ShowBlade<'a> {
    pub resource: &'a Resource,
}

impl<'a> ShowBlade<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }
}

impl GeneratedFile for ShowBlade<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        view_path(base, self.resource, "show")
    }

    fn render(&self) -> String {
        let names = &self.resource.names;
        let id = format!("${}->id", names.variable);

        page(&page_title(self.resource, "Show"), |b| {
            b.line(&format!("<p>Id: {{{{ {} }}}}</p>", id))
                .each(&self.resource.fields, |b, field| {
                    b.line(&format!(
                        "<p>{}: {{{{ ${}->{} }}}}</p>",
                        escape_html(&field.name),
                        names.variable,
                        field.name
                    ))
                })
                .line(&format!(
                    r#"<a href="{}">Back</a>"#,
                    route_url(&names.route("index"), None)
                ))
                .line(&format!(
                    r#"<a href="{}">Edit</a>"#,
                    route_url(&names.route("edit"), Some(&id))
                ))
                .with(|b| delete_form(b, &names.route("destroy"), &id, false))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::test_support;

    #[test]
    fn test_one_row_per_column() {
        let resource = test_support::user();
        let html = ShowBlade::new(&resource).render();

        assert!(html.contains("  <p>Id: {{ $user->id }}</p>\n"));
        assert!(html.contains("  <p>email: {{ $user->email }}</p>\n"));
        assert!(html.contains("  <p>age: {{ $user->age }}</p>\n"));
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn test_links_and_delete_form() {
        let resource = test_support::user();
        let html = ShowBlade::new(&resource).render();

        assert!(html.contains(r#"<a href="{{ route('user.index') }}">Back</a>"#));
        assert!(html.contains(r#"<a href="{{ route('user.edit', $user->id) }}">Edit</a>"#));
        assert!(html.contains(r#"<form action="{{ route('user.destroy', $user->id) }}" method="POST">"#));
        assert!(html.contains("    @method('DELETE')\n"));
    }

    #[test]
    fn test_path_and_title() {
        let resource = test_support::empty("blog_post");
        let file = ShowBlade::new(&resource);

        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/views/blog_post/show.blade.php")
        );
        assert!(file.render().contains("<title>BlogPost Show Page</title>"));
    }
}
