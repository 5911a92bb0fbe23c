use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::{
    markup::{delete_form, escape_html, page, route_url},
    page_title, view_path,
};

/// Listing page with one table row per record.
///
/// The table always has an `Id` column and an `Actions` column around the
/// schema columns.
pub struct IndexBlade<'a> {
    pub resource: &'a Resource,
}

impl<'a> IndexBlade<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }
}

impl GeneratedFile for IndexBlade<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        view_path(base, self.resource, "index")
    }

    fn render(&self) -> String {
        let names = &self.resource.names;
        let fields = &self.resource.fields;

        page(&page_title(self.resource, "Index"), |b| {
            b.block_with_close("<table>", "</table>", |b| {
                b.block_with_close("<thead>", "</thead>", |b| {
                    b.block_with_close("<tr>", "</tr>", |b| {
                        b.line("<th>Id</th>")
                            .each(fields, |b, field| {
                                b.line(&format!("<th>{}</th>", escape_html(&field.name)))
                            })
                            .line("<th>Actions</th>")
                    })
                })
                .block_with_close("<tbody>", "</tbody>", |b| {
                    b.block("@foreach ($records as $record)", |b| {
                        b.block_with_close("<tr>", "</tr>", |b| {
                            b.line("<td>{{ $record->id }}</td>")
                                .each(fields, |b, field| {
                                    b.line(&format!(
                                        "<td>{{{{ $record->{} }}}}</td>",
                                        field.name
                                    ))
                                })
                                .block_with_close("<td>", "</td>", |b| {
                                    b.line(&format!(
                                        r#"<a href="{}">Show</a>"#,
                                        route_url(&names.route("show"), Some("$record->id"))
                                    ))
                                    .line(&format!(
                                        r#"<a href="{}">Edit</a>"#,
                                        route_url(&names.route("edit"), Some("$record->id"))
                                    ))
                                    .with(|b| {
                                        delete_form(
                                            b,
                                            &names.route("destroy"),
                                            "$record->id",
                                            true,
                                        )
                                    })
                                })
                        })
                    })
                    .line("@endforeach")
                })
            })
            .line(&format!(
                r#"<a href="{}">Create New {}</a>"#,
                route_url(&names.route("create"), None),
                names.class
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::test_support;

    #[test]
    fn test_cell_counts() {
        let resource = test_support::user();
        let html = IndexBlade::new(&resource).render();

        assert_eq!(html.matches("<th>").count(), 4);
        assert_eq!(html.matches("<td>").count(), 4);
    }

    #[test]
    fn test_cell_counts_for_empty_schema() {
        let resource = test_support::empty("User");
        let html = IndexBlade::new(&resource).render();

        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 2);
    }

    #[test]
    fn test_headers_and_cells_in_order() {
        let resource = test_support::user();
        let html = IndexBlade::new(&resource).render();

        assert!(html.contains(
            "        <th>Id</th>\n        <th>email</th>\n        <th>age</th>\n        <th>Actions</th>\n"
        ));
        assert!(html.contains(
            "          <td>{{ $record->email }}</td>\n          <td>{{ $record->age }}</td>\n"
        ));
    }

    #[test]
    fn test_loop_and_actions() {
        let resource = test_support::user();
        let html = IndexBlade::new(&resource).render();

        assert!(html.contains("      @foreach ($records as $record)\n"));
        assert!(html.contains("      @endforeach\n"));
        assert!(html.contains(r#"<a href="{{ route('user.show', $record->id) }}">Show</a>"#));
        assert!(html.contains(r#"method="POST" style="display:inline;">"#));
        assert!(html.contains(r#"<a href="{{ route('user.create') }}">Create New User</a>"#));
    }
}
