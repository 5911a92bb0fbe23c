//! Shared fragments for the PHP and Blade artifacts.

use bladesmith_core::InputKind;
use bladesmith_ir::Field;

use crate::CodeBuilder;

/// Quote `s` as a PHP single-quoted string literal.
pub fn php_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Escape `s` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Blade echo of a route URL, e.g. `{{ route('user.show', $user->id) }}`.
pub fn route_url(route: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{{{{ route({}, {}) }}}}", php_string(route), id),
        None => format!("{{{{ route({}) }}}}", php_string(route)),
    }
}

/// Wrap `body` in the HTML document shared by every view.
///
/// The title doubles as the page heading.
pub fn page<F>(title: &str, body: F) -> String
where
    F: FnOnce(CodeBuilder) -> CodeBuilder,
{
    let title = escape_html(title);
    CodeBuilder::html()
        .line("<!DOCTYPE html>")
        .line("<html>")
        .block_with_close("<head>", "</head>", |b| {
            b.line(&format!("<title>{}</title>", title))
        })
        .block_with_close("<body>", "</body>", |b| {
            body(b.line(&format!("<h1>{}</h1>", title)))
        })
        .line("</html>")
        .build()
}

/// A POST form that deletes the record at `id`.
pub fn delete_form(builder: CodeBuilder, route: &str, id: &str, inline: bool) -> CodeBuilder {
    let style = if inline { r#" style="display:inline;""# } else { "" };
    builder.block_with_close(
        &format!(
            r#"<form action="{}" method="POST"{}>"#,
            route_url(route, Some(id)),
            style
        ),
        "</form>",
        |b| {
            b.line("@csrf")
                .line("@method('DELETE')")
                .line(r#"<button type="submit">Delete</button>"#)
        },
    )
}

/// How a form populates its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    /// Empty controls with the column name as placeholder.
    Create,
    /// Controls pre-filled from the record variable (without the `$`).
    Edit { variable: &'a str },
}

/// One labelled control per field, in order.
pub fn form_fields(builder: CodeBuilder, fields: &[Field], mode: FormMode<'_>) -> CodeBuilder {
    builder.each(fields, |b, field| {
        let name = escape_html(&field.name);
        b.block_with_close("<div>", "</div>", |b| {
            b.line(&format!(r#"<label for="{0}">{0}</label>"#, name))
                .line(&control(field, &name, mode))
        })
    })
}

fn control(field: &Field, name: &str, mode: FormMode<'_>) -> String {
    let value = match mode {
        FormMode::Edit { variable } => Some(format!("{{{{ ${}->{} }}}}", variable, field.name)),
        FormMode::Create => None,
    };

    match (field.input, value) {
        (InputKind::Textarea, Some(value)) => {
            format!(r#"<textarea name="{0}" id="{0}">{1}</textarea>"#, name, value)
        }
        (InputKind::Textarea, None) => {
            format!(r#"<textarea name="{0}" id="{0}" placeholder="{0}"></textarea>"#, name)
        }
        (kind, Some(value)) => {
            format!(r#"<input type="{}" name="{1}" id="{1}" value="{2}">"#, kind, name, value)
        }
        (kind, None) => {
            format!(r#"<input type="{}" name="{1}" id="{1}" placeholder="{1}">"#, kind, name)
        }
    }
}
