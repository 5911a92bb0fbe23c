use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::markup::php_string;
use crate::CodeBuilder;

/// The resource controller with the seven standard actions.
///
/// Parameterised only by the resource names; columns never appear here.
pub struct ControllerPhp<'a> {
    pub resource: &'a Resource,
}

impl<'a> ControllerPhp<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }
}

/// A public method with the brace on its own line.
fn method<F>(builder: CodeBuilder, signature: &str, body: F) -> CodeBuilder
where
    F: FnOnce(CodeBuilder) -> CodeBuilder,
{
    builder
        .line(&format!("public function {}", signature))
        .block_with_close("{", "}", body)
}

impl GeneratedFile for ControllerPhp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.php", self.resource.names.controller))
    }

    fn render(&self) -> String {
        let names = &self.resource.names;
        let class = &names.class;
        let var = format!("${}", names.variable);

        let find = format!("{} = {}::findOrFail($id);", var, class);
        let view_with_record = |page: &str| {
            format!(
                "return view({}, compact({}));",
                php_string(&names.view(page)),
                php_string(&names.variable)
            )
        };
        let redirect_to_show = format!(
            "return redirect()->route({}, {}->id);",
            php_string(&names.route("show")),
            var
        );

        CodeBuilder::php()
            .line("<?php")
            .blank()
            .line(r"namespace App\Http\Controllers;")
            .blank()
            .line(&format!(r"use App\Models\{};", class))
            .line(r"use Illuminate\Http\Request;")
            .blank()
            .line(&format!("class {} extends Controller", names.controller))
            .line("{")
            .indent()
            .with(|b| {
                method(b, "index()", |b| {
                    b.line(&format!("$records = {}::all();", class))
                        .blank()
                        .line(&format!(
                            "return view({}, compact('records'));",
                            php_string(&names.view("index"))
                        ))
                })
            })
            .blank()
            .with(|b| {
                method(b, "create()", |b| {
                    b.line(&format!("return view({});", php_string(&names.view("create"))))
                })
            })
            .blank()
            .with(|b| {
                method(b, "store(Request $request)", |b| {
                    b.line(&format!("{} = {}::create($request->all());", var, class))
                        .blank()
                        .line(&redirect_to_show)
                })
            })
            .blank()
            .with(|b| {
                method(b, "show(int $id)", |b| {
                    b.line(&find).blank().line(&view_with_record("show"))
                })
            })
            .blank()
            .with(|b| {
                method(b, "edit(int $id)", |b| {
                    b.line(&find).blank().line(&view_with_record("edit"))
                })
            })
            .blank()
            .with(|b| {
                method(b, "update(Request $request, int $id)", |b| {
                    b.line(&find)
                        .line(&format!("{}->update($request->all());", var))
                        .blank()
                        .line(&redirect_to_show)
                })
            })
            .blank()
            .with(|b| {
                method(b, "destroy(int $id)", |b| {
                    b.line(&find)
                        .line(&format!("{}->delete();", var))
                        .blank()
                        .line(&format!(
                            "return redirect()->route({});",
                            php_string(&names.route("index"))
                        ))
                })
            })
            .dedent()
            .line("}")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::test_support;

    #[test]
    fn test_all_actions_present_in_order() {
        let resource = test_support::user();
        let code = ControllerPhp::new(&resource).render();

        let positions: Vec<usize> = [
            "public function index()",
            "public function create()",
            "public function store(Request $request)",
            "public function show(int $id)",
            "public function edit(int $id)",
            "public function update(Request $request, int $id)",
            "public function destroy(int $id)",
        ]
        .iter()
        .map(|sig| code.find(sig).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names_flow_through() {
        let resource = test_support::empty("blog_post");
        let file = ControllerPhp::new(&resource);
        let code = file.render();

        assert!(code.contains(r"use App\Models\BlogPost;"));
        assert!(code.contains("class BlogPostController extends Controller\n"));
        assert!(code.contains("        $blogPost = BlogPost::findOrFail($id);\n"));
        assert!(code.contains("return view('blog_post.show', compact('blogPost'));"));
        assert!(code.contains("return redirect()->route('blog_post.show', $blogPost->id);"));
        assert!(code.contains("return redirect()->route('blog_post.index');"));
        assert_eq!(
            file.path(Path::new("")),
            PathBuf::from("BlogPostController.php")
        );
    }

    #[test]
    fn test_independent_of_columns() {
        let with_columns = ControllerPhp::new(&test_support::user()).render();
        let without_columns = ControllerPhp::new(&test_support::empty("User")).render();

        assert_eq!(with_columns, without_columns);
    }

    #[test]
    fn test_method_layout() {
        let code = ControllerPhp::new(&test_support::user()).render();

        assert!(code.contains(
            "    public function create()\n    {\n        return view('user.create');\n    }\n"
        ));
    }
}
