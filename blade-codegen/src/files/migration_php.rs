use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::markup::php_string;
use crate::CodeBuilder;

/// The schema migration creating the resource table.
pub struct MigrationPhp<'a> {
    pub resource: &'a Resource,
    pub file_name: &'a str,
}

impl<'a> MigrationPhp<'a> {
    pub fn new(resource: &'a Resource, file_name: &'a str) -> Self {
        Self {
            resource,
            file_name,
        }
    }

    /// `$table-><method>('<name>');` per field, in schema order.
    fn column_lines(&self) -> Vec<String> {
        self.resource
            .fields
            .iter()
            .map(|f| {
                format!(
                    "$table->{}({});",
                    f.column_type.blueprint_method(),
                    php_string(&f.name)
                )
            })
            .collect()
    }
}

impl GeneratedFile for MigrationPhp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name)
    }

    fn render(&self) -> String {
        let table = php_string(&self.resource.names.table);

        CodeBuilder::php()
            .line("<?php")
            .blank()
            .line(r"use Illuminate\Database\Migrations\Migration;")
            .line(r"use Illuminate\Database\Schema\Blueprint;")
            .line(r"use Illuminate\Support\Facades\Schema;")
            .blank()
            .line("return new class extends Migration")
            .line("{")
            .indent()
            .docblock("Run the migrations.")
            .line("public function up(): void")
            .line("{")
            .indent()
            .block_with_close(
                &format!("Schema::create({}, function (Blueprint $table) {{", table),
                "});",
                |b| {
                    b.line("$table->id();")
                        .each(self.column_lines(), |b, line| b.line(&line))
                        .line("$table->timestamps();")
                },
            )
            .dedent()
            .line("}")
            .blank()
            .docblock("Reverse the migrations.")
            .line("public function down(): void")
            .line("{")
            .indent()
            .line(&format!("Schema::dropIfExists({});", table))
            .dedent()
            .line("}")
            .dedent()
            .line("};")
            .build()
    }
}
