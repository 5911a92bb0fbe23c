use std::path::{Path, PathBuf};

use bladesmith_core::GeneratedFile;
use bladesmith_ir::Resource;

use super::markup::php_string;
use crate::CodeBuilder;

/// The Eloquent model class.
pub struct ModelPhp<'a> {
    pub resource: &'a Resource,
}

impl<'a> ModelPhp<'a> {
    pub fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// `['email', 'age']`
    fn fillable(&self) -> String {
        let names: Vec<String> = self.resource.field_names().map(php_string).collect();
        format!("[{}]", names.join(", "))
    }
}

impl GeneratedFile for ModelPhp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.php", self.resource.names.class))
    }

    fn render(&self) -> String {
        let names = &self.resource.names;

        CodeBuilder::php()
            .line("<?php")
            .blank()
            .line(r"namespace App\Models;")
            .blank()
            .line(r"use Illuminate\Database\Eloquent\Factories\HasFactory;")
            .line(r"use Illuminate\Database\Eloquent\Model;")
            .blank()
            .line(&format!("class {} extends Model", names.class))
            .line("{")
            .indent()
            .line("use HasFactory;")
            .blank()
            .line(&format!("protected $table = {};", php_string(&names.table)))
            .blank()
            .line(&format!("protected $fillable = {};", self.fillable()))
            .dedent()
            .line("}")
            .build()
    }
}
