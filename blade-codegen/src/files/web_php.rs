use std::path::{Path, PathBuf};

use bladesmith_core::{FileRules, GeneratedFile, Overwrite};
use bladesmith_ir::Resource;
use bladesmith_schema::RoutesMode;

use super::markup::php_string;
use crate::CodeBuilder;

/// The route declaration file.
///
/// Under [`RoutesMode::Append`] only the resource route line is added to an
/// existing file, and only when it is not already there.
pub struct WebPhp<'a> {
    pub resource: &'a Resource,
    pub file_name: &'a str,
    pub mode: RoutesMode,
}

impl<'a> WebPhp<'a> {
    pub fn new(resource: &'a Resource, file_name: &'a str, mode: RoutesMode) -> Self {
        Self {
            resource,
            file_name,
            mode,
        }
    }

    /// `Route::resource('user', \App\Http\Controllers\UserController::class);`
    pub fn route_line(&self) -> String {
        let names = &self.resource.names;
        format!(
            r"Route::resource({}, \App\Http\Controllers\{}::class);",
            php_string(&names.resource),
            names.controller
        )
    }
}

impl GeneratedFile for WebPhp<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name)
    }

    fn rules(&self) -> FileRules {
        let overwrite = match self.mode {
            RoutesMode::Overwrite => Overwrite::Always,
            RoutesMode::Append => Overwrite::AppendMissing,
        };
        FileRules { overwrite }
    }

    fn render(&self) -> String {
        CodeBuilder::php()
            .line("<?php")
            .blank()
            .line(r"use Illuminate\Support\Facades\Route;")
            .blank()
            .line(&self.route_line())
            .build()
    }

    fn fragment(&self) -> String {
        format!("{}\n", self.route_line())
    }
}
