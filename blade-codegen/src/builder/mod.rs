//! Text building for PHP sources and Blade templates.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
