//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a newly created item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render an item that changed in place.
    fn updated_item(&mut self, text: &str);

    /// Render an item that was left as it was.
    fn unchanged_item(&mut self, text: &str);

    /// Render a removed item (e.g., deleted file).
    fn removed_item(&mut self, text: &str);

    /// Render an item that could not be processed.
    fn failed_item(&mut self, text: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an informational message.
    fn info(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn updated_item(&mut self, text: &str) {
        println!("  ~ {}", text);
    }

    fn unchanged_item(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn removed_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn failed_item(&mut self, text: &str) {
        println!("  ! {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn info(&mut self, msg: &str) {
        println!("info: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
