//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use bladesmith_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::php()
///     .line("public function up(): void")
///     .line("{")
///     .indent()
///     .line("Schema::create('user', function (Blueprint $table) {});")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(
///     code,
///     "public function up(): void\n{\n    Schema::create('user', function (Blueprint $table) {});\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (PHP).
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    /// Create a new CodeBuilder with 2-space indentation (Blade templates).
    pub fn html() -> Self {
        Self::new(Indent::HTML)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented body under `header` without a closing line.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use bladesmith_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::html()
    ///     .block_with_close("<tr>", "</tr>", |b| b.line("<td>email</td>"))
    ///     .build();
    ///
    /// assert_eq!(code, "<tr>\n  <td>email</td>\n</tr>\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a PHP docblock (`/** ... */`) with one line of text.
    pub fn docblock(self, text: &str) -> Self {
        self.line("/**").line(&format!(" * {}", text)).line(" */")
    }

    /// Add content produced by `f`.
    ///
    /// Lets helpers that take and return a builder join a chain.
    pub fn with<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::php()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::php().line("<?php").build();
        assert_eq!(code, "<?php\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::php()
            .line("class User extends Model")
            .line("{")
            .indent()
            .line("use HasFactory;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class User extends Model\n{\n    use HasFactory;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::php().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_block_without_close() {
        let code = CodeBuilder::html()
            .block("@foreach ($records as $record)", |b| b.line("<tr></tr>"))
            .line("@endforeach")
            .build();

        assert_eq!(
            code,
            "@foreach ($records as $record)\n  <tr></tr>\n@endforeach\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::php()
            .indent()
            .line("$a = 1;")
            .blank()
            .line("$b = 2;")
            .build();

        assert_eq!(code, "    $a = 1;\n\n    $b = 2;\n");
    }

    #[test]
    fn test_docblock() {
        let code = CodeBuilder::php()
            .indent()
            .docblock("Run the migrations.")
            .build();

        assert_eq!(
            code,
            "    /**\n     * Run the migrations.\n     */\n"
        );
    }

    #[test]
    fn test_with_joins_chain() {
        fn footer(b: CodeBuilder) -> CodeBuilder {
            b.line("</html>")
        }

        let code = CodeBuilder::html().line("<html>").with(footer).build();
        assert_eq!(code, "<html>\n</html>\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::php()
            .each(["email", "age"], |b, name| {
                b.line(&format!("$table->string('{}');", name))
            })
            .build();

        assert_eq!(
            code,
            "$table->string('email');\n$table->string('age');\n"
        );
    }
}
