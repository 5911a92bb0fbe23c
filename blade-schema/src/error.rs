use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema and config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    /// Create a new source context.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a schema parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = json_span(self.src, source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert serde_json's 1-based line/column into a one-character span.
///
/// serde_json reports line 0 when the error has no position.
fn json_span(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    Some(SourceSpan::from((offset, len)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(
        code(blade::parse_error),
        help("a schema is a JSON array of objects like {{\"name\": \"email\", \"type\": \"string\"}}")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(blade::config_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot derive an entity name from '{path}'")]
    #[diagnostic(
        code(blade::invalid_entity),
        help("{reason}. The schema file name (without extension) names the entity, e.g. 'User.json'.")
    )]
    InvalidEntityName { path: PathBuf, reason: String },
}

impl Error {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an invalid entity name error
    pub fn invalid_entity_name(path: impl Into<PathBuf>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidEntityName {
            path: path.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_span_first_line() {
        let span = json_span("[1, x]", 1, 5).unwrap();
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_json_span_later_line() {
        let src = "[\n  {\"name\": 1}\n]";
        let span = json_span(src, 2, 12).unwrap();
        assert_eq!(&src[span.offset()..span.offset() + 1], "1");
    }

    #[test]
    fn test_json_span_at_eof() {
        let span = json_span("[", 1, 2).unwrap();
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_json_span_without_position() {
        assert!(json_span("[]", 0, 0).is_none());
    }
}
