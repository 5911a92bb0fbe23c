//! Indentation unit for generated sources.

/// One level of indentation, as a number of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// PHP sources (PSR-12).
    pub const PHP: Self = Self::spaces(4);

    /// Blade templates.
    pub const HTML: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Append `level` units of indentation to `buf`.
    pub fn write_to(&self, buf: &mut String, level: usize) {
        buf.extend(std::iter::repeat_n(' ', self.width * level));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to() {
        let mut buf = String::from("x");
        Indent::HTML.write_to(&mut buf, 3);
        assert_eq!(buf, "x      ");
    }

    #[test]
    fn test_zero_level_writes_nothing() {
        let mut buf = String::new();
        Indent::PHP.write_to(&mut buf, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Indent::PHP, Indent::spaces(4));
        assert_eq!(Indent::HTML, Indent::spaces(2));
        assert_eq!(Indent::default(), Indent::PHP);
    }
}
