//! Line source over an in-memory text buffer.
//!
//! Splits text on `\r\n`, `\n` and a lone `\r`, the same set of terminators
//! a text reader recognises. Terminators are not part of the yielded lines.

/// Iterator over the lines of a text buffer.
///
/// A final line without a terminator is yielded; a trailing terminator does
/// not produce an extra empty line, and empty input yields nothing.
///
/// # Example
///
/// ```
/// use uncomment_lex::SourceLines;
///
/// let lines: Vec<&str> = SourceLines::new("a\r\nb\rc\n\nd\n").collect();
/// assert_eq!(lines, ["a", "b", "c", "", "d"]);
/// ```
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    /// Text not yet split.
    rest: &'a str,
}

impl<'a> SourceLines<'a> {
    /// Creates a line source over `source`.
    pub fn new(source: &'a str) -> Self {
        Self { rest: source }
    }

    /// Returns the text that has not been split into lines yet.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let line = &self.rest[..end];
                // Both terminator bytes are ASCII, so these are char boundaries.
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            },
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            },
        }
    }
}

impl std::iter::FusedIterator for SourceLines<'_> {}
