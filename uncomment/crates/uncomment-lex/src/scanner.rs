//! Line-oriented comment stripping.
//!
//! [`Scanner`] threads a [`State`] through a sequence of lines and assembles
//! the surviving characters of each line into one output buffer, terminating
//! every emitted line with [`LINE_TERMINATOR`].

use std::fmt;

use crate::lines::SourceLines;
use crate::state::{Emit, State};

/// Terminator appended after every emitted line, whatever the input used.
pub const LINE_TERMINATOR: &str = "\r\n";

/// A multi-line construct that can be left open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `/* ...` without a closing `*/`.
    BlockComment,
    /// `@" ...` without a closing `"`.
    VerbatimString,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::BlockComment => f.write_str("block comment"),
            Construct::VerbatimString => f.write_str("verbatim string"),
        }
    }
}

/// A construct still open when the input ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unterminated {
    /// Which construct was left open.
    pub construct: Construct,
    /// 1-based line on which it was opened.
    pub line: usize,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unterminated {} opened on line {}", self.construct, self.line)
    }
}

/// Output of a complete scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uncommented {
    /// The comment-free text with normalized line terminators.
    pub text: String,
    /// Set when the input ended inside a block comment or verbatim string.
    ///
    /// The text is produced the same way either way: the open construct
    /// simply runs to the end of input.
    pub unterminated: Option<Unterminated>,
    /// Number of input lines consumed.
    pub lines: usize,
}

/// Comment stripping scanner.
///
/// One scanner handles one input. Feed it lines with [`feed_line`] and
/// collect the result with [`finish`], or use [`Scanner::run`] to do both.
///
/// [`feed_line`]: Scanner::feed_line
/// [`finish`]: Scanner::finish
///
/// # Example
///
/// ```
/// use uncomment_lex::Scanner;
///
/// let text = Scanner::run(["int x = 1; // one", "/* gone */ int y;"]);
/// assert_eq!(text, "int x = 1; \r\n int y;\r\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Scanner {
    /// Current lexical state.
    state: State,
    /// Assembled output.
    output: String,
    /// Number of lines fed so far.
    line: usize,
    /// Line on which the current multi-line construct opened.
    opened_at: usize,
}

impl Scanner {
    /// Creates a scanner in the `Normal` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current lexical state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the output assembled so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Scans one line. `line` must not contain its terminator.
    pub fn feed_line(&mut self, line: &str) {
        self.line += 1;
        self.state = self.state.at_line_start();

        let start = self.output.len();
        for c in line.chars() {
            let transition = self.state.step(c);

            if transition.next.is_multiline() && !self.state.is_multiline() {
                self.opened_at = self.line;
            }

            match transition.emit {
                Emit::Skip => {},
                Emit::Copy => self.output.push(c),
                Emit::ReleaseSlash => {
                    self.output.push('/');
                    self.output.push(c);
                },
            }

            self.state = transition.next;
        }

        // A `/` at the end of a line can no longer open a comment.
        if self.state == State::Slash {
            self.output.push('/');
        }

        // Lines wholly eaten by comments disappear; blank lines stay.
        if self.output.len() > start || line.is_empty() {
            self.output.push_str(LINE_TERMINATOR);
        }
    }

    /// Consumes the scanner and returns the assembled output.
    pub fn finish(self) -> Uncommented {
        let construct = match self.state {
            State::BlockComment | State::BlockCommentStar => Some(Construct::BlockComment),
            State::VerbatimString => Some(Construct::VerbatimString),
            _ => None,
        };

        Uncommented {
            text: self.output,
            unterminated: construct.map(|construct| Unterminated {
                construct,
                line: self.opened_at,
            }),
            lines: self.line,
        }
    }

    /// Scans every line of `lines` and returns the full result.
    pub fn scan<I, S>(lines: I) -> Uncommented
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanner = Self::new();
        for line in lines {
            scanner.feed_line(line.as_ref());
        }
        scanner.finish()
    }

    /// Scans every line of `lines` and returns the comment-free text.
    pub fn run<I, S>(lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::scan(lines).text
    }
}

/// Strips comments from a whole text buffer.
///
/// ```
/// assert_eq!(uncomment_lex::uncomment("Foo/**/Bar"), "FooBar\r\n");
/// ```
pub fn uncomment(source: &str) -> String {
    Scanner::run(SourceLines::new(source))
}

/// Strips comments from a whole text buffer, keeping end-of-input diagnostics.
pub fn uncomment_with_report(source: &str) -> Uncommented {
    Scanner::scan(SourceLines::new(source))
}
