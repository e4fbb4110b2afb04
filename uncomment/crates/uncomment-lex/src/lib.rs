//! uncomment-lex - Comment Stripping Scanner
//!
//! This crate removes comments from C-family source text while leaving every
//! other character untouched, including string and character literals whose
//! contents merely look like comment syntax.
//!
//! # Overview
//!
//! Scanning is a single pass over a sequence of lines. A small state machine
//! classifies each character as literal content, comment, or escape-relevant,
//! and copies exactly the non-comment characters to the output. Every emitted
//! line ends with [`LINE_TERMINATOR`], whatever terminator the input used.
//!
//! # Example Usage
//!
//! ```
//! use uncomment_lex::{uncomment, Scanner, SourceLines};
//!
//! let source = "var s = \"// not a comment\"; // a comment\n/* gone */var t = 1;";
//! assert_eq!(
//!     uncomment(source),
//!     "var s = \"// not a comment\"; \r\nvar t = 1;\r\n"
//! );
//!
//! // Any sequence of lines works as input.
//! let text = Scanner::run(SourceLines::new("a /* b */ c"));
//! assert_eq!(text, "a  c\r\n");
//! ```
//!
//! # Module Structure
//!
//! - [`state`] - Lexical states and the per-character transition function
//! - [`scanner`] - Line assembly and end-of-input diagnostics
//! - [`lines`] - Line source over an in-memory buffer
//!
//! # Recognised Syntax
//!
//! - **Line comments**: `// ...` up to the end of the line
//! - **Block comments**: `/* ... */`, possibly across lines, not nested
//! - **Character literals**: `'...'` with `\` escapes
//! - **String literals**: `"..."` with `\` escapes
//! - **Verbatim strings**: `@"..."` where `\` is literal and `""` is an
//!   embedded quote; may span lines
//!
//! Quoted literals, a dangling `@` or `/`, and line comments never continue
//! onto the next line. Malformed input is tolerated, never rejected.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lines;
pub mod scanner;
pub mod state;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use lines::SourceLines;
pub use scanner::{
    uncomment, uncomment_with_report, Construct, Scanner, Uncommented, Unterminated,
    LINE_TERMINATOR,
};
pub use state::{Emit, State, Transition};
