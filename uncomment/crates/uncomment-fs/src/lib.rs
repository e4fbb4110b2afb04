//! uncomment-fs - Tree Walking and File Rewriting
//!
//! Finds source files under a directory and rewrites each one in place with
//! its comments stripped by [`uncomment_lex`].
//!
//! # Module Structure
//!
//! - [`walker`] - Recursive traversal with a file predicate and a file action
//! - [`file`] - Read, uncomment, and overwrite a single file
//! - [`error`] - Error type shared by both

pub mod error;
pub mod file;
pub mod walker;

pub use error::{Result, WalkError};
pub use file::{uncomment_file, FileReport};
pub use walker::{collect_files, collect_readable_files, has_extension, recurse, DirectoryWalker};
