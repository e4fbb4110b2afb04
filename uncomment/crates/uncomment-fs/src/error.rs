//! Error types for directory traversal and file rewriting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for walking a directory tree and rewriting files.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The traversal root does not name an existing directory.
    #[error("Directory {} does not exist.", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be read, or was not valid UTF-8.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be written back.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Returns the path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            WalkError::DirectoryNotFound { path }
            | WalkError::ReadDir { path, .. }
            | WalkError::ReadFile { path, .. }
            | WalkError::WriteFile { path, .. } => path,
        }
    }
}

/// Result type alias using WalkError.
pub type Result<T> = std::result::Result<T, WalkError>;
