//! Error handling module for the uncomment CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use uncomment_fs::WalkError;

/// Main error type for the uncomment CLI application.
#[derive(Error, Debug)]
pub enum UncommentError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when walking the tree or rewriting a file fails.
    #[error("File operation failed: {0}")]
    Walk(#[from] WalkError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using UncommentError.
pub type Result<T> = std::result::Result<T, UncommentError>;
