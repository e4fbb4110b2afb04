//! Shared messages for uncomment commands.

use crate::config::DEFAULT_EXTENSION;

/// Error message constants.
pub mod error_messages {
    /// Prefix for the failure summary; followed by the failed file count.
    pub const FILES_FAILED: &str = "Files failed to uncomment:";
    /// Worker pool could not be started.
    pub const POOL_FAILED: &str = "Failed to start worker pool:";
}

/// Output message constants.
pub mod output_messages {
    /// Printed before each rewritten file.
    pub const UNCOMMENTED: &str = "Uncommented:";
    /// Printed before a file that could not be rewritten.
    pub const ERROR: &str = "Error:";
    /// Printed before the elapsed seconds in the verbose summary.
    pub const COMPLETED: &str = "completed in";
    /// Printed before the collected warnings at the end of a run.
    pub const WARNINGS: &str = "Warnings:";
}

/// Builds the two-line usage message for the given extension.
pub fn usage(extension: Option<&str>) -> String {
    let extension = extension
        .map(|ext| ext.trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);
    format!(
        "This program recursively uncomments *.{} files found in the specified path.\n\
         Correct usage: uncomment <path>",
        extension
    )
}
