//! Command trait and common types for the uncomment CLI.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that uncomment commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and the loaded
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    ///
    /// # Returns
    /// * `Result<Self::Output>` - The command output or an error
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Whether every item was handled.
    pub success: bool,

    /// Number of files uncommented.
    pub items_processed: usize,

    /// Number of files or directories that could not be handled.
    pub items_failed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Warning messages collected during execution.
    pub warnings: Vec<String>,
}

impl CommandResult {
    /// Create a new successful command result.
    pub fn success() -> Self {
        Self {
            success: true,
            items_processed: 0,
            items_failed: 0,
            execution_time_ms: 0,
            warnings: Vec::new(),
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed. Any failure marks the result unsuccessful.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self.success = count == 0;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, ms: u64) -> Self {
        self.execution_time_ms = ms;
        self
    }

    /// Add several warning messages.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}
