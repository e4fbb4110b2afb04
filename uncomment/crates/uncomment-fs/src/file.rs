//! In-place file uncommenting.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uncomment_lex::{uncomment_with_report, Unterminated};

use crate::error::{Result, WalkError};

/// Outcome of uncommenting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file that was rewritten.
    pub path: PathBuf,
    /// Construct left open at end of file, if any.
    pub unterminated: Option<Unterminated>,
    /// Number of lines read.
    pub lines: usize,
    /// Size of the file before rewriting, in bytes.
    pub bytes_before: usize,
    /// Size of the file after rewriting, in bytes.
    pub bytes_after: usize,
}

/// Strips comments from the file at `path`, overwriting it.
///
/// The whole file is read and scanned before anything is written, so the
/// rewrite never reads back its own output. The file must be UTF-8.
pub fn uncomment_file(path: &Path) -> Result<FileReport> {
    let source = fs::read_to_string(path).map_err(|source| WalkError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let result = uncomment_with_report(&source);

    fs::write(path, &result.text).map_err(|source| WalkError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        lines = result.lines,
        bytes_before = source.len(),
        bytes_after = result.text.len(),
        "uncommented file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        unterminated: result.unterminated,
        lines: result.lines,
        bytes_before: source.len(),
        bytes_after: result.text.len(),
    })
}
