//! Recursive directory traversal.
//!
//! Files directly under a directory are offered to a predicate and the
//! matching ones handed to an action; then every subdirectory is walked the
//! same way. Entries are visited in sorted path order.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, WalkError};

/// Walks a directory tree, applying an action to every matching file.
///
/// The action's error type only needs to absorb [`WalkError`], so callers
/// can thread their own error type through the walk. An action error stops
/// the walk; an action that wants to keep going should handle the failure
/// itself and return `Ok(())`.
///
/// A subdirectory that cannot be listed stops the walk too, unless the
/// walker was built with [`skip_unreadable`]. It is then recorded and its
/// siblings are still walked.
///
/// [`skip_unreadable`]: DirectoryWalker::skip_unreadable
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use uncomment_fs::{has_extension, DirectoryWalker, WalkError};
///
/// let mut seen = Vec::new();
/// let mut walker = DirectoryWalker::new(has_extension("cs"), |file: &Path| {
///     seen.push(file.to_path_buf());
///     Ok::<(), WalkError>(())
/// });
/// walker.recurse(Path::new("src"))?;
/// # Ok::<(), WalkError>(())
/// ```
pub struct DirectoryWalker<P, A> {
    predicate: P,
    action: A,
    skip_unreadable: bool,
    skipped: Vec<WalkError>,
}

impl<P, A> DirectoryWalker<P, A> {
    /// Creates a walker from a file predicate and a file action.
    pub fn new(predicate: P, action: A) -> Self {
        Self {
            predicate,
            action,
            skip_unreadable: false,
            skipped: Vec::new(),
        }
    }

    /// Keeps walking past subdirectories that cannot be listed.
    pub fn skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Consumes the walker, returning the skipped-directory errors.
    pub fn into_skipped(self) -> Vec<WalkError> {
        self.skipped
    }

    /// Consumes the walker, returning the action.
    pub fn into_action(self) -> A {
        self.action
    }
}

impl<P, A> DirectoryWalker<P, A>
where
    P: FnMut(&Path) -> bool,
{
    /// Walks `directory`, invoking the action on every file accepted by the
    /// predicate.
    ///
    /// Fails with [`WalkError::DirectoryNotFound`] if `directory` does not
    /// name an existing directory, and with [`WalkError::ReadDir`] if it
    /// cannot be listed.
    pub fn recurse<E>(&mut self, directory: &Path) -> std::result::Result<(), E>
    where
        A: FnMut(&Path) -> std::result::Result<(), E>,
        E: From<WalkError>,
    {
        if !directory.is_dir() {
            return Err(WalkError::DirectoryNotFound {
                path: directory.to_path_buf(),
            }
            .into());
        }

        let listing = list_directory(directory)?;
        self.visit(directory, listing)
    }

    fn visit<E>(
        &mut self,
        directory: &Path,
        (files, subdirs): (Vec<PathBuf>, Vec<PathBuf>),
    ) -> std::result::Result<(), E>
    where
        A: FnMut(&Path) -> std::result::Result<(), E>,
        E: From<WalkError>,
    {
        trace!(
            directory = %directory.display(),
            files = files.len(),
            subdirs = subdirs.len(),
            "listed directory"
        );

        for file in &files {
            if (self.predicate)(file) {
                (self.action)(file)?;
            }
        }

        for subdir in &subdirs {
            match list_directory(subdir) {
                Ok(listing) => self.visit(subdir, listing)?,
                Err(err) if self.skip_unreadable => {
                    debug!(directory = %subdir.display(), error = %err, "skipping unreadable directory");
                    self.skipped.push(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

/// Splits the entries of `directory` into files and subdirectories.
///
/// Symlinks to files count as files. Symlinks to directories are skipped so
/// that a link cycle cannot make the walk endless.
fn list_directory(directory: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let read_dir_error = |source| WalkError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(directory).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;
        let path = entry.path();

        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }

    files.sort();
    subdirs.sort();
    Ok((files, subdirs))
}

/// Walks `root`, invoking `action` on every file accepted by `predicate`.
pub fn recurse<P, A, E>(root: &Path, predicate: P, action: A) -> std::result::Result<(), E>
where
    P: FnMut(&Path) -> bool,
    A: FnMut(&Path) -> std::result::Result<(), E>,
    E: From<WalkError>,
{
    DirectoryWalker::new(predicate, action).recurse(root)
}

/// Collects every file under `root` accepted by `predicate`, in visit order.
pub fn collect_files<P>(root: &Path, predicate: P) -> Result<Vec<PathBuf>>
where
    P: FnMut(&Path) -> bool,
{
    let mut files = Vec::new();
    recurse(root, predicate, |file: &Path| {
        files.push(file.to_path_buf());
        Ok::<(), WalkError>(())
    })?;
    Ok(files)
}

/// Collects every file under `root` accepted by `predicate`, stepping over
/// subdirectories that cannot be listed.
///
/// Returns the files in visit order together with one [`WalkError::ReadDir`]
/// per skipped subdirectory. The root itself must still be listable.
pub fn collect_readable_files<P>(root: &Path, predicate: P) -> Result<(Vec<PathBuf>, Vec<WalkError>)>
where
    P: FnMut(&Path) -> bool,
{
    let mut files = Vec::new();
    let mut walker = DirectoryWalker::new(predicate, |file: &Path| {
        files.push(file.to_path_buf());
        Ok::<(), WalkError>(())
    })
    .skip_unreadable(true);
    walker.recurse(root)?;
    let skipped = walker.into_skipped();
    Ok((files, skipped))
}

/// Returns a predicate matching files whose extension is exactly `extension`.
///
/// The comparison is case-sensitive. A leading `.` in `extension` is ignored,
/// so `"cs"` and `".cs"` are equivalent.
pub fn has_extension(extension: &str) -> impl Fn(&Path) -> bool {
    let extension = extension.trim_start_matches('.').to_owned();
    move |path: &Path| path.extension() == Some(OsStr::new(&extension))
}
