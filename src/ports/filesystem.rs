//! Filesystem port for the probes the repository facade needs.

use std::path::Path;

/// Directory checks and creation around a repository root: the control
/// directory probe and the target directory of `init`.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all of its missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;
}
