//! FileSystem trait for abstracting destination I/O.
//!
//! Defined in grove-skills-core so the installer, syncer and distributor can
//! write skills without depending on any specific filesystem implementation.
//! The `LocalFileSystem` adapter lives in grove-skills-infra.

use std::io;
use std::path::Path;

/// Abstraction over the destination filesystem.
///
/// The presence of a directory is the only record of an installed skill;
/// nothing else tracks installation state.
pub trait FileSystem {
    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write bytes to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Names of the immediate subdirectories of `path`.
    ///
    /// Fails with `ErrorKind::NotFound` if `path` does not exist.
    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>>;
}
