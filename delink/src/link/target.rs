//! Core types for candidate link paths.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Snapshot of a candidate path's filesystem state.
///
/// The snapshot is taken with both a following stat (`fs::metadata`)
/// and a non-following stat (`fs::symlink_metadata`), so a symlink that
/// points at a directory reports `is_directory` even though the link
/// entry itself is not one. The final resolved target is NOT computed
/// here; resolution happens lazily during reversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    path: PathBuf,
    exists: bool,
    is_directory: bool,
    is_symlink: bool,
}

impl LinkTarget {
    /// Inspect `path` and build a snapshot of its current state.
    ///
    /// A path counts as existing only when both stat calls succeed. In
    /// particular a dangling symlink does not exist from the snapshot's
    /// perspective, because the following stat fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for stat failures other than "not found"
    /// (permission problems, symlink loops hit by the following stat).
    pub fn inspect(path: &Path) -> Result<Self> {
        let followed = match fs::metadata(path) {
            Ok(meta) => Some(meta),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(Error::Io(e)),
        };
        let unfollowed = match fs::symlink_metadata(path) {
            Ok(meta) => Some(meta),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(Error::Io(e)),
        };

        let (exists, is_directory, is_symlink) = match (&followed, &unfollowed) {
            (Some(f), Some(u)) => (
                true,
                f.is_dir() || u.is_dir(),
                u.file_type().is_symlink(),
            ),
            _ => (false, false, false),
        };

        Ok(Self {
            path: path.to_path_buf(),
            exists,
            is_directory,
            is_symlink,
        })
    }

    /// The inspected path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether both stat calls found an entry at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether the path or its target is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Whether the path entry itself is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

/// A path that has passed validation: it exists, is not a directory,
/// and is a symbolic link.
///
/// Instances can only be produced by [`validate`](crate::link::validate),
/// so reversal never has to re-check eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedPath {
    path: PathBuf,
}

impl ValidatedPath {
    /// Wrap a path that the validator has accepted.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for ValidatedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
