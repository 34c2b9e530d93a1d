//! Error types for the delink library.
//!
//! This module provides the error hierarchy for link validation and
//! reversal, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a delink error.
///
/// # Examples
///
/// ```
/// use delink::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the delink library.
///
/// Every failure mode of validation, chain resolution, and the final
/// rename maps to exactly one variant. Errors propagate immediately;
/// nothing is retried or silently swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable path was provided.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason the input is unusable.
        reason: String,
    },

    /// The path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The path is a directory and not eligible for reversal.
    ///
    /// Raised both for directory entries and for symlinks whose target
    /// is a directory.
    #[error("path is a directory: {}", path.display())]
    IsDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The path exists but is a regular file or other non-symlink entry.
    #[error("not a symbolic link: {}", path.display())]
    NotASymlink {
        /// The path that is not a symlink.
        path: PathBuf,
    },

    /// The symlink chain ends at an entry that does not exist.
    #[error("unresolvable link {}: target {} does not exist", path.display(), target.display())]
    UnresolvableLink {
        /// The link that was being resolved.
        path: PathBuf,
        /// The dangling target at the end of the chain.
        target: PathBuf,
    },

    /// A symlink cycle was detected, or the chain exceeded the hop budget.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the cycle was detected.
        path: PathBuf,
    },

    /// The atomic substitution of the link by its target failed.
    ///
    /// No rollback is attempted; the resulting filesystem state is
    /// whatever the operating system's rename guarantees leave behind.
    #[error("rename of {} to {} failed: {source}", from.display(), to.display())]
    RenameFailed {
        /// The resolved file that was being moved.
        from: PathBuf,
        /// The link path it was being moved onto.
        to: PathBuf,
        /// The underlying rename error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error indicates a path that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use delink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if the error indicates a non-symlink entry.
    #[must_use]
    pub fn is_not_a_symlink(&self) -> bool {
        matches!(self, Self::NotASymlink { .. })
    }

    /// Check if the error indicates a broken chain or a cycle.
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::UnresolvableLink { .. } | Self::SymlinkLoop { .. })
    }
}
