//! Resolution of symlink chains to their final real entry.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Maximum number of link hops followed before giving up.
///
/// Matches the conventional kernel ceiling for nested symlinks.
pub const MAX_LINK_DEPTH: usize = 40;

/// Follow the entire chain of symlink indirection starting at `path`
/// and return the canonical path of the final non-symlink entry.
///
/// Relative link targets are resolved against the link's parent
/// directory. Each hop is recorded in a visited set so cycles fail
/// instead of spinning, and the walk is bounded by [`MAX_LINK_DEPTH`].
///
/// # Errors
///
/// Returns [`Error::UnresolvableLink`] when the chain ends at an entry
/// that does not exist, [`Error::SymlinkLoop`] on a cycle or when the
/// hop budget is exhausted, and [`Error::Io`] for any other filesystem
/// failure.
pub fn resolve_chain(path: &Path) -> Result<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = path.to_path_buf();
    let mut depth = 0;

    loop {
        if !visited.insert(current.clone()) {
            return Err(Error::SymlinkLoop { path: current });
        }
        if depth >= MAX_LINK_DEPTH {
            return Err(Error::SymlinkLoop {
                path: path.to_path_buf(),
            });
        }

        match fs::read_link(&current) {
            Ok(next) => {
                log::debug!("link hop: {} -> {}", current.display(), next.display());
                current = if next.is_absolute() {
                    next
                } else {
                    // Relative targets are interpreted from the link's directory.
                    current
                        .parent()
                        .ok_or_else(|| Error::InvalidInput {
                            reason: format!(
                                "symlink {} has no parent directory",
                                current.display()
                            ),
                        })?
                        .join(next)
                };
                depth += 1;
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                // Landed on a non-symlink entry; canonicalize so the
                // caller renames the real directory entry.
                return fs::canonicalize(&current).map_err(|e| match e.kind() {
                    ErrorKind::NotFound => Error::UnresolvableLink {
                        path: path.to_path_buf(),
                        target: current.clone(),
                    },
                    _ => Error::Io(e),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::UnresolvableLink {
                    path: path.to_path_buf(),
                    target: current,
                });
            }
            Err(e) => return Err(Error::Io(e)),
        }
    }
}
