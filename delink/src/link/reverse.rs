//! In-place reversal of a validated symlink.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::link::resolve::resolve_chain;
use crate::link::target::ValidatedPath;

/// Replace a validated symlink with the file it ultimately points to.
///
/// The chain is resolved lazily here, then the real file is renamed
/// over the link path. The rename is a single atomic operation provided
/// by the operating system: other processes see either the old symlink
/// or the real file, never an intermediate state. Afterwards the link
/// path owns the file's content and the old target entry is gone.
///
/// Returns the resolved path that now lives at the link location.
///
/// Running the operation twice on the same path fails on the second
/// attempt, because the path is no longer a symlink and will not pass
/// [`validate`](crate::link::validate) again.
///
/// # Errors
///
/// Returns [`Error::UnresolvableLink`] or [`Error::SymlinkLoop`] when
/// resolution fails; in that case nothing has been mutated and the
/// symlink remains in place. Returns [`Error::RenameFailed`] when the
/// substitution itself fails (cross-device link, permission denied);
/// no rollback is attempted beyond the operating system's own
/// rename-failure guarantees. All operations are single-attempt.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use delink::link::{reverse, validate};
///
/// let link = validate(Path::new("random.json"))?;
/// let resolved = reverse(&link)?;
/// println!("now a real file, was {}", resolved.display());
/// # Ok::<(), delink::Error>(())
/// ```
pub fn reverse(link: &ValidatedPath) -> Result<PathBuf> {
    let resolved = resolve_chain(link.as_path())?;

    log::debug!("renaming {} over {link}", resolved.display());
    fs::rename(&resolved, link.as_path()).map_err(|source| Error::RenameFailed {
        from: resolved.clone(),
        to: link.as_path().to_path_buf(),
        source,
    })?;

    Ok(resolved)
}
