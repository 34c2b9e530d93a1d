//! Validation of candidate link paths.

use std::path::Path;

use crate::error::{Error, Result};
use crate::link::target::{LinkTarget, ValidatedPath};

/// Validate that `path` names an existing, non-directory symbolic link.
///
/// Checks run in order and short-circuit on the first failure:
///
/// 1. the path must be non-empty,
/// 2. both a following and a non-following stat must find an entry,
/// 3. neither view may be a directory,
/// 4. the entry itself must be a symbolic link.
///
/// Validation is read-only; the filesystem is never touched beyond the
/// two stat calls.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty path,
/// [`Error::PathNotFound`] when the entry (or a dangling link's target)
/// is missing, [`Error::IsDirectory`] for directories and links to
/// directories, and [`Error::NotASymlink`] for any other non-link entry.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use delink::link::validate;
///
/// let validated = validate(Path::new("random.json"))?;
/// assert_eq!(validated.as_path(), Path::new("random.json"));
/// # Ok::<(), delink::Error>(())
/// ```
pub fn validate(path: &Path) -> Result<ValidatedPath> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidInput {
            reason: "path must not be empty".to_string(),
        });
    }

    let target = LinkTarget::inspect(path)?;

    if !target.exists() {
        return Err(Error::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    if target.is_directory() {
        return Err(Error::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    if !target.is_symlink() {
        return Err(Error::NotASymlink {
            path: path.to_path_buf(),
        });
    }

    Ok(ValidatedPath::new(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_empty_path() {
        let result = validate(Path::new(""));
        assert!(matches!(result.unwrap_err(), Error::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_missing_path() {
        let dir = tempdir().unwrap();
        let result = validate(&dir.path().join("missing"));
        assert!(matches!(result.unwrap_err(), Error::PathNotFound { .. }));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempdir().unwrap();
        let result = validate(dir.path());
        assert!(matches!(result.unwrap_err(), Error::IsDirectory { .. }));
    }

    #[test]
    fn test_validate_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "data").unwrap();

        let result = validate(&file);
        assert!(matches!(result.unwrap_err(), Error::NotASymlink { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_symlink_to_file() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let file = dir.path().join("real.txt");
        let link = dir.path().join("link");
        fs::write(&file, "data").unwrap();
        symlink(&file, &link).unwrap();

        let validated = validate(&link).unwrap();
        assert_eq!(validated.as_path(), link.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_symlink_to_directory() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        let link = dir.path().join("dirlink");
        fs::create_dir(&sub).unwrap();
        symlink(&sub, &link).unwrap();

        let result = validate(&link);
        assert!(matches!(result.unwrap_err(), Error::IsDirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        symlink(dir.path().join("gone"), &link).unwrap();

        let result = validate(&link);
        assert!(result.unwrap_err().is_not_found());
    }
}
