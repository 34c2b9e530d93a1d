//! CLI-specific error types with exit codes.
//!
//! Wraps library errors and maps each failure class to a distinct
//! process exit code.

use std::fmt;

use delink::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Validation failure (not found, directory, not a symlink)
    /// - 2: Unresolvable link (broken chain or symlink loop)
    /// - 3: Rename failed (cross-device, permission denied)
    /// - 4: Invalid arguments
    /// - 5: Other I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::PathNotFound { .. }
                | LibError::IsDirectory { .. }
                | LibError::NotASymlink { .. } => 1,
                LibError::UnresolvableLink { .. } | LibError::SymlinkLoop { .. } => 2,
                LibError::RenameFailed { .. } => 3,
                LibError::InvalidInput { .. } => 4,
                LibError::Io(_) => 5,
            },
            CliError::InvalidArguments(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validation_errors_exit_code_one() {
        for err in [
            LibError::PathNotFound {
                path: PathBuf::from("x"),
            },
            LibError::IsDirectory {
                path: PathBuf::from("x"),
            },
            LibError::NotASymlink {
                path: PathBuf::from("x"),
            },
        ] {
            assert_eq!(CliError::from(err).exit_code(), 1);
        }
    }

    #[test]
    fn test_unresolvable_link_exit_code() {
        let err = LibError::UnresolvableLink {
            path: PathBuf::from("link"),
            target: PathBuf::from("gone"),
        };
        assert_eq!(CliError::from(err).exit_code(), 2);
    }

    #[test]
    fn test_rename_failed_exit_code() {
        let err = LibError::RenameFailed {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(CliError::from(err).exit_code(), 3);
    }

    #[test]
    fn test_invalid_arguments_exit_code() {
        let err = CliError::InvalidArguments("no path given".to_string());
        assert_eq!(err.exit_code(), 4);
        assert!(format!("{err}").contains("no path given"));
    }
}
