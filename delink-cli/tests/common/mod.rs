//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated temporary directory per test plus helpers for
//! laying out files and symlinks and for building `delink` commands
//! that run inside that directory.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment rooted in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running inside the test directory.
    ///
    /// Relative paths passed to the command resolve against the
    /// temporary directory, so tests can mirror real shell usage like
    /// `delink --file=random.json`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("delink").expect("Failed to find delink binary");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file under the test directory, creating parents as needed.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a symlink at `link` pointing at `target`.
    ///
    /// `target` is used verbatim, so relative link targets stay
    /// relative on disk.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.temp_path.join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Read a file under the test directory to a string.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// Whether the entry at `name` currently is a symlink.
    pub fn is_symlink(&self, name: &str) -> bool {
        fs::symlink_metadata(self.temp_path.join(name))
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// Whether any entry (file, dir, or dangling link) exists at `name`.
    pub fn entry_exists(&self, name: &str) -> bool {
        fs::symlink_metadata(self.temp_path.join(name)).is_ok()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
