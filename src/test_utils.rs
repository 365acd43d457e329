//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    _dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    /// Create a temporary directory whose final component is `name`.
    ///
    /// Useful when a test asserts on the root label.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create named dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file containing exactly `bytes` bytes.
    pub fn add_sized_file(&self, path: &str, bytes: usize) -> PathBuf {
        self.add_file(path, &"x".repeat(bytes))
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
