//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder that lays out a temporary
//! directory containing regular files, subdirectories and symbolic links.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A populated temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct LinkDir {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the populated directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl LinkDir {
    /// Path of an entry inside the directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }
}

/// Builder for creating test directories with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::LinkDirFixture;
/// let dir = LinkDirFixture::new()
///     .with_link("hosts", "/etc/hosts")
///     .with_file("notes.txt")
///     .build();
/// ```
#[derive(Default)]
pub struct LinkDirFixture {
    files: Vec<String>,
    dirs: Vec<String>,
    links: Vec<(String, PathBuf)>,
}

#[allow(dead_code)]
impl LinkDirFixture {
    /// Start with an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file. Parent directories are created as needed.
    pub fn with_file(mut self, name: &str) -> Self {
        self.files.push(name.to_string());
        self
    }

    /// Add a directory (and any missing parents).
    pub fn with_dir(mut self, name: &str) -> Self {
        self.dirs.push(name.to_string());
        self
    }

    /// Add a symbolic link `name -> target`. The target is stored verbatim.
    pub fn with_link(mut self, name: &str, target: impl Into<PathBuf>) -> Self {
        self.links.push((name.to_string(), target.into()));
        self
    }

    /// Create everything on disk.
    ///
    /// # Panics
    /// Panics if any filesystem operation fails.
    pub fn build(self) -> LinkDir {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().to_path_buf();

        for dir in &self.dirs {
            fs::create_dir_all(path.join(dir)).expect("Failed to create directory");
        }
        for file in &self.files {
            let file_path = path.join(file);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            fs::write(&file_path, file.as_bytes()).expect("Failed to write file");
        }
        for (name, target) in &self.links {
            let link_path = path.join(name);
            if let Some(parent) = link_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            symlink(target, &link_path).expect("Failed to create symlink");
        }

        LinkDir { temp_dir, path }
    }
}
