//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working and home directory
//! - Command builder helpers
//! - Fixture helpers for files, directories and links

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// The binary runs with the temporary directory as its working directory
/// and `<temp>/home` as `$HOME`, so `~` paths never touch the real home.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path used as the home directory
    pub home_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home_dir = temp_path.join("home");
        fs::create_dir(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Get a command builder for the slink binary running inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("slink").expect("Failed to find slink binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.home_dir)
            .env_remove("NO_COLOR")
            .env_remove("SLINK_LOG_MODE")
            .env_remove("SLINK_OUTPUT_FORMAT");
        cmd
    }

    /// Absolute path of `name` inside the environment.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Create a regular file (and its parent directories).
    pub fn write_file(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, "content").expect("Failed to write file");
        path
    }

    /// Create a directory (and its parents).
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Create a symbolic link `name` whose recorded target is `target`.
    #[cfg(unix)]
    pub fn link(&self, name: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::os::unix::fs::symlink(target, &path).expect("Failed to create link");
        path
    }

    /// Whether a symbolic link exists at `name` (dangling links count).
    pub fn is_link(&self, name: &str) -> bool {
        fs::symlink_metadata(self.path(name)).is_ok_and(|m| m.file_type().is_symlink())
    }
}

/// Parse stdout of a finished command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
