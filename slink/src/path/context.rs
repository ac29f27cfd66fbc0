//! Process-wide path context.
//!
//! The home directory and working directory are resolved once, when the
//! process starts, and passed explicitly to everything that needs them.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Home and working directory captured at startup.
///
/// Either may be unknown; the corresponding error is only raised when a
/// path actually needs it (a `~` prefix, or a relative path in absolute mode).
///
/// # Examples
///
/// ```
/// use slink::path::PathContext;
/// use std::path::{Path, PathBuf};
///
/// let context = PathContext::new(Some(PathBuf::from("/home/user")), Some(PathBuf::from("/work")));
/// assert_eq!(context.home().unwrap(), Path::new("/home/user"));
/// assert_eq!(context.cwd().unwrap(), Path::new("/work"));
///
/// let empty = PathContext::new(None, None);
/// assert!(empty.home().is_err());
/// assert!(empty.cwd().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    home: Option<PathBuf>,
    cwd: std::result::Result<PathBuf, String>,
}

impl PathContext {
    /// Build a context from explicit values.
    #[must_use]
    pub fn new(home: Option<PathBuf>, cwd: Option<PathBuf>) -> Self {
        Self {
            home,
            cwd: cwd.ok_or_else(|| "working directory not provided".to_string()),
        }
    }

    /// Capture the current user's home directory and the process working directory.
    #[must_use]
    pub fn from_env() -> Self {
        let home = home::home_dir();
        let cwd = env::current_dir().map_err(|e| e.to_string());
        if let Err(reason) = &cwd {
            log::debug!("working directory unavailable: {reason}");
        }
        Self { home, cwd }
    }

    /// The home directory.
    ///
    /// # Errors
    ///
    /// Returns `HomeDirectoryUnresolvable` if it could not be determined.
    pub fn home(&self) -> Result<&Path> {
        self.home.as_deref().ok_or(Error::HomeDirectoryUnresolvable)
    }

    /// The working directory.
    ///
    /// # Errors
    ///
    /// Returns `WorkingDirectoryUnresolvable` if it could not be determined.
    pub fn cwd(&self) -> Result<&Path> {
        self.cwd
            .as_deref()
            .map_err(|reason| Error::WorkingDirectoryUnresolvable {
                reason: reason.clone(),
            })
    }
}

impl Default for PathContext {
    fn default() -> Self {
        Self::from_env()
    }
}
