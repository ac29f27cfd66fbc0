//! Error types for the slink library.
//!
//! Every filesystem failure is funnelled through [`Error::from_io`], which
//! maps the `std::io::ErrorKind` onto one of the named variants so callers
//! can react to the failure kind without inspecting raw I/O errors.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a slink error.
///
/// # Examples
///
/// ```
/// use slink::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the slink library.
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing exists at the given path.
    #[error("no such file or directory: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The path where a link should be created is already occupied.
    #[error("file already exists: {}", path.display())]
    AlreadyExists {
        /// The occupied path.
        path: PathBuf,
    },

    /// The path was expected to be a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The path exists but is not a symbolic link.
    #[error("not a symbolic link: {}", path.display())]
    NotASymlink {
        /// The offending path.
        path: PathBuf,
    },

    /// A `~` was used but the current user's home directory is unknown.
    #[error("cannot determine the home directory of the current user")]
    HomeDirectoryUnresolvable,

    /// A relative path had to be made absolute but the working directory is unknown.
    #[error("cannot determine the current working directory: {reason}")]
    WorkingDirectoryUnresolvable {
        /// Why the working directory could not be determined.
        reason: String,
    },

    /// Any other I/O error.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being operated on.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Map an I/O error raised while operating on `path` to a slink error.
    ///
    /// # Examples
    ///
    /// ```
    /// use slink::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::Error::from(ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Check if error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error indicates the destination was already occupied.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Check if error indicates the wrong kind of filesystem entry.
    #[must_use]
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::NotASymlink { .. })
    }

    /// Check if error comes from missing process context (home or working directory).
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(
            self,
            Self::HomeDirectoryUnresolvable | Self::WorkingDirectoryUnresolvable { .. }
        )
    }
}
