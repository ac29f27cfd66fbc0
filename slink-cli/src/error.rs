//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use slink::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error while writing output.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Link operation failed (missing, already exists, wrong file type)
    /// - 2: Permission denied
    /// - 3: Home or working directory could not be determined
    /// - 4: Invalid arguments
    /// - 5: Other I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::PermissionDenied { .. } => 2,
                LibError::HomeDirectoryUnresolvable
                | LibError::WorkingDirectoryUnresolvable { .. } => 3,
                LibError::Io { .. } => 5,
                _ => 1,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let path = PathBuf::from("/tmp/x");
        let cases = [
            (LibError::NotFound { path: path.clone() }, 1),
            (LibError::AlreadyExists { path: path.clone() }, 1),
            (LibError::NotADirectory { path: path.clone() }, 1),
            (LibError::NotASymlink { path: path.clone() }, 1),
            (LibError::PermissionDenied { path: path.clone() }, 2),
            (LibError::HomeDirectoryUnresolvable, 3),
            (
                LibError::WorkingDirectoryUnresolvable {
                    reason: "gone".to_string(),
                },
                3,
            ),
            (
                LibError::Io {
                    path,
                    source: io::Error::other("disk on fire"),
                },
                5,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(CliError::from(err).exit_code(), code);
        }

        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::Io(io::Error::other("x")).exit_code(), 5);
    }

    #[test]
    fn test_library_message_passes_through() {
        let err = CliError::from(LibError::NotFound {
            path: PathBuf::from("/tmp/missing"),
        });
        assert_eq!(
            err.to_string(),
            LibError::NotFound {
                path: PathBuf::from("/tmp/missing")
            }
            .to_string()
        );
    }
}
