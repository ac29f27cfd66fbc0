//! Path resolution against a captured [`PathContext`].
//!
//! This module provides the `PathResolver` type, which is the main interface
//! command handlers use to turn raw arguments into normalized paths.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::path::context::PathContext;
use crate::path::normalize;
use crate::path::types::NormalizeMode;

/// Normalizes path arguments with a fixed home and working directory.
///
/// # Examples
///
/// ```
/// use slink::path::{NormalizeMode, PathContext, PathResolver};
/// use std::path::{Path, PathBuf};
///
/// let resolver = PathResolver::new(PathContext::new(
///     Some(PathBuf::from("/home/user")),
///     Some(PathBuf::from("/work")),
/// ));
///
/// let link = resolver.resolve_absolute(Path::new("links/./current")).unwrap();
/// assert_eq!(link, Path::new("/work/links/current"));
///
/// let target = resolver.resolve(Path::new("../releases/v2"), NormalizeMode::Relative).unwrap();
/// assert_eq!(target, Path::new("../releases/v2"));
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    context: PathContext,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(PathContext::from_env())
    }
}

impl PathResolver {
    /// Create a resolver for the given context.
    #[must_use]
    pub fn new(context: PathContext) -> Self {
        Self { context }
    }

    /// The context paths are resolved against.
    #[must_use]
    pub fn context(&self) -> &PathContext {
        &self.context
    }

    /// Normalize `path` in the requested mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or working directory is needed but unknown.
    pub fn resolve(&self, path: &Path, mode: NormalizeMode) -> Result<PathBuf> {
        let resolved = normalize::normalize(path, mode, &self.context)?;
        log::debug!(
            "resolved {} -> {} ({mode:?})",
            path.display(),
            resolved.display()
        );
        Ok(resolved)
    }

    /// Normalize `path` to an absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or working directory is needed but unknown.
    pub fn resolve_absolute(&self, path: &Path) -> Result<PathBuf> {
        self.resolve(path, NormalizeMode::Absolute)
    }

    /// Resolve an optional directory argument, defaulting to the working directory.
    ///
    /// # Errors
    ///
    /// Returns `WorkingDirectoryUnresolvable` if `path` is `None` and the
    /// working directory is unknown, or any error from [`Self::resolve_absolute`].
    pub fn resolve_dir_or_cwd(&self, path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => self.resolve_absolute(p),
            None => Ok(self.context.cwd()?.to_path_buf()),
        }
    }
}
