//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding a leading tilde (~) to the home directory
//! - Collapsing redundant separators and resolving `.` and `..` lexically
//! - Optionally anchoring relative paths at the working directory
//!
//! Nothing here touches the filesystem; the paths need not exist.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::path::context::PathContext;
use crate::path::types::NormalizeMode;

const HOME_MARKER: &str = "~";

/// Expand a leading tilde (~) to the given home directory.
///
/// Only `~` and `~/path` are expanded. `~user/path`, and a `~` anywhere but
/// the first component, are left untouched.
///
/// # Errors
///
/// Returns `HomeDirectoryUnresolvable` if the path starts with `~` and the
/// context has no home directory.
///
/// # Examples
///
/// ```
/// use slink::path::{normalize::expand_home, PathContext};
/// use std::path::{Path, PathBuf};
///
/// let context = PathContext::new(Some(PathBuf::from("/home/user")), None);
///
/// let expanded = expand_home(Path::new("~/project"), &context).unwrap();
/// assert_eq!(expanded, Path::new("/home/user/project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_home(Path::new("/srv/~backup"), &context).unwrap();
/// assert_eq!(expanded, Path::new("/srv/~backup"));
/// ```
pub fn expand_home(path: &Path, context: &PathContext) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == OsStr::new(HOME_MARKER) => {
            let home = context.home()?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home.to_path_buf())
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Lexically clean a path.
///
/// - Repeated separators and trailing separators are dropped
/// - `.` components are removed
/// - `..` removes the preceding normal component; directly under the root
///   it is dropped, and leading `..` of a relative path are kept
/// - An empty result becomes `.`
/// - A leading component literally named `~` is kept behind `./` so the
///   result is never read back as a home-directory marker
///
/// # Examples
///
/// ```
/// use slink::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("a//b/")), PathBuf::from("a/b"));
/// assert_eq!(clean(Path::new("../../x")), PathBuf::from("../../x"));
/// assert_eq!(clean(Path::new("/..")), PathBuf::from("/"));
/// assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }

    if matches!(out.first(), Some(Component::Normal(first)) if *first == OsStr::new(HOME_MARKER)) {
        out.insert(0, Component::CurDir);
    }

    out.into_iter().collect()
}

/// Normalize a user-supplied path.
///
/// This is the main normalization function:
/// 1. Expands a leading tilde (~)
/// 2. Cleans the path lexically
/// 3. In [`NormalizeMode::Absolute`], anchors a relative result at the working directory
///
/// The function is idempotent: normalizing its output again yields the same path.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion needs a home directory the context does not have
/// - Absolute mode needs a working directory the context does not have
///
/// # Examples
///
/// ```
/// use slink::path::{normalize::normalize, NormalizeMode, PathContext};
/// use std::path::{Path, PathBuf};
///
/// let context = PathContext::new(
///     Some(PathBuf::from("/home/user")),
///     Some(PathBuf::from("/work")),
/// );
///
/// let absolute = normalize(Path::new("./src/../docs"), NormalizeMode::Absolute, &context).unwrap();
/// assert_eq!(absolute, Path::new("/work/docs"));
///
/// let relative = normalize(Path::new("./src/../docs"), NormalizeMode::Relative, &context).unwrap();
/// assert_eq!(relative, Path::new("docs"));
///
/// let home = normalize(Path::new("~//notes/"), NormalizeMode::Relative, &context).unwrap();
/// assert_eq!(home, Path::new("/home/user/notes"));
/// ```
pub fn normalize(path: &Path, mode: NormalizeMode, context: &PathContext) -> Result<PathBuf> {
    let expanded = expand_home(path, context)?;
    let cleaned = clean(&expanded);

    if mode == NormalizeMode::Relative || cleaned.is_absolute() {
        return Ok(cleaned);
    }

    let cwd = context.cwd()?;
    Ok(clean(&cwd.join(cleaned)))
}
