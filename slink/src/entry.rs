//! The symbolic link entry type.
//!
//! A [`LinkEntry`] is a read-only snapshot of one symbolic link: where it
//! lives and what it points to. Entries are produced by the link
//! operations and discarded after they are reported.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::path::normalize::clean;

/// A discovered or newly created symbolic link.
///
/// # Examples
///
/// ```
/// use slink::LinkEntry;
/// use std::path::{Path, PathBuf};
///
/// let entry = LinkEntry::new(PathBuf::from("/srv/app/current"), PathBuf::from("releases/v2"));
/// assert_eq!(entry.name(), "current");
/// assert_eq!(entry.target(), Path::new("releases/v2"));
/// assert_eq!(entry.resolved_target(), Path::new("/srv/app/releases/v2"));
/// assert_eq!(entry.to_string(), "current -> releases/v2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkEntry {
    location: PathBuf,
    target: PathBuf,
}

impl LinkEntry {
    /// Create an entry for the link at `location` whose recorded target is `target`.
    #[must_use]
    pub fn new(location: PathBuf, target: PathBuf) -> Self {
        Self { location, target }
    }

    /// The link's file name (last component of [`Self::location`]).
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        self.location
            .file_name()
            .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
    }

    /// Full path of the link itself.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// The target exactly as recorded in the link, possibly relative to the link's directory.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The target joined onto the link's directory and lexically cleaned.
    ///
    /// Absolute targets are only cleaned.
    #[must_use]
    pub fn resolved_target(&self) -> PathBuf {
        match self.location.parent() {
            Some(parent) => clean(&parent.join(&self.target)),
            None => clean(&self.target),
        }
    }

    /// Whether nothing currently exists where the link points.
    ///
    /// Follows the link through the filesystem at call time. Errors other
    /// than "not found" (a permission problem, a link cycle) do not count as
    /// dangling.
    #[must_use]
    pub fn is_dangling(&self) -> bool {
        matches!(self.location.try_exists(), Ok(false))
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name(), self.target.display())
    }
}

impl Serialize for LinkEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LinkEntry", 3)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("location", &self.location.to_string_lossy())?;
        state.serialize_field("target", &self.target.to_string_lossy())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_component() {
        let entry = LinkEntry::new(PathBuf::from("/a/b/link"), PathBuf::from("/etc/hosts"));
        assert_eq!(entry.name(), "link");
        assert_eq!(
            entry.location().file_name().unwrap().to_string_lossy(),
            entry.name()
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolved_target_absolute() {
        let entry = LinkEntry::new(PathBuf::from("/a/b/link"), PathBuf::from("/etc//hosts"));
        assert_eq!(entry.resolved_target(), PathBuf::from("/etc/hosts"));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolved_target_relative() {
        let entry = LinkEntry::new(PathBuf::from("/a/b/link"), PathBuf::from("../c/./d"));
        assert_eq!(entry.resolved_target(), PathBuf::from("/a/c/d"));
    }

    #[test]
    fn test_display() {
        let entry = LinkEntry::new(PathBuf::from("dir/vimrc"), PathBuf::from("dotfiles/vimrc"));
        assert_eq!(entry.to_string(), "vimrc -> dotfiles/vimrc");
    }

    #[test]
    fn test_serialize() {
        let entry = LinkEntry::new(PathBuf::from("dir/link"), PathBuf::from("target"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "link");
        assert_eq!(json["location"], "dir/link");
        assert_eq!(json["target"], "target");
    }

    #[test]
    fn test_is_dangling_for_missing_link() {
        let dir = tempfile::tempdir().unwrap();
        let entry = LinkEntry::new(dir.path().join("nothing-here"), PathBuf::from("nowhere"));
        assert!(entry.is_dangling());
    }
}
