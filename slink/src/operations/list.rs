//! Symbolic link enumeration.
//!
//! Scans exactly one directory level. Subdirectories are skipped, never
//! descended into.

use std::fs;
use std::path::Path;

use crate::entry::LinkEntry;
use crate::error::{Error, Result};

/// Options for [`list_links`].
///
/// # Examples
///
/// ```
/// use slink::ListOptions;
///
/// let options = ListOptions::new().with_sorted(true).with_dangling_only(false);
/// assert!(options.sorted);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort entries by name. Otherwise the directory's own order is kept.
    pub sorted: bool,
    /// Only keep links whose target does not exist.
    pub dangling_only: bool,
}

impl ListOptions {
    /// Create options with the defaults: unsorted, every link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether entries are sorted by name.
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Set whether only dangling links are returned.
    #[must_use]
    pub fn with_dangling_only(mut self, dangling_only: bool) -> Self {
        self.dangling_only = dangling_only;
        self
    }
}

/// List the symbolic links directly inside `dir`.
///
/// Every returned entry's location is `dir` joined with the link's name,
/// and its target is the raw target read from the link.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` cannot be opened (`NotFound`, `NotADirectory`, `PermissionDenied`)
/// - Reading the directory stream or an entry's type fails
/// - Reading any link's target fails; no partial result is returned
///
/// # Examples
///
/// ```no_run
/// use slink::{list_links, ListOptions};
/// use std::path::Path;
///
/// for link in list_links(Path::new("/usr/bin"), &ListOptions::new()).unwrap() {
///     println!("{link}");
/// }
/// ```
pub fn list_links(dir: &Path, options: &ListOptions) -> Result<Vec<LinkEntry>> {
    log::debug!("scanning {} for symbolic links", dir.display());

    let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;
    let mut links = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(dir, e))?;
        let location = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| Error::from_io(&location, e))?;

        if file_type.is_dir() {
            log::debug!("skipping directory {}", location.display());
            continue;
        }
        if !file_type.is_symlink() {
            continue;
        }

        let target = fs::read_link(&location).map_err(|e| Error::from_io(&location, e))?;
        let link = LinkEntry::new(location, target);

        if options.dangling_only && !link.is_dangling() {
            continue;
        }
        links.push(link);
    }

    if options.sorted {
        links.sort_by(|a, b| a.location().cmp(b.location()));
    }

    log::debug!("found {} symbolic link(s) in {}", links.len(), dir.display());
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_builder() {
        let options = ListOptions::new();
        assert!(!options.sorted);
        assert!(!options.dangling_only);

        let options = options.with_sorted(true).with_dangling_only(true);
        assert!(options.sorted);
        assert!(options.dangling_only);
    }

    #[test]
    fn test_list_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let links = list_links(dir.path(), &ListOptions::new()).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = list_links(&missing, &ListOptions::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    #[cfg(unix)]
    fn test_list_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "data").unwrap();

        let err = list_links(&file, &ListOptions::new()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }), "{err:?}");
    }

    #[test]
    #[cfg(unix)]
    fn test_list_sorted_by_name() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        for name in ["charlie", "alpha", "bravo"] {
            symlink("/nowhere", dir.path().join(name)).unwrap();
        }

        let links = list_links(dir.path(), &ListOptions::new().with_sorted(true)).unwrap();
        let names: Vec<_> = links.iter().map(|l| l.name().into_owned()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_list_dangling_only() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        fs::write(&real, "x").unwrap();
        symlink(&real, dir.path().join("good")).unwrap();
        symlink(dir.path().join("gone.txt"), dir.path().join("broken")).unwrap();

        let links = list_links(dir.path(), &ListOptions::new().with_dangling_only(true)).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name(), "broken");
    }
}
