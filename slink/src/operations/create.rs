//! Symbolic link creation.

use std::io;
use std::path::Path;

use crate::entry::LinkEntry;
use crate::error::{Error, Result};

/// Create a symbolic link at `link` pointing at `target`.
///
/// `target` is stored as given: a relative target is interpreted by the
/// filesystem relative to the directory containing `link`. The target does
/// not have to exist.
///
/// The link is created with a single filesystem call, so a failure leaves
/// the filesystem unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - Something already exists at `link`, even a dangling link (`AlreadyExists`)
/// - The directory that should contain `link` is missing (`NotFound`)
/// - Permission is denied (`PermissionDenied`)
///
/// # Examples
///
/// ```no_run
/// use slink::create_link;
/// use std::path::Path;
///
/// let entry = create_link(Path::new("/etc/hosts"), Path::new("/tmp/hosts")).unwrap();
/// assert_eq!(entry.to_string(), "hosts -> /etc/hosts");
/// ```
pub fn create_link(target: &Path, link: &Path) -> Result<LinkEntry> {
    symlink(target, link).map_err(|e| Error::from_io(link, e))?;
    log::debug!(
        "created symbolic link {} -> {}",
        link.display(),
        target.display()
    );
    Ok(LinkEntry::new(link.to_path_buf(), target.to_path_buf()))
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    let resolved = match link.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}
