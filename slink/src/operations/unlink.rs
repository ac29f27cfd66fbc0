//! Symbolic link removal.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Remove the symbolic link at `path`.
///
/// The link itself is inspected without following it, so links whose
/// target is gone can still be removed. Only symbolic links are removed;
/// regular files and directories are refused.
///
/// # Errors
///
/// Returns an error if:
/// - Nothing exists at `path` (`NotFound`)
/// - The entry at `path` is not a symbolic link (`NotASymlink`)
/// - Permission is denied (`PermissionDenied`)
///
/// # Examples
///
/// ```no_run
/// use slink::unlink;
/// use std::path::Path;
///
/// unlink(Path::new("/tmp/hosts")).unwrap();
/// ```
pub fn unlink(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
    let file_type = metadata.file_type();

    if !file_type.is_symlink() {
        log::warn!("refusing to remove {}: not a symbolic link", path.display());
        return Err(Error::NotASymlink {
            path: path.to_path_buf(),
        });
    }

    remove_link(path, file_type).map_err(|e| Error::from_io(path, e))?;
    log::debug!("removed symbolic link {}", path.display());
    Ok(())
}

#[cfg(windows)]
fn remove_link(path: &Path, file_type: fs::FileType) -> std::io::Result<()> {
    use std::os::windows::fs::FileTypeExt;

    if file_type.is_symlink_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn remove_link(path: &Path, _file_type: fs::FileType) -> std::io::Result<()> {
    fs::remove_file(path)
}
