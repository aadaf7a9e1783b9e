//! File and directory helpers
//!
//! Thin wrappers over `std::fs` with the checks the web application keeps
//! repeating: existence, permission, create-if-missing.

use crate::error::Result;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Write `data` to `to`, creating or truncating the file.
pub fn put(data: &[u8], to: impl AsRef<Path>) -> Result<()> {
    fs::write(to.as_ref(), data)?;
    Ok(())
}

/// Whether `path` exists. Only a "not found" stat result counts as missing;
/// a path we can't stat for other reasons is assumed present.
pub fn exists(path: impl AsRef<Path>) -> bool {
    !is_not_exist(path)
}

/// Whether a stat of `path` reports "not found".
pub fn is_not_exist(path: impl AsRef<Path>) -> bool {
    matches!(fs::metadata(path.as_ref()), Err(e) if e.kind() == ErrorKind::NotFound)
}

/// Whether a stat of `path` reports "permission denied".
pub fn check_permission(path: impl AsRef<Path>) -> bool {
    matches!(fs::metadata(path.as_ref()), Err(e) if e.kind() == ErrorKind::PermissionDenied)
}

/// Create `path` and all missing parents.
pub fn mkdir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Create `path` if it does not exist yet. Calling it again is a no-op.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if is_not_exist(path) {
        debug!("Creating directory {}", path.display());
        mkdir(path)?;
    }
    Ok(())
}

/// `report.final.pdf` -> `report.final`. Names without an extension are
/// returned unchanged. A dotfile is all extension: `.env` -> `""`.
pub fn file_name_without_extension(file_name: &str) -> &str {
    &file_name[..file_name.len() - extension_with_dot(file_name).len()]
}

/// The extension of `file_name` including its dot, or `""`.
///
/// The extension starts at the last `.` of the final path component.
pub fn extension_with_dot(file_name: &str) -> &str {
    let base_start = file_name
        .rfind(std::path::is_separator)
        .map_or(0, |sep| sep + 1);

    match file_name[base_start..].rfind('.') {
        Some(dot) => &file_name[base_start + dot..],
        None => "",
    }
}

/// Open `path` with `options`, returning the handle to the caller.
pub fn open(path: impl AsRef<Path>, options: &OpenOptions) -> Result<File> {
    Ok(options.open(path.as_ref())?)
}
