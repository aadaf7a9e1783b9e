//! Zip archive helpers

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Append the file at `file_path` to an open archive.
///
/// The entry is named after the file's base name, so `logs/app.log` lands
/// in the archive as `app.log`.
pub fn add_file_to_zip<W: Write + Seek>(
    zip_writer: &mut ZipWriter<W>,
    file_path: impl AsRef<Path>,
) -> Result<()> {
    let path = file_path.as_ref();
    let entry_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidPath(format!("no file name in {}", path.display())))?;

    let mut file = File::open(path)?;
    zip_writer.start_file(entry_name, SimpleFileOptions::default())?;
    let written = io::copy(&mut file, zip_writer)?;

    debug!("Added {} ({} bytes) to archive", entry_name, written);
    Ok(())
}

/// Create a new archive at `archive_path` holding each of `files`.
pub fn create_zip<P: AsRef<Path>>(archive_path: impl AsRef<Path>, files: &[P]) -> Result<()> {
    let archive = File::create(archive_path.as_ref())?;
    let mut zip_writer = ZipWriter::new(archive);

    for file in files {
        add_file_to_zip(&mut zip_writer, file)?;
    }

    zip_writer.finish()?;
    Ok(())
}
