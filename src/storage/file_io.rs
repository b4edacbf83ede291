//! File I/O utilities
//!
//! Buffered text reads and in-place text writes with errors naming the path.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::BreadError;

/// Open a text file for buffered reading
pub fn open_text<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, BreadError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| BreadError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Write text to a file, replacing its contents
///
/// The destination itself is opened for writing, so a symlink is followed and
/// a read-only file is reported as an error rather than replaced. Missing
/// parent directories are created.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), BreadError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BreadError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| BreadError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| BreadError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BreadError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BreadError::Io(format!("Failed to sync data: {}", e)))
}
