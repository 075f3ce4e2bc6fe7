//! File I/O utilities
//!
//! Whole-file replacement goes through a temp file and a rename so a crash
//! never leaves a half-written file behind. Receipts are append-only and each
//! append lands whole or not at all.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::KassaError;

/// Read a text file, returning None if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, KassaError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path).map(Some).map_err(|e| {
        KassaError::Persistence(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Write text to a file atomically (write to temp, then rename)
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), KassaError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KassaError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KassaError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| KassaError::Persistence(format!("Failed to write data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KassaError::Persistence(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KassaError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append lines to a file as one block, creating the file if needed
///
/// The block is written with a single `write_all`. If that fails the file is
/// truncated back to its previous length, so a reader never sees part of a
/// block.
pub fn append_lines<P, I, S>(path: P, lines: I) -> Result<(), KassaError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    let mut block = String::new();
    for line in lines {
        block.push_str(line.as_ref());
        block.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            KassaError::Persistence(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let original_len = file
        .metadata()
        .map_err(|e| {
            KassaError::Persistence(format!("Failed to inspect {}: {}", path.display(), e))
        })?
        .len();

    if let Err(e) = file.write_all(block.as_bytes()).and_then(|_| file.flush()) {
        let _ = file.set_len(original_len);
        return Err(KassaError::Persistence(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
