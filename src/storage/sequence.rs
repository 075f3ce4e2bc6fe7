//! Receipt counter persistence
//!
//! The counter is stored as a single integer in plain text. Loading never
//! fails: anything unusable falls back to 1.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::file_io::{read_text, write_text_atomic};
use crate::error::KassaResult;
use crate::models::ReceiptSequence;

/// Issues receipt numbers and persists the counter between runs
#[derive(Debug, Clone)]
pub struct ReceiptSequencer {
    path: PathBuf,
    sequence: ReceiptSequence,
}

impl ReceiptSequencer {
    /// Load the counter from `path`
    pub fn load(path: PathBuf) -> Self {
        let sequence = match read_text(&path) {
            Ok(Some(text)) => ReceiptSequence::parse(&text).unwrap_or_else(|| {
                warn!(
                    path = %path.display(),
                    "Receipt number file is not a positive integer; starting at 1"
                );
                ReceiptSequence::FIRST
            }),
            Ok(None) => {
                debug!(path = %path.display(), "No receipt number file; starting at 1");
                ReceiptSequence::FIRST
            }
            Err(e) => {
                warn!(error = %e, "Error loading receipt number; starting at 1");
                ReceiptSequence::FIRST
            }
        };

        Self { path, sequence }
    }

    /// The number the next receipt will receive
    pub fn current(&self) -> u64 {
        self.sequence.current()
    }

    /// Hand out the current number and advance the in-memory counter
    ///
    /// Nothing is written here; call `save` to persist.
    pub fn next(&mut self) -> u64 {
        self.sequence.advance()
    }

    /// Write the counter to disk
    ///
    /// Failures are logged and returned; the in-memory value is kept either way.
    pub fn save(&self) -> KassaResult<()> {
        write_text_atomic(&self.path, &self.sequence.to_string()).inspect_err(|e| {
            warn!(error = %e, "Error saving receipt number");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_starts_at_one() {
        let temp_dir = TempDir::new().unwrap();
        let sequencer = ReceiptSequencer::load(temp_dir.path().join("receipt_number.txt"));
        assert_eq!(sequencer.current(), 1);
    }

    #[test]
    fn test_garbage_content_starts_at_one() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt_number.txt");
        std::fs::write(&path, "not a number").unwrap();

        assert_eq!(ReceiptSequencer::load(path).current(), 1);
    }

    #[test]
    fn test_unreadable_store_starts_at_one() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(ReceiptSequencer::load(temp_dir.path().to_path_buf()).current(), 1);
    }

    #[test]
    fn test_next_does_not_persist() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt_number.txt");
        let mut sequencer = ReceiptSequencer::load(path.clone());

        assert_eq!(sequencer.next(), 1);
        assert_eq!(sequencer.next(), 2);
        assert!(!path.exists());
        assert_eq!(ReceiptSequencer::load(path).current(), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("receipt_number.txt");
        std::fs::write(&path, "41").unwrap();

        let mut sequencer = ReceiptSequencer::load(path.clone());
        assert_eq!(sequencer.next(), 41);
        sequencer.save().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "42");
        assert_eq!(ReceiptSequencer::load(path).current(), 42);
    }

    #[test]
    fn test_failed_save_keeps_value() {
        let temp_dir = TempDir::new().unwrap();
        // Parent is a file, so the directory cannot be created
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut sequencer = ReceiptSequencer::load(blocker.join("receipt_number.txt"));
        sequencer.next();

        assert!(sequencer.save().is_err());
        assert_eq!(sequencer.current(), 2);
    }
}
