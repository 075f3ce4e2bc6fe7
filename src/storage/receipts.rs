//! Receipt files
//!
//! Each checkout appends a separator line and the formatted line items to a
//! text file in the receipts directory. The file name carries the receipt
//! number, so every transaction gets its own file.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use super::file_io::append_lines;
use crate::error::{KassaError, KassaResult};
use crate::models::Transaction;

const SEPARATOR_RULE: &str = "--------------------";

/// What `ReceiptWriter::finalize` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// The receipt was appended to this file
    Saved(PathBuf),
    /// The transaction was empty; nothing was written
    NothingToSave,
}

/// Writes finalized transactions to the receipts directory
#[derive(Debug, Clone)]
pub struct ReceiptWriter {
    receipts_dir: PathBuf,
    prefix: String,
    currency_suffix: String,
}

impl ReceiptWriter {
    pub fn new(
        receipts_dir: PathBuf,
        prefix: impl Into<String>,
        currency_suffix: impl Into<String>,
    ) -> Self {
        Self {
            receipts_dir,
            prefix: prefix.into(),
            currency_suffix: currency_suffix.into(),
        }
    }

    /// File name for receipt `number` issued at `issued_at`
    pub fn file_name(&self, number: u64, issued_at: &DateTime<Local>) -> String {
        format!(
            "{}_{:06}_{}.txt",
            self.prefix,
            number,
            issued_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Separator line written before each receipt's items
    pub fn separator(issued_at: &DateTime<Local>) -> String {
        format!(
            "{} {} {}",
            SEPARATOR_RULE,
            issued_at.format("%Y-%m-%d %H:%M:%S"),
            SEPARATOR_RULE
        )
    }

    /// Append `transaction` as receipt `number`
    pub fn finalize(
        &self,
        transaction: &Transaction,
        number: u64,
        issued_at: DateTime<Local>,
    ) -> KassaResult<FinalizeOutcome> {
        if transaction.is_empty() {
            return Ok(FinalizeOutcome::NothingToSave);
        }

        fs::create_dir_all(&self.receipts_dir).map_err(|e| {
            KassaError::Persistence(format!(
                "Failed to create receipts directory {}: {}",
                self.receipts_dir.display(),
                e
            ))
        })?;

        let path = self.receipts_dir.join(self.file_name(number, &issued_at));

        let lines = std::iter::once(Self::separator(&issued_at)).chain(
            transaction
                .items()
                .iter()
                .map(|item| item.format_with_suffix(&self.currency_suffix)),
        );
        append_lines(&path, lines)?;

        info!(receipt = number, path = %path.display(), items = transaction.len(), "Receipt saved");
        Ok(FinalizeOutcome::Saved(path))
    }

    pub fn receipts_dir(&self) -> &PathBuf {
        &self.receipts_dir
    }
}
