//! Path management for Kassa
//!
//! All files the register reads or writes live under one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `KASSA_DATA_DIR` environment variable (if set)
//! 2. The directory containing the running executable

use std::path::PathBuf;

use crate::error::KassaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KASSA_DATA_DIR";

/// Manages all paths used by Kassa
#[derive(Debug, Clone)]
pub struct KassaPaths {
    /// Base directory for all Kassa data
    base_dir: PathBuf,
}

impl KassaPaths {
    /// Create a new KassaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn new() -> Result<Self, KassaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create KassaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the external product list
    pub fn products_file(&self) -> PathBuf {
        self.base_dir.join("products.txt")
    }

    /// Get the path to the persisted receipt sequence counter
    pub fn receipt_number_file(&self) -> PathBuf {
        self.base_dir.join("receipt_number.txt")
    }

    /// Get the receipts directory
    pub fn receipts_dir(&self) -> PathBuf {
        self.base_dir.join("Receipts")
    }

    /// Ensure the base and receipts directories exist
    pub fn ensure_directories(&self) -> Result<(), KassaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KassaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.receipts_dir())
            .map_err(|e| KassaError::Io(format!("Failed to create receipts directory: {}", e)))?;

        Ok(())
    }

    /// Check if Kassa has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the directory of the running executable
fn resolve_default_path() -> Result<PathBuf, KassaError> {
    let exe = std::env::current_exe()
        .map_err(|e| KassaError::Config(format!("Could not locate executable: {}", e)))?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| KassaError::Config("Executable has no parent directory".into()))
}
