//! User settings for Kassa
//!
//! Manages register preferences: currency label, receipt file naming and how
//! eagerly the receipt counter is persisted.

use serde::{Deserialize, Serialize};

use super::paths::KassaPaths;
use crate::error::KassaError;

/// User settings for Kassa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label printed after amounts ("kr")
    #[serde(default = "default_currency")]
    pub currency_suffix: String,

    /// Prefix of receipt file names
    #[serde(default = "default_receipt_prefix")]
    pub receipt_prefix: String,

    /// Save the receipt counter after every checkout, not only at shutdown
    #[serde(default = "default_persist_sequence")]
    pub persist_sequence_on_checkout: bool,

    /// Include the built-in products in the catalog
    #[serde(default = "default_include_seed")]
    pub include_seed_products: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "kr".to_string()
}

fn default_receipt_prefix() -> String {
    "RECEIPT".to_string()
}

fn default_persist_sequence() -> bool {
    true
}

fn default_include_seed() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_suffix: default_currency(),
            receipt_prefix: default_receipt_prefix(),
            persist_sequence_on_checkout: default_persist_sequence(),
            include_seed_products: default_include_seed(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KassaPaths) -> Result<Self, KassaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KassaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KassaPaths) -> Result<(), KassaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KassaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_suffix, "kr");
        assert_eq!(settings.receipt_prefix, "RECEIPT");
        assert!(settings.persist_sequence_on_checkout);
        assert!(settings.include_seed_products);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_suffix, "kr");
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.persist_sequence_on_checkout = false;
        settings.currency_suffix = "SEK".into();
        assert!(!paths.is_initialized());
        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.persist_sequence_on_checkout);
        assert_eq!(loaded.currency_suffix, "SEK");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"receipt_prefix": "KVITTO"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.receipt_prefix, "KVITTO");
        assert!(loaded.persist_sequence_on_checkout);
    }

    #[test]
    fn test_invalid_file_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KassaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, KassaError::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
