//! Custom error types for Kassa
//!
//! This module defines the error hierarchy for the register using thiserror
//! for ergonomic error definitions. None of these errors ends a session: the
//! caller reports them and keeps accepting commands.

use thiserror::Error;

/// The main error type for Kassa operations
#[derive(Error, Debug)]
pub enum KassaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Unparsable command or product definition
    #[error("Invalid input: {0}")]
    MalformedInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A persisted file could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl KassaError {
    /// Create a "not found" error for products
    pub fn product_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Product",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a malformed input error
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

impl From<std::io::Error> for KassaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KassaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Kassa operations
pub type KassaResult<T> = Result<T, KassaError>;
