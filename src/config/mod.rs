//! Configuration module for Kassa
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KassaPaths;
pub use settings::Settings;
