//! Kassa - minimal terminal point-of-sale register
//!
//! This library provides the core of the register: a product catalog, the
//! transaction of the current customer, receipt files and a receipt counter
//! that survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (products, catalog, line items, transactions)
//! - `storage`: Product list, receipt counter and receipt files
//! - `services`: The register and its command interpreter
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust,ignore
//! use kassa::config::{KassaPaths, Settings};
//! use kassa::services::Register;
//!
//! let paths = KassaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (mut register, _skipped) = Register::open(&paths, &settings);
//! register.interpret("300 2")?;
//! register.interpret("pay")?;
//! register.shutdown()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{KassaError, KassaResult};
