//! Service layer for Kassa
//!
//! The service layer holds the register logic on top of the models and the
//! storage layer.

pub mod register;

pub use register::{Command, CommandOutcome, PaidReceipt, Register};
