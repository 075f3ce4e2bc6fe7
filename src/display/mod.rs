//! Display formatting for terminal output
//!
//! Provides utilities for formatting products and receipts for terminal
//! display.

pub mod product;
pub mod receipt;

pub use product::{format_product_list, format_skipped_lines};
pub use receipt::{format_open_transaction, format_paid_receipt, format_receipt_header};
