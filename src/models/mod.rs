//! Core data models for Kassa
//!
//! This module contains the data structures of the register domain:
//! products, the catalog, line items, transactions and the receipt counter.

pub mod catalog;
pub mod line_item;
pub mod money;
pub mod product;
pub mod sequence;
pub mod transaction;

pub use catalog::Catalog;
pub use line_item::LineItem;
pub use money::Money;
pub use product::{PricingMode, Product, ProductId, ProductLineError};
pub use sequence::ReceiptSequence;
pub use transaction::Transaction;
