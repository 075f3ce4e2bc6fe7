//! Storage layer for Kassa
//!
//! Plain text files under the base directory: the product list, the receipt
//! counter and the receipts directory.

pub mod file_io;
pub mod products;
pub mod receipts;
pub mod sequence;

pub use file_io::{append_lines, read_text, write_text_atomic};
pub use products::{
    load_catalog, load_product_list, parse_product_list, ProductListLoad, SkippedLine,
};
pub use receipts::{FinalizeOutcome, ReceiptWriter};
pub use sequence::ReceiptSequencer;
