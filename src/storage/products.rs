//! Product list loading
//!
//! Reads the line-oriented product list (`<id> <name> <price> <kilo|st>`).
//! Ingest is lenient: a bad line is recorded as skipped and the rest of the
//! file is still used.

use std::path::Path;

use tracing::{debug, info, warn};

use super::file_io::read_text;
use crate::error::KassaResult;
use crate::models::{Catalog, Product, ProductLineError};

/// A product list line that did not produce a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub line: String,
    pub reason: ProductLineError,
}

/// Result of reading a product list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListLoad {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse every line of a product list; blank lines are ignored
pub fn parse_product_list(text: &str) -> ProductListLoad {
    let mut load = ProductListLoad::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match Product::parse_line(line) {
            Ok(product) => load.products.push(product),
            Err(reason) => {
                debug!(line_number = index + 1, %reason, "Skipping product line");
                load.skipped.push(SkippedLine {
                    line_number: index + 1,
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    load
}

/// Read and parse a product list file. A missing file yields None.
pub fn load_product_list<P: AsRef<Path>>(path: P) -> KassaResult<Option<ProductListLoad>> {
    Ok(read_text(path)?.map(|text| parse_product_list(&text)))
}

/// Build the catalog from the seed list and the product list file
///
/// The file is optional: when it is missing or unreadable the catalog keeps
/// whatever the seed provides. Returns the catalog together with the lines
/// that were skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P, include_seed: bool) -> (Catalog, Vec<SkippedLine>) {
    let path = path.as_ref();
    let mut catalog = if include_seed {
        Catalog::seeded()
    } else {
        Catalog::new()
    };

    match load_product_list(path) {
        Ok(Some(load)) => {
            info!(
                path = %path.display(),
                loaded = load.products.len(),
                skipped = load.skipped.len(),
                "Loaded product list"
            );
            catalog.extend(load.products);
            (catalog, load.skipped)
        }
        Ok(None) => {
            warn!(path = %path.display(), "Product list not found; using built-in products only");
            (catalog, Vec::new())
        }
        Err(e) => {
            warn!(error = %e, "Error loading products; using built-in products only");
            (catalog, Vec::new())
        }
    }
}
