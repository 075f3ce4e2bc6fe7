//! Product display formatting
//!
//! Formats the catalog and skipped product list lines for terminal output.

use crate::models::Product;
use crate::storage::SkippedLine;

/// Format the catalog as a table
pub fn format_product_list(products: &[Product], currency_suffix: &str) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<name_width$}  {:>12}  {}\n",
        "ID",
        "Name",
        "Price",
        "Unit",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->6}  {:-<name_width$}  {:->12}  {:-<4}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for product in products {
        output.push_str(&format!(
            "{:>6}  {:<name_width$}  {:>12}  {}\n",
            product.id.to_string(),
            product.name,
            product.price.format_with_suffix(currency_suffix),
            product.pricing_mode.label(),
            name_width = name_width,
        ));
    }

    output
}

/// Format product list lines that were ignored during loading
pub fn format_skipped_lines(skipped: &[SkippedLine]) -> String {
    if skipped.is_empty() {
        return "No product lines were skipped.\n".to_string();
    }

    let mut output = format!("Skipped {} product line(s):\n", skipped.len());
    for entry in skipped {
        output.push_str(&format!(
            "  line {}: {} ({})\n",
            entry.line_number, entry.line, entry.reason
        ));
    }
    output
}
