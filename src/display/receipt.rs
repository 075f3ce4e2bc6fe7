//! Receipt display formatting

use chrono::{DateTime, Local};

use crate::models::Transaction;
use crate::services::PaidReceipt;

/// Header shown when a new customer is started
pub fn format_receipt_header(opened_at: &DateTime<Local>) -> String {
    format!("Register\nRECEIPT {}\n", opened_at.format("%Y-%m-%d %H:%M"))
}

/// On-screen copy of a paid receipt
pub fn format_paid_receipt(receipt: &PaidReceipt, currency_suffix: &str) -> String {
    let mut output = format!("\nReceipt #{}:\n", receipt.number);
    for item in &receipt.items {
        output.push_str(&item.format_with_suffix(currency_suffix));
        output.push('\n');
    }
    output.push_str(&format!(
        "Total: {}\n",
        receipt.total.format_with_suffix(currency_suffix)
    ));
    output
}

/// Running view of the open transaction
pub fn format_open_transaction(transaction: &Transaction, currency_suffix: &str) -> String {
    if transaction.is_empty() {
        return "Receipt is empty.\n".to_string();
    }

    let mut output = String::new();
    for item in transaction.items() {
        output.push_str(&format!("  {}\n", item.format_with_suffix(currency_suffix)));
    }
    output.push_str(&format!(
        "  Subtotal: {}\n",
        transaction.total().format_with_suffix(currency_suffix)
    ));
    output
}
