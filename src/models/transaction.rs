//! Transaction model
//!
//! A transaction collects the line items of one customer. Items are only ever
//! appended; the whole list is cleared once it has been written to a receipt.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::line_item::LineItem;
use super::money::Money;
use super::product::ProductId;
use crate::error::{KassaError, KassaResult};

/// The in-progress purchase of the current customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    items: Vec<LineItem>,
}

impl Transaction {
    /// Create an empty transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `product_id` in `catalog` and append a priced line
    ///
    /// Returns the appended item so the caller can echo it. Unknown products
    /// and invalid quantities leave the transaction untouched.
    pub fn add_line(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
    ) -> KassaResult<&LineItem> {
        let product = catalog
            .find(product_id)
            .ok_or_else(|| KassaError::product_not_found(product_id))?;

        let item = LineItem::price(product, quantity)?;
        self.items.push(item);

        Ok(&self.items[self.items.len() - 1])
    }

    /// Line items in entry order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line totals
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.total).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all items, leaving the transaction open for the next customer
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line_appends_in_call_order() {
        let catalog = Catalog::seeded();
        let mut txn = Transaction::new();

        txn.add_line(&catalog, ProductId::new(300), 2).unwrap();
        txn.add_line(&catalog, ProductId::new(301), 1).unwrap();
        txn.add_line(&catalog, ProductId::new(300), 1).unwrap();

        assert_eq!(txn.len(), 3);
        let ids: Vec<u32> = txn.items().iter().map(|i| i.product_id.value()).collect();
        assert_eq!(ids, vec![300, 301, 300]);
        assert_eq!(txn.total(), Money::from_cents(2500 + 3550 + 1250));
    }

    #[test]
    fn test_add_line_returns_new_item() {
        let catalog = Catalog::seeded();
        let mut txn = Transaction::new();

        let item = txn.add_line(&catalog, ProductId::new(300), 2).unwrap();
        assert_eq!(item.to_string(), "300 2 kilo - 25.00 kr");
    }

    #[test]
    fn test_unknown_product_leaves_transaction_unchanged() {
        let catalog = Catalog::seeded();
        let mut txn = Transaction::new();
        txn.add_line(&catalog, ProductId::new(301), 1).unwrap();

        let err = txn.add_line(&catalog, ProductId::new(999), 1).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(txn.len(), 1);
    }

    #[test]
    fn test_zero_quantity_leaves_transaction_unchanged() {
        let catalog = Catalog::seeded();
        let mut txn = Transaction::new();

        assert!(txn.add_line(&catalog, ProductId::new(300), 0).is_err());
        assert!(txn.is_empty());
    }

    #[test]
    fn test_add_line_does_not_touch_catalog() {
        let catalog = Catalog::seeded();
        let before = catalog.products().to_vec();
        let mut txn = Transaction::new();

        txn.add_line(&catalog, ProductId::new(300), 5).unwrap();
        assert_eq!(catalog.products(), before.as_slice());
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::seeded();
        let mut txn = Transaction::new();
        txn.add_line(&catalog, ProductId::new(300), 1).unwrap();

        txn.clear();
        assert!(txn.is_empty());
        assert_eq!(txn.total(), Money::zero());
    }
}
