//! Line item model
//!
//! One priced entry on a transaction. The total is computed when the item is
//! created and never recomputed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::product::{PricingMode, Product, ProductId};
use crate::error::{KassaError, KassaResult};

/// A priced product and quantity on a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub pricing_mode: PricingMode,
    /// `unit price × quantity`
    pub total: Money,
}

impl LineItem {
    /// Price `quantity` of `product`
    ///
    /// The quantity is a whole number for both pricing modes; per-kilo
    /// products are multiplied exactly like per-unit ones.
    pub fn price(product: &Product, quantity: u32) -> KassaResult<Self> {
        if quantity == 0 {
            return Err(KassaError::MalformedInput(
                "Quantity must be greater than zero".into(),
            ));
        }

        let total = product.price.checked_mul(quantity).ok_or_else(|| {
            KassaError::MalformedInput(format!(
                "Quantity {} of product {} is too large",
                quantity, product.id
            ))
        })?;

        Ok(Self {
            product_id: product.id,
            quantity,
            pricing_mode: product.pricing_mode,
            total,
        })
    }

    /// Receipt text with a custom currency label
    pub fn format_with_suffix(&self, suffix: &str) -> String {
        format!(
            "{} {} {} - {}",
            self.product_id,
            self.quantity,
            self.pricing_mode.label(),
            self.total.format_with_suffix(suffix)
        )
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_suffix("kr"))
    }
}
