//! Product catalog
//!
//! The catalog is built once at startup and is read-only afterwards. Products
//! keep their insertion order, which is also the listing order.

use tracing::warn;

use super::money::Money;
use super::product::{PricingMode, Product, ProductId};

/// The set of products known to the register
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding only the built-in products
    pub fn seeded() -> Self {
        Self {
            products: Self::seed(),
        }
    }

    /// The built-in product list
    pub fn seed() -> Vec<Product> {
        vec![
            Product::new(
                ProductId::new(300),
                "Bananas",
                Money::from_cents(1250),
                PricingMode::PerKilo,
            ),
            Product::new(
                ProductId::new(301),
                "Coffee",
                Money::from_cents(3550),
                PricingMode::PerUnit,
            ),
        ]
    }

    /// Append products after the existing ones
    ///
    /// IDs are not deduplicated. A product whose ID is already present is
    /// kept, but `find` keeps returning the earlier entry.
    pub fn extend(&mut self, products: impl IntoIterator<Item = Product>) {
        for product in products {
            if self.find(product.id).is_some() {
                warn!(
                    product_id = %product.id,
                    name = %product.name,
                    "Duplicate product id; earlier entry takes precedence"
                );
            }
            self.products.push(product);
        }
    }

    /// Look up a product by ID; the first matching entry wins
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
