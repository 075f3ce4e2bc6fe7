//! Product model
//!
//! A product is a priced catalog entry. Products are created once at startup,
//! either from the built-in seed list or from a line of the product list file,
//! and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Numeric product identifier as typed at the register
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// How a product's price is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Price per kilogram
    PerKilo,
    /// Price per item
    #[default]
    PerUnit,
}

impl PricingMode {
    /// Interpret a product list token. Only "kilo" (any case) is per-weight.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("kilo") {
            Self::PerKilo
        } else {
            Self::PerUnit
        }
    }

    /// Unit label used on receipts and product listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::PerKilo => "kilo",
            Self::PerUnit => "st",
        }
    }
}

/// Why a product list line was not turned into a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLineError {
    /// The line did not have exactly four fields
    FieldCount(usize),
    /// The first field is not a non-negative integer
    InvalidId(String),
    /// The third field is not a non-negative amount with at most two decimals
    InvalidPrice(String),
}

impl fmt::Display for ProductLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 4 fields, found {}", n),
            Self::InvalidId(s) => write!(f, "invalid product id '{}'", s),
            Self::InvalidPrice(s) => write!(f, "invalid price '{}'", s),
        }
    }
}

impl std::error::Error for ProductLineError {}

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price; per kilogram when `pricing_mode` is `PerKilo`
    pub price: Money,
    pub pricing_mode: PricingMode,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        pricing_mode: PricingMode,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            pricing_mode,
        }
    }

    /// Parse one product list line: `<id> <name> <price> <kilo|st>`
    pub fn parse_line(line: &str) -> Result<Self, ProductLineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, name, price, mode] = fields[..] else {
            return Err(ProductLineError::FieldCount(fields.len()));
        };

        let id: ProductId = id
            .parse()
            .map_err(|_| ProductLineError::InvalidId(id.to_string()))?;

        let price = Money::parse(price)
            .ok()
            .filter(|p| !p.is_negative())
            .ok_or_else(|| ProductLineError::InvalidPrice(price.to_string()))?;

        Ok(Self::new(id, name, price, PricingMode::from_token(mode)))
    }
}
