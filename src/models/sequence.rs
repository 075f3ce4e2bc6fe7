//! Receipt sequence number
//!
//! Plain value type; loading and saving live in `storage::sequence`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The number the next receipt will receive. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptSequence(u64);

impl ReceiptSequence {
    pub const FIRST: Self = Self(1);

    /// Wrap a stored value; zero is not a valid receipt number
    pub fn from_value(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Parse persisted text such as "42\n"
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok().and_then(Self::from_value)
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    /// Hand out the current number and move to the next one
    pub fn advance(&mut self) -> u64 {
        let issued = self.0;
        self.0 = self.0.saturating_add(1);
        issued
    }
}

impl Default for ReceiptSequence {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ReceiptSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
