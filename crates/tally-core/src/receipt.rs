//! # Receipt
//!
//! The outcome of totalling a basket: what was charged, how, and what was
//! left out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::UnrecognizedProduct;
use crate::money::Money;
use crate::partition::Partition;

/// How many times one tier was applied on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierUsage {
    /// Tier size.
    pub size: u64,
    /// How many times the tier was bought.
    pub count: u64,
    /// Flat price of one application of the tier.
    pub price: Money,
}

impl TierUsage {
    pub fn subtotal(&self) -> Money {
        self.price * self.count
    }
}

/// One priced product on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub product_id: String,
    pub quantity: u64,
    /// The winning partition of `quantity`.
    pub partition: Partition,
    /// `partition` grouped by tier, largest tier first.
    pub tiers: Vec<TierUsage>,
    pub cost: Money,
}

/// Everything the output reporter needs for one basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub basket_id: Uuid,
    pub opened_at: DateTime<Utc>,
    /// Priced products, sorted by product id.
    pub lines: Vec<PricedLine>,
    /// One entry per distinct unrecognized identifier.
    pub warnings: Vec<UnrecognizedProduct>,
    /// Sum of all line costs. Unrecognized products contribute nothing.
    pub total: Money,
}

impl Receipt {
    /// Number of items actually charged for.
    pub fn priced_quantity(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_usage_subtotal() {
        let usage = TierUsage {
            size: 10,
            count: 2,
            price: Money::from_cents(800),
        };
        assert_eq!(usage.subtotal(), Money::from_cents(1600));
    }
}
