//! # Domain Types
//!
//! Input and product types shared across the pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   build    ┌─────────────────┐                     │
//! │  │ ProductPricing  │ ─────────► │    Product      │                     │
//! │  │  ─────────────  │            │  ─────────────  │                     │
//! │  │  id             │            │  id             │                     │
//! │  │  tiers: Vec<    │            │  catalog:       │                     │
//! │  │    TierEntry>   │            │    TierCatalog  │                     │
//! │  └─────────────────┘            └─────────────────┘                     │
//! │   raw, as loaded                 deduplicated, sorted, immutable       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::TierCatalog;
use crate::money::Money;

// =============================================================================
// Tier Entry
// =============================================================================

/// One "buy exactly `size` for `price`" rule, as supplied by a price list.
///
/// `size` is signed because price lists may contain impossible tiers
/// (zero or negative sizes). Those never make it into a [`TierCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    /// Number of items the tier covers.
    pub size: i64,

    /// Flat price for exactly `size` items.
    pub price: Money,
}

impl TierEntry {
    pub const fn new(size: i64, price: Money) -> Self {
        TierEntry { size, price }
    }
}

// =============================================================================
// Product Pricing (loader boundary)
// =============================================================================

/// A product's raw pricing definition, handed over by the configuration loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPricing {
    pub product_id: String,
    pub tiers: Vec<TierEntry>,
}

impl ProductPricing {
    pub fn new(product_id: impl Into<String>, tiers: Vec<TierEntry>) -> Self {
        ProductPricing {
            product_id: product_id.into(),
            tiers,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale, with exclusive ownership of its catalog.
///
/// Built once from a [`ProductPricing`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: String,
    catalog: TierCatalog,
}

impl Product {
    pub fn new(id: impl Into<String>, catalog: TierCatalog) -> Self {
        Product {
            id: id.into(),
            catalog,
        }
    }

    /// Builds the product's catalog from raw tier entries.
    pub fn from_pricing(pricing: ProductPricing) -> Self {
        Product::new(pricing.product_id, TierCatalog::build(pricing.tiers))
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_pricing_builds_catalog() {
        let pricing = ProductPricing::new(
            "A",
            vec![
                TierEntry::new(3, Money::from_cents(300)),
                TierEntry::new(1, Money::from_cents(125)),
                TierEntry::new(0, Money::from_cents(1)),
            ],
        );

        let product = Product::from_pricing(pricing);
        assert_eq!(product.id(), "A");
        assert_eq!(product.catalog().sizes(), vec![1, 3]);
    }

    #[test]
    fn test_tier_entry_deserializes_cents() {
        let entry: TierEntry = serde_json::from_str(r#"{"size":6,"price":500}"#).unwrap();
        assert_eq!(entry, TierEntry::new(6, Money::from_cents(500)));
    }
}
