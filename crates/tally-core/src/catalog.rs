//! # Tier Catalog
//!
//! The deduplicated, ascending set of tiers one product can be sold in.
//!
//! ## Construction Rules
//! ```text
//! entries (as loaded)           catalog
//! ───────────────────           ───────
//! { 3 → 3.00 }                  { 1 → 1.25 }
//! { 1 → 1.25 }        build     { 3 → 2.80 }   ← lowest price for size 3
//! { 0 → 9.99 }       ──────►                   ← size 0 dropped
//! { 3 → 2.80 }
//! {-2 → 1.00 }                                 ← negative size dropped
//! ```
//!
//! The ascending order is what lets the partition search prune: once a tier
//! is too big for the remainder, so is every tier after it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::TierEntry;

/// A tier that survived catalog construction. `size` is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub size: u64,
    pub price: Money,
}

/// Ordered, deduplicated tier list for one product.
///
/// ## Invariants
/// - every size is >= 1
/// - sizes strictly ascending (so no two tiers share a size)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierCatalog {
    tiers: Vec<Tier>,
}

impl TierCatalog {
    /// Builds a catalog from raw entries.
    ///
    /// Entries with a size <= 0 are dropped without error. When sizes repeat,
    /// the strictly lowest price is kept; on equal prices the first entry wins.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TierEntry>,
    {
        let mut by_size: BTreeMap<u64, Money> = BTreeMap::new();

        for entry in entries {
            let size = match u64::try_from(entry.size) {
                Ok(size) if size > 0 => size,
                _ => continue,
            };

            by_size
                .entry(size)
                .and_modify(|kept| {
                    if entry.price < *kept {
                        *kept = entry.price;
                    }
                })
                .or_insert(entry.price);
        }

        TierCatalog {
            tiers: by_size
                .into_iter()
                .map(|(size, price)| Tier { size, price })
                .collect(),
        }
    }

    /// Tier sizes in ascending order.
    pub fn sizes(&self) -> Vec<u64> {
        self.tiers.iter().map(|t| t.size).collect()
    }

    /// Price of the tier with exactly this size.
    pub fn price_for(&self, size: u64) -> CoreResult<Money> {
        self.tiers
            .binary_search_by_key(&size, |t| t.size)
            .map(|index| self.tiers[index].price)
            .map_err(|_| CoreError::TierNotFound { size })
    }

    /// Whether a single item can be priced on its own.
    pub fn has_single_tier(&self) -> bool {
        self.tiers.first().is_some_and(|t| t.size == 1)
    }

    /// Price of one item bought alone, if the catalog has a size-1 tier.
    pub fn single_price(&self) -> Option<Money> {
        self.price_for(1).ok()
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
