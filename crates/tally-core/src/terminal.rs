//! # Point of Sale Terminal
//!
//! Drives pricing across a whole basket.
//!
//! ## Totalling Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan("A") scan("B") scan("A") ...                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Basket.frequencies()  ──►  { A: 3, B: 1, F: 1 }                        │
//! │       │                                                                 │
//! │       ▼  for each distinct id, exactly once                             │
//! │  registry.get(id)                                                       │
//! │       ├── None ──► UnrecognizedProduct warning, quantity excluded       │
//! │       │                                                                 │
//! │       └── Some ──► enumerate(count, catalog.sizes())                    │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                    cheapest_partition ──► PricedLine                    │
//! │                                                                         │
//! │  total = Σ line costs                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is borrowed, never owned: many terminals can price against
//! the same price list, each with its own basket.

use crate::basket::Basket;
use crate::cost::cheapest_partition;
use crate::error::{CoreError, CoreResult, UnrecognizedProduct};
use crate::money::Money;
use crate::partition::enumerate;
use crate::receipt::{PricedLine, Receipt, TierUsage};
use crate::registry::ProductRegistry;
use crate::types::Product;

/// A terminal session: one price list, one basket.
#[derive(Debug)]
pub struct PointOfSaleTerminal<'r> {
    registry: &'r ProductRegistry,
    basket: Basket,
}

impl<'r> PointOfSaleTerminal<'r> {
    /// Opens a session with an empty basket.
    pub fn new(registry: &'r ProductRegistry) -> Self {
        PointOfSaleTerminal {
            registry,
            basket: Basket::new(),
        }
    }

    /// Scans a single item. Nothing is checked until the basket is totalled.
    pub fn scan(&mut self, product_id: impl Into<String>) {
        self.basket.scan(product_id);
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn registry(&self) -> &ProductRegistry {
        self.registry
    }

    /// Total price of the basket, each product priced at its cheapest
    /// tier combination.
    ///
    /// Unknown identifiers are skipped; use [`receipt`](Self::receipt) to
    /// see which ones.
    pub fn total(&self) -> CoreResult<Money> {
        self.receipt().map(|receipt| receipt.total)
    }

    /// Prices the basket and returns the full breakdown.
    ///
    /// ## Errors
    /// - [`CoreError::NoFeasiblePartition`] if a registered product's tiers
    ///   cannot add up to its scanned quantity
    /// - [`CoreError::AmountOverflow`] if a line or the total does not fit
    ///   in `i64` cents
    ///
    /// Unknown products are never errors.
    pub fn receipt(&self) -> CoreResult<Receipt> {
        let mut lines = Vec::new();
        let mut warnings = Vec::new();
        let mut total = Money::zero();

        for (product_id, quantity) in self.basket.frequencies() {
            let Some(product) = self.registry.get(product_id) else {
                warnings.push(UnrecognizedProduct {
                    product_id: product_id.to_string(),
                    quantity,
                });
                continue;
            };

            let line = price_line(product, quantity)?;
            total = total
                .checked_add(line.cost)
                .ok_or(CoreError::AmountOverflow)?;
            lines.push(line);
        }

        Ok(Receipt {
            basket_id: self.basket.id(),
            opened_at: self.basket.opened_at(),
            lines,
            warnings,
            total,
        })
    }
}

/// Prices `quantity` units of one product at its cheapest partition.
pub fn price_line(product: &Product, quantity: u64) -> CoreResult<PricedLine> {
    let catalog = product.catalog();
    let partitions = enumerate(quantity, &catalog.sizes());

    let (partition, cost) = match cheapest_partition(catalog, &partitions) {
        Ok(found) => found,
        Err(CoreError::EmptyPartitionSet) => {
            return Err(CoreError::NoFeasiblePartition {
                product_id: product.id().to_string(),
                quantity,
            })
        }
        Err(other) => return Err(other),
    };

    let tiers = partition
        .tier_counts()
        .into_iter()
        .map(|(size, count)| {
            Ok(TierUsage {
                size,
                count,
                price: catalog.price_for(size)?,
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(PricedLine {
        product_id: product.id().to_string(),
        quantity,
        partition: partition.clone(),
        tiers,
        cost,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
