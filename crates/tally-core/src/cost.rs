//! # Cost Selector
//!
//! Prices partitions against a catalog and keeps the cheapest one.
//!
//! Ties go to the partition that comes first in the input, so with
//! [`enumerate`](crate::partition::enumerate) output the result is
//! deterministic.

use crate::catalog::TierCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::partition::Partition;

/// Cost of one partition: the sum of its tier prices.
///
/// ## Errors
/// - [`CoreError::TierNotFound`] if the partition uses a size the catalog lacks
/// - [`CoreError::AmountOverflow`] if the sum leaves the `i64` cents range
pub fn partition_cost(catalog: &TierCatalog, partition: &Partition) -> CoreResult<Money> {
    partition
        .counts()
        .iter()
        .try_fold(Money::zero(), |total, &(size, count)| {
            catalog
                .price_for(size)?
                .checked_mul(count)
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or(CoreError::AmountOverflow)
        })
}

/// Returns the cheapest partition together with its cost.
///
/// ## Errors
/// - [`CoreError::EmptyPartitionSet`] if `partitions` is empty
/// - [`CoreError::TierNotFound`] if a partition uses a size the catalog lacks
/// - [`CoreError::AmountOverflow`] if a partition costs more than `i64` cents hold
pub fn cheapest_partition<'p>(
    catalog: &TierCatalog,
    partitions: &'p [Partition],
) -> CoreResult<(&'p Partition, Money)> {
    let mut best: Option<(&Partition, Money)> = None;

    for partition in partitions {
        let cost = partition_cost(catalog, partition)?;
        match best {
            Some((_, best_cost)) if best_cost <= cost => {}
            _ => best = Some((partition, cost)),
        }
    }

    best.ok_or(CoreError::EmptyPartitionSet)
}

/// Minimum cost across all partitions.
///
/// ## Example
/// ```rust
/// use tally_core::catalog::TierCatalog;
/// use tally_core::cost::cheapest;
/// use tally_core::money::Money;
/// use tally_core::partition::enumerate;
/// use tally_core::types::TierEntry;
///
/// let catalog = TierCatalog::build(vec![
///     TierEntry::new(1, Money::from_cents(100)),
///     TierEntry::new(6, Money::from_cents(500)),
/// ]);
/// let partitions = enumerate(7, &catalog.sizes());
/// assert_eq!(cheapest(&catalog, &partitions).unwrap().cents(), 600);
/// ```
pub fn cheapest(catalog: &TierCatalog, partitions: &[Partition]) -> CoreResult<Money> {
    cheapest_partition(catalog, partitions).map(|(_, cost)| cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
