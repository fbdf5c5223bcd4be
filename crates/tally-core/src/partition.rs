//! # Partition Enumerator
//!
//! Finds every way to split a quantity into tier sizes.
//!
//! ## Search Shape
//! ```text
//! enumerate(7, [1, 6])
//!
//!   i=0 (size 1): count 7 ──► i=1, rem 0 ──► emit [1,1,1,1,1,1,1]
//!                 count 6 ──► i=1, rem 1 ──► 6 > 1, dead end
//!                 ...
//!                 count 1 ──► i=1, rem 6 ──► last tier, 6 / 6 ──► emit [1,6]
//!   i=1 (size 6): last tier, 7 % 6 != 0 ──► dead end
//! ```
//!
//! Tiers are visited in ascending order and each level only looks at tiers
//! from its own index onward, so every multiset comes out exactly once:
//! `{1,1,2}` is produced a single time, never as `[2,1,1]` or `[1,2,1]`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Partition
// =============================================================================

/// A multiset of tier sizes that adds up to a target quantity.
///
/// Stored as `(size, count)` pairs in ascending size order, so 6000 singles
/// take one pair rather than 6000 entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition(Vec<(u64, u64)>);

impl Partition {
    /// Builds a partition from sizes in any order.
    pub fn from_sizes(mut sizes: Vec<u64>) -> Self {
        sizes.sort_unstable();
        let mut counts: Vec<(u64, u64)> = Vec::new();
        for size in sizes {
            match counts.last_mut() {
                Some((last, count)) if *last == size => *count += 1,
                _ => counts.push((size, 1)),
            }
        }
        Partition(counts)
    }

    /// `(size, count)` pairs, smallest size first.
    pub fn counts(&self) -> &[(u64, u64)] {
        &self.0
    }

    /// Every size the partition uses, repeated by count, in non-decreasing order.
    pub fn sizes(&self) -> Vec<u64> {
        self.0
            .iter()
            .flat_map(|&(size, count)| std::iter::repeat(size).take(count as usize))
            .collect()
    }

    /// Number of items covered (sum of all sizes).
    pub fn quantity(&self) -> u64 {
        self.0.iter().map(|&(size, count)| size * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Groups the partition into `(size, count)` pairs, largest size first.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::partition::Partition;
    ///
    /// let p = Partition::from_sizes(vec![10, 5, 10]);
    /// assert_eq!(p.tier_counts(), vec![(10, 2), (5, 1)]);
    /// ```
    pub fn tier_counts(&self) -> Vec<(u64, u64)> {
        self.0.iter().rev().copied().collect()
    }
}

// =============================================================================
// Enumeration
// =============================================================================

/// Enumerates every partition of `target` into the given tier sizes.
///
/// ## Requirements
/// `sizes` must be strictly ascending and free of zeros, which is exactly
/// what [`TierCatalog::sizes`](crate::catalog::TierCatalog::sizes) returns.
/// The pruning step is wrong for unsorted input.
///
/// ## Edge Cases
/// - `target == 0` yields one empty partition
/// - no combination reaching `target` yields an empty vector; that is a
///   normal result here, the caller decides whether it is fatal
///
/// ## Example
/// ```rust
/// use tally_core::partition::enumerate;
///
/// let partitions = enumerate(4, &[1, 2]);
/// assert_eq!(partitions.len(), 3); // 1+1+1+1, 1+1+2, 2+2
///
/// assert!(enumerate(1, &[3]).is_empty());
/// ```
pub fn enumerate(target: u64, sizes: &[u64]) -> Vec<Partition> {
    debug_assert!(
        sizes.windows(2).all(|w| w[0] < w[1]),
        "tier sizes must be strictly ascending"
    );
    debug_assert!(sizes.iter().all(|&s| s > 0), "tier sizes must be positive");

    let mut found = Vec::new();
    let mut combination = Vec::new();
    search(target, sizes, 0, &mut combination, &mut found);
    found
}

/// Backtracking step: extend `combination` using tiers from `start` onward.
fn search(
    remaining: u64,
    sizes: &[u64],
    start: usize,
    combination: &mut Vec<(u64, u64)>,
    found: &mut Vec<Partition>,
) {
    if remaining == 0 {
        found.push(Partition(combination.clone()));
        return;
    }

    for (index, &size) in sizes.iter().enumerate().skip(start) {
        // ascending sizes: nothing from here on fits either
        if size > remaining {
            break;
        }

        // last tier has to cover the remainder exactly, in one go
        if index + 1 == sizes.len() {
            if remaining % size == 0 {
                combination.push((size, remaining / size));
                search(0, sizes, index + 1, combination, found);
                combination.pop();
            }
            break;
        }

        for count in (1..=remaining / size).rev() {
            combination.push((size, count));
            search(remaining - count * size, sizes, index + 1, combination, found);
            combination.pop();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
