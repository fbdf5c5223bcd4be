//! # Basket
//!
//! The scanned items of one terminal session.
//!
//! A basket only records what was scanned and in which order. Counting is
//! derived on demand; pricing lives in [`crate::terminal`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Ordered list of scanned product identifiers.
///
/// ## Ownership
/// Each basket belongs to exactly one terminal session and is never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Session identifier (UUID v4), carried onto the receipt.
    id: Uuid,

    /// When the basket was opened.
    opened_at: DateTime<Utc>,

    /// Identifiers in scan order, unvalidated.
    scans: Vec<String>,
}

impl Basket {
    /// Opens a new empty basket.
    pub fn new() -> Self {
        Basket {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            scans: Vec::new(),
        }
    }

    /// Appends one scanned identifier. Unknown identifiers are accepted.
    pub fn scan(&mut self, product_id: impl Into<String>) {
        self.scans.push(product_id.into());
    }

    /// Counts scans per distinct identifier.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::basket::Basket;
    ///
    /// let mut basket = Basket::new();
    /// for id in ["A", "B", "A", "C", "A"] {
    ///     basket.scan(id);
    /// }
    ///
    /// let counts = basket.frequencies();
    /// assert_eq!(counts["A"], 3);
    /// assert_eq!(counts["B"], 1);
    /// assert_eq!(counts.len(), 3);
    /// ```
    pub fn frequencies(&self) -> BTreeMap<&str, u64> {
        let mut counts = BTreeMap::new();
        for product_id in &self.scans {
            *counts.entry(product_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn scans(&self) -> &[String] {
        &self.scans
    }

    /// Total number of scans.
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}

impl Default for Basket {
    fn default() -> Self {
        Basket::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn basket_of(ids: &[&str]) -> Basket {
        let mut basket = Basket::new();
        for id in ids {
            basket.scan(*id);
        }
        basket
    }

    #[test]
    fn test_no_repeats() {
        let basket = basket_of(&["A", "B", "C", "D"]);
        let counts = basket.frequencies();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_grouped_repeats() {
        let basket = basket_of(&["A", "A", "A", "B", "B"]);
        let counts = basket.frequencies();
        assert_eq!(counts.get("A"), Some(&3));
        assert_eq!(counts.get("B"), Some(&2));
    }

    #[test]
    fn test_separated_repeats() {
        let basket = basket_of(&["A", "B", "C", "B", "A", "B", "A", "C"]);
        let counts = basket.frequencies();
        assert_eq!(counts.get("A"), Some(&3));
        assert_eq!(counts.get("B"), Some(&3));
        assert_eq!(counts.get("C"), Some(&2));
    }

    #[test]
    fn test_scan_order_is_kept() {
        let basket = basket_of(&["C", "A", "C"]);
        assert_eq!(basket.scans(), &["C", "A", "C"]);
        assert_eq!(basket.len(), 3);
    }

    #[test]
    fn test_new_basket_is_empty_and_unique() {
        let first = Basket::new();
        let second = Basket::default();
        assert!(first.is_empty());
        assert!(first.frequencies().is_empty());
        assert_ne!(first.id(), second.id());
    }
}
