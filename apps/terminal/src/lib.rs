//! # Tally Terminal
//!
//! Command-line point of sale terminal on top of `tally-core`.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  startup     PriceList::load ──► into_registry (validated, immutable)   │
//! │                                                                         │
//! │  collect     CLI args or "Enter Scanned items:" ──► tokens             │
//! │                                                                         │
//! │  price       PointOfSaleTerminal::scan × N ──► receipt()                │
//! │                                                                         │
//! │  report      warnings logged + printed, "Total Price: $x.xx"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod report;

use tally_core::{PointOfSaleTerminal, ProductRegistry, Receipt};
use tracing::{debug, info_span, warn};
use tracing_subscriber::EnvFilter;

use crate::error::TerminalResult;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Same as `RUST_LOG=debug` when `RUST_LOG` is unset
/// - Default: `warn`, so only unrecognized products show up
///
/// Logs go to stderr so stdout carries only the receipt.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Scans every item into a fresh terminal session and prices the basket.
///
/// Each unrecognized product is logged once, with its identifier as a
/// structured field.
pub fn price_items(registry: &ProductRegistry, items: &[String]) -> TerminalResult<Receipt> {
    let mut terminal = PointOfSaleTerminal::new(registry);
    let span = info_span!("basket", id = %terminal.basket().id());
    let _guard = span.enter();

    for item in items {
        terminal.scan(item.as_str());
    }
    debug!(scans = terminal.basket().len(), "Basket scanned");

    let receipt = terminal.receipt()?;
    for warning in &receipt.warnings {
        warn!(
            product_id = %warning.product_id,
            quantity = warning.quantity,
            "Unrecognized product excluded from total"
        );
    }
    for line in &receipt.lines {
        debug!(
            product_id = %line.product_id,
            quantity = line.quantity,
            partition = ?line.partition.counts(),
            cost = %line.cost,
            "Priced line"
        );
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceList;
    use crate::input::parse_scan_line;
    use tally_core::Money;

    fn items(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_price_items_demo_scenarios() {
        let registry = PriceList::default().into_registry().unwrap();

        let cases: &[(&[&str], i64)] = &[
            (&["A", "B", "C", "D", "A", "B", "A"], 1325),
            (&["C", "C", "C", "C", "C", "C", "C"], 600),
            (&["A", "B", "C", "D"], 725),
            (&["F"], 0),
            (&["A", "B", "F", "A", "A"], 725),
        ];

        for (scanned, cents) in cases {
            let receipt = price_items(&registry, &items(scanned)).unwrap();
            assert_eq!(receipt.total, Money::from_cents(*cents), "basket {:?}", scanned);
        }
    }

    #[test]
    fn test_price_items_warns_once_per_unknown() {
        let registry = PriceList::default().into_registry().unwrap();
        let receipt = price_items(&registry, &items(&["F", "F", "G"])).unwrap();
        assert_eq!(receipt.warnings.len(), 2);
        assert_eq!(receipt.total, Money::zero());
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }

    #[test]
    fn test_long_scan_token_is_warned_not_dropped() {
        let registry = PriceList::default().into_registry().unwrap();
        let long = "X".repeat(60);
        let scanned = parse_scan_line(&format!("A,{}", long));
        assert_eq!(scanned.len(), 2);

        let receipt = price_items(&registry, &scanned).unwrap();
        assert_eq!(receipt.total, Money::from_cents(125));
        assert_eq!(receipt.warnings.len(), 1);
        assert_eq!(receipt.warnings[0].product_id, long);
    }
}
