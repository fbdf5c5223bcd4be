//! # tally-core: Tiered Pricing for Tally POS
//!
//! This crate prices a basket of scanned items when products are sold in
//! bulk tiers ("3 for $3.00", "6 for $5.00"). For every product it finds the
//! split of the scanned quantity into tiers that costs the least.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (tally binary)                    │   │
//! │  │    price list loading ──► scan prompt ──► receipt printing      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ partition │  │   cost    │  │ terminal  │  │   │
//! │  │   │TierCatalog│─►│ enumerate │─►│ cheapest  │◄─│  Basket   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Tier entries, pricing definitions, products
//! - [`catalog`] - Deduplicated, ascending tier catalog per product
//! - [`partition`] - Enumerates every tier split of a quantity
//! - [`cost`] - Picks the cheapest split
//! - [`registry`] - Validated, immutable price list
//! - [`basket`] - Scanned items of one session
//! - [`terminal`] - Basket totalling
//! - [`receipt`] - Totalling result
//! - [`error`] - Domain error and warning types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Money, PointOfSaleTerminal, ProductPricing, ProductRegistry, TierEntry};
//!
//! let registry = ProductRegistry::from_pricing(vec![
//!     ProductPricing::new("C", vec![
//!         TierEntry::new(1, Money::from_cents(100)),
//!         TierEntry::new(6, Money::from_cents(500)),
//!     ]),
//! ])
//! .unwrap();
//!
//! let mut terminal = PointOfSaleTerminal::new(&registry);
//! for _ in 0..7 {
//!     terminal.scan("C");
//! }
//!
//! // one bulk of six plus a single
//! assert_eq!(terminal.total().unwrap(), Money::from_cents(600));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod money;
pub mod partition;
pub mod receipt;
pub mod registry;
pub mod terminal;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::Basket;
pub use catalog::{Tier, TierCatalog};
pub use error::{CoreError, CoreResult, UnrecognizedProduct, ValidationError};
pub use money::Money;
pub use partition::{enumerate, Partition};
pub use receipt::{PricedLine, Receipt, TierUsage};
pub use registry::ProductRegistry;
pub use terminal::PointOfSaleTerminal;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product identifier.
pub const MAX_PRODUCT_ID_LEN: usize = 50;
