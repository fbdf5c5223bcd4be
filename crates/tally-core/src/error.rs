//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError            - Pricing failures (fatal for the basket)    │
//! │  ├── ValidationError      - Price list input failures (load time)      │
//! │  └── UnrecognizedProduct  - Warning, never returned as Err             │
//! │                                                                         │
//! │  terminal errors (apps/terminal)                                       │
//! │  └── TerminalError        - Config, I/O, and wrapped CoreError         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → exit code 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Severity
//! | Condition               | When            | Handling                       |
//! |-------------------------|-----------------|--------------------------------|
//! | tier size <= 0          | catalog build   | dropped silently               |
//! | unknown product scanned | `total()`       | warning, quantity excluded     |
//! | missing size-1 tier     | registry build  | `CoreError::MissingSingleTier` |
//! | no partition for count  | `total()`       | `CoreError::NoFeasiblePartition` |
//! | total exceeds i64 cents | `total()`       | `CoreError::AmountOverflow`    |

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// Every variant here is structural: the price list is malformed or an
/// internal invariant of the optimizer was broken. Scanning an unknown
/// product is not an error, see [`UnrecognizedProduct`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog has no tier of exactly this size.
    #[error("No tier of size {size} in catalog")]
    TierNotFound { size: u64 },

    /// The cost selector was handed nothing to choose from.
    #[error("Cannot select the cheapest of an empty partition set")]
    EmptyPartitionSet,

    /// No combination of a product's tiers adds up to the scanned quantity.
    ///
    /// ## When This Occurs
    /// Only with a catalog that lacks a size-1 tier, which registry
    /// construction rejects. Seeing this means a catalog slipped past
    /// validation.
    #[error("No tier combination for {product_id} adds up to {quantity} items")]
    NoFeasiblePartition { product_id: String, quantity: u64 },

    /// A product's catalog cannot price a single item.
    ///
    /// ## User Workflow
    /// ```text
    /// price list: C = { 6 → 5.00 }
    ///      │
    ///      ▼
    /// ProductRegistry::from_pricing
    ///      │
    ///      ▼
    /// MissingSingleTier { product_id: "C" }
    ///      │
    ///      ▼
    /// terminal refuses to start
    /// ```
    #[error("Product {product_id} has no tier of size 1, single items cannot be priced")]
    MissingSingleTier { product_id: String },

    /// A price sum does not fit in `i64` cents.
    #[error("Amount overflow while pricing: total exceeds the supported range")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while loading a price list.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same product listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Warnings
// =============================================================================

/// A scanned identifier with no entry in the product registry.
///
/// Produced once per distinct identifier each time a basket is totalled.
/// The identifier's whole quantity is left out of the total.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Scanned item \"{product_id}\" does not have a price model. This item will be ignored.")]
pub struct UnrecognizedProduct {
    /// The offending identifier, exactly as scanned.
    pub product_id: String,

    /// How many times it was scanned.
    pub quantity: u64,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
