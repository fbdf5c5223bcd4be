//! # Validation Module
//!
//! Input validation for price lists and scanned tokens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Price list load (ProductRegistry::from_pricing)                       │
//! │  ├── validate_product_id   - every product                             │
//! │  ├── validate_price_cents  - every tier                                │
//! │  └── size-1 tier present   - every catalog                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Input collector (terminal app)                                        │
//! │  └── validate_scan_token   - trims, rejects empty tokens               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Basket scan: NO validation (unknown ids are a total-time warning)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_PRODUCT_ID_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product identifier from a price list.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumerics, hyphens, underscores
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_product_id;
///
/// assert!(validate_product_id("A").is_ok());
/// assert!(validate_product_id("COKE-330").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("has space").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Cleans up one token handed over by the input collector.
///
/// ## Returns
/// The trimmed token. Unlike [`validate_product_id`] this checks neither the
/// character set nor the length: whatever the cashier typed is scanned, and
/// unknown ids are reported when the basket is totalled.
pub fn validate_scan_token(token: &str) -> ValidationResult<&str> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ValidationError::Required {
            field: "scanned item".to_string(),
        });
    }

    Ok(token)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tier price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free tier)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(125).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
