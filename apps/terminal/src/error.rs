//! Error types for the terminal app.

use std::path::PathBuf;

use tally_core::CoreError;
use thiserror::Error;

/// Result type alias for terminal operations.
pub type TerminalResult<T> = Result<T, TerminalError>;

/// Terminal errors.
///
/// Everything here stops the session; recoverable conditions (unknown
/// products) never become a `TerminalError`.
#[derive(Debug, Error)]
pub enum TerminalError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Explicitly requested price list does not exist.
    #[error("Price list not found: {}", .0.display())]
    PriceListNotFound(PathBuf),

    /// Price list file is not valid TOML for the expected shape.
    #[error("Failed to parse price list: {0}")]
    PriceListParse(#[from] toml::de::Error),

    /// A tier price could not be turned into an exact amount.
    #[error("Invalid price for product {product_id}: {reason}")]
    InvalidPrice { product_id: String, reason: String },

    /// An environment override has a value we do not understand.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },

    // =========================================================================
    // Pricing Errors
    // =========================================================================
    /// Registry construction or basket totalling failed.
    #[error(transparent)]
    Pricing(#[from] CoreError),

    // =========================================================================
    // I/O Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize receipt: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TerminalError::PriceListNotFound(PathBuf::from("/tmp/prices.toml"));
        assert_eq!(err.to_string(), "Price list not found: /tmp/prices.toml");

        let err = TerminalError::from(CoreError::MissingSingleTier {
            product_id: "C".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Product C has no tier of size 1, single items cannot be priced"
        );
    }
}
