//! # Product Registry
//!
//! The price list, loaded once before scanning starts and read-only after.
//!
//! ## Lifecycle
//! ```text
//! config loader ──► Vec<ProductPricing> ──► ProductRegistry::from_pricing
//!                                                  │
//!                                    validate ids, prices, size-1 tiers
//!                                                  │
//!                                                  ▼
//!                       &ProductRegistry borrowed by every terminal session
//! ```
//!
//! There is no way to add or change a product after construction; a new
//! price list means a new registry.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Product, ProductPricing};
use crate::validation::{validate_price_cents, validate_product_id};

/// Immutable mapping from product identifier to [`Product`].
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    products: HashMap<String, Product>,
}

impl ProductRegistry {
    /// Validates raw pricing definitions and builds the registry.
    ///
    /// ## Errors
    /// - invalid or duplicate product id → [`CoreError::Validation`]
    /// - negative tier price → [`CoreError::Validation`]
    /// - catalog without a size-1 tier → [`CoreError::MissingSingleTier`]
    ///
    /// Tiers with a size <= 0 are not errors; the catalog drops them.
    pub fn from_pricing<I>(definitions: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = ProductPricing>,
    {
        let mut products = HashMap::new();

        for pricing in definitions {
            validate_product_id(&pricing.product_id)?;
            for tier in &pricing.tiers {
                validate_price_cents(tier.price.cents())?;
            }

            if products.contains_key(&pricing.product_id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: pricing.product_id,
                }
                .into());
            }

            let product = Product::from_pricing(pricing);
            if !product.catalog().has_single_tier() {
                return Err(CoreError::MissingSingleTier {
                    product_id: product.id().to_string(),
                });
            }

            products.insert(product.id().to_string(), product);
        }

        Ok(ProductRegistry { products })
    }

    /// Looks up a product by its exact identifier.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    /// Product identifiers in sorted order.
    pub fn product_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.products.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
