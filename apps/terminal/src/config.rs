//! # Terminal Configuration
//!
//! Loads the price list and output settings at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. CLI flags (`--pricing`, `--json`)
//! 2. Environment variables (`TALLY_PRICING`, `TALLY_OUTPUT`)
//! 3. Built-in demo price list, text output
//!
//! ## Price List File Format
//! ```toml
//! [[products]]
//! id = "A"
//! tiers = [
//!     { size = 1, price = 1.25 },
//!     { size = 3, price = "3.00" },
//! ]
//!
//! [[products]]
//! id = "B"
//! tiers = [{ size = 1, price = 4.25 }]
//! ```
//!
//! Prices may be TOML floats, integers or strings; all of them are parsed
//! exactly into cents. Sizes of zero or less are accepted here and dropped
//! when the catalog is built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tally_core::{Money, ProductPricing, ProductRegistry, TierEntry};
use tracing::{debug, info};

use crate::error::{TerminalError, TerminalResult};

/// Environment variable naming a price list file.
pub const PRICING_ENV: &str = "TALLY_PRICING";

/// Environment variable selecting the output format.
pub const OUTPUT_ENV: &str = "TALLY_OUTPUT";

// =============================================================================
// Output Format
// =============================================================================

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines ending in `Total Price: $x.xx`.
    #[default]
    Text,

    /// The full receipt as pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = TerminalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TerminalError::InvalidEnv {
                var: OUTPUT_ENV.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Resolves the output format: `--json` wins, then `TALLY_OUTPUT`.
pub fn resolve_output(json_flag: bool, env_value: Option<&str>) -> TerminalResult<OutputFormat> {
    if json_flag {
        return Ok(OutputFormat::Json);
    }
    match env_value {
        Some(value) => value.parse(),
        None => Ok(OutputFormat::default()),
    }
}

// =============================================================================
// Price List
// =============================================================================

/// A tier price as written in the price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl PriceValue {
    /// Converts to exact cents.
    ///
    /// Floats go through their shortest decimal rendering (`1.25` → `"1.25"`),
    /// so a value typed with two decimals comes out exact.
    pub fn to_money(&self) -> Result<Money, String> {
        match self {
            PriceValue::Text(text) => Money::parse_decimal(text).map_err(|e| e.to_string()),
            PriceValue::Integer(whole) => whole
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| format!("{} is out of range", whole)),
            PriceValue::Float(value) if value.is_finite() => {
                Money::parse_decimal(&value.to_string()).map_err(|e| e.to_string())
            }
            PriceValue::Float(value) => Err(format!("{} is not a finite number", value)),
        }
    }
}

/// One tier line of the price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub size: i64,
    pub price: PriceValue,
}

/// One product of the price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    #[serde(default)]
    pub tiers: Vec<TierConfig>,
}

/// The whole price list, as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceList {
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

impl Default for PriceList {
    /// The demo store: apples, bananas, candy, dental floss.
    ///
    /// ## Default Prices
    /// - A: $1.25 each or 3 for $3.00
    /// - B: $4.25 each
    /// - C: $1.00 each or 6 for $5.00
    /// - D: $0.75 each
    fn default() -> Self {
        let product = |id: &str, tiers: &[(i64, &str)]| ProductConfig {
            id: id.to_string(),
            tiers: tiers
                .iter()
                .map(|&(size, price)| TierConfig {
                    size,
                    price: PriceValue::Text(price.to_string()),
                })
                .collect(),
        };

        PriceList {
            products: vec![
                product("A", &[(1, "1.25"), (3, "3.00")]),
                product("B", &[(1, "4.25")]),
                product("C", &[(1, "1.00"), (6, "5.00")]),
                product("D", &[(1, "0.75")]),
            ],
        }
    }
}

impl PriceList {
    /// Loads the price list.
    ///
    /// ## Lookup
    /// 1. `explicit` path (from `--pricing`)
    /// 2. `TALLY_PRICING`
    /// 3. [`PriceList::default`]
    ///
    /// A path given through either of the first two must exist; silently
    /// falling back to demo prices would charge the wrong amounts.
    pub fn load(explicit: Option<PathBuf>) -> TerminalResult<Self> {
        let path = explicit.or_else(|| std::env::var_os(PRICING_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No price list configured, using demo prices");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a TOML price list file.
    pub fn from_file(path: &Path) -> TerminalResult<Self> {
        if !path.exists() {
            return Err(TerminalError::PriceListNotFound(path.to_path_buf()));
        }

        info!(?path, "Loading price list from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> TerminalResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Converts to core pricing definitions, turning every price into cents.
    pub fn to_pricing(&self) -> TerminalResult<Vec<ProductPricing>> {
        self.products
            .iter()
            .map(|product| {
                let tiers = product
                    .tiers
                    .iter()
                    .map(|tier| {
                        let price = tier.price.to_money().map_err(|reason| {
                            TerminalError::InvalidPrice {
                                product_id: product.id.clone(),
                                reason,
                            }
                        })?;
                        Ok(TierEntry::new(tier.size, price))
                    })
                    .collect::<TerminalResult<Vec<_>>>()?;
                Ok(ProductPricing::new(product.id.clone(), tiers))
            })
            .collect()
    }

    /// Validates the price list and builds the registry.
    pub fn into_registry(self) -> TerminalResult<ProductRegistry> {
        let registry = ProductRegistry::from_pricing(self.to_pricing()?)?;
        info!(products = registry.len(), "Price list loaded");
        Ok(registry)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FOUR_TIERS: &str = r#"
        [[products]]
        id = "A"
        tiers = [
            { size = 1, price = 1 },
            { size = 5, price = 4.5 },
            { size = 10, price = "8.00" },
            { size = 50, price = 30 },
            { size = 0, price = 0.01 },
        ]
    "#;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_resolve_output_precedence() {
        assert_eq!(resolve_output(true, Some("text")).unwrap(), OutputFormat::Json);
        assert_eq!(resolve_output(false, Some("json")).unwrap(), OutputFormat::Json);
        assert_eq!(resolve_output(false, None).unwrap(), OutputFormat::Text);
        assert!(resolve_output(false, Some("yaml")).is_err());
    }

    #[test]
    fn test_price_value_conversion() {
        assert_eq!(PriceValue::Float(1.25).to_money().unwrap().cents(), 125);
        assert_eq!(PriceValue::Float(0.1).to_money().unwrap().cents(), 10);
        assert_eq!(PriceValue::Float(3.0).to_money().unwrap().cents(), 300);
        assert_eq!(PriceValue::Integer(30).to_money().unwrap().cents(), 3000);
        assert_eq!(PriceValue::Text("0.75".into()).to_money().unwrap().cents(), 75);

        assert!(PriceValue::Float(1.255).to_money().is_err());
        assert!(PriceValue::Float(f64::NAN).to_money().is_err());
        assert!(PriceValue::Text("cheap".into()).to_money().is_err());
        assert!(PriceValue::Integer(i64::MAX).to_money().is_err());
    }

    #[test]
    fn test_default_price_list_builds() {
        let registry = PriceList::default().into_registry().unwrap();
        assert_eq!(registry.product_ids(), vec!["A", "B", "C", "D"]);
        assert_eq!(
            registry.get("C").unwrap().catalog().price_for(6).unwrap(),
            Money::from_cents(500)
        );
    }

    #[test]
    fn test_parse_toml_price_list() {
        let price_list = PriceList::from_toml(FOUR_TIERS).unwrap();
        assert_eq!(price_list.products.len(), 1);
        assert_eq!(price_list.products[0].tiers.len(), 5);

        let registry = price_list.into_registry().unwrap();
        let catalog = registry.get("A").unwrap().catalog();
        assert_eq!(catalog.sizes(), vec![1, 5, 10, 50]);
        assert_eq!(catalog.price_for(5).unwrap(), Money::from_cents(450));
    }

    #[test]
    fn test_invalid_price_names_product() {
        let toml = r#"
            [[products]]
            id = "Z"
            tiers = [{ size = 1, price = "1.999" }]
        "#;
        let err = PriceList::from_toml(toml).unwrap().to_pricing().unwrap_err();
        assert!(matches!(err, TerminalError::InvalidPrice { ref product_id, .. } if product_id == "Z"));
    }

    #[test]
    fn test_missing_single_tier_rejected() {
        let toml = r#"
            [[products]]
            id = "C"
            tiers = [{ size = 6, price = 5 }]
        "#;
        let err = PriceList::from_toml(toml).unwrap().into_registry().unwrap_err();
        assert!(matches!(err, TerminalError::Pricing(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            PriceList::from_toml("[[products]]\nid = 5"),
            Err(TerminalError::PriceListParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FOUR_TIERS.as_bytes()).unwrap();

        let price_list = PriceList::from_file(file.path()).unwrap();
        assert_eq!(price_list.products[0].id, "A");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("prices.toml");
        assert!(matches!(
            PriceList::load(Some(missing)),
            Err(TerminalError::PriceListNotFound(_))
        ));
    }
}
