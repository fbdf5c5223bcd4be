//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Prices a basket of scanned items under bulk tier pricing.
///
/// Items may be given as arguments (`tally A,B,C` or `tally A B C`);
/// otherwise one comma-separated line is read from stdin.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Scanned product identifiers
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,

    /// TOML price list (defaults to $TALLY_PRICING, then the demo prices)
    #[arg(short, long, value_name = "FILE")]
    pub pricing: Option<PathBuf>,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the loaded price list and exit
    #[arg(long)]
    pub list_prices: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
