//! # Output Reporter
//!
//! Renders a [`Receipt`] for the cashier.
//!
//! ## Text Layout
//! ```text
//! A    x3   3-pack x1 @ $3.00                        $3.00
//! B    x2   single x2 @ $4.25                        $8.50
//! warning: Scanned item "F" does not have a price model. This item will be ignored.
//! Total Price: $11.50
//! ```

use serde::Serialize;
use tally_core::{ProductRegistry, Receipt, TierUsage};

use crate::error::TerminalResult;

fn tier_label(usage: &TierUsage) -> String {
    let pack = if usage.size == 1 {
        "single".to_string()
    } else {
        format!("{}-pack", usage.size)
    };
    format!("{} x{} @ {}", pack, usage.count, usage.price)
}

/// Renders the receipt as plain text, one line per product.
pub fn render_text(receipt: &Receipt) -> String {
    let mut out = String::new();

    for line in &receipt.lines {
        let tiers = line
            .tiers
            .iter()
            .map(tier_label)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{:<4} x{:<3} {:<40} {:>8}\n",
            line.product_id,
            line.quantity,
            tiers,
            line.cost.to_string()
        ));
    }

    for warning in &receipt.warnings {
        out.push_str(&format!("warning: {}\n", warning));
    }

    out.push_str(&format!("Total Price: {}\n", receipt.total));
    out
}

/// JSON shape: the receipt plus the total as a plain decimal number.
#[derive(Serialize)]
struct ReceiptReport<'a> {
    #[serde(flatten)]
    receipt: &'a Receipt,
    total_amount: f64,
}

/// Renders the receipt as pretty-printed JSON.
pub fn render_json(receipt: &Receipt) -> TerminalResult<String> {
    let report = ReceiptReport {
        receipt,
        total_amount: receipt.total.as_decimal(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the loaded price list, one product per line.
pub fn render_price_list(registry: &ProductRegistry) -> String {
    let mut out = String::new();

    for id in registry.product_ids() {
        let Some(product) = registry.get(id) else {
            continue;
        };
        let tiers = product
            .catalog()
            .tiers()
            .iter()
            .map(|tier| format!("{} for {}", tier.size, tier.price))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{}: {}\n", id, tiers));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceList;
    use tally_core::PointOfSaleTerminal;

    fn receipt_for(items: &[&str]) -> Receipt {
        let registry = PriceList::default().into_registry().unwrap();
        let mut terminal = PointOfSaleTerminal::new(&registry);
        for item in items {
            terminal.scan(*item);
        }
        terminal.receipt().unwrap()
    }

    #[test]
    fn test_text_total_line() {
        let text = render_text(&receipt_for(&["A", "B", "C", "D", "A", "B", "A"]));
        assert!(text.ends_with("Total Price: $13.25\n"));
        assert!(text.contains("3-pack x1 @ $3.00"));
        assert!(text.contains("single x2 @ $4.25"));
    }

    #[test]
    fn test_text_bulk_and_single_on_one_line() {
        let text = render_text(&receipt_for(&["C"; 7]));
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("C"));
        assert!(first.contains("6-pack x1 @ $5.00, single x1 @ $1.00"));
        assert!(first.ends_with("$6.00"));
    }

    #[test]
    fn test_text_layout_is_exact() {
        let text = render_text(&receipt_for(&["A", "A", "A", "A", "F"]));
        let expected = format!(
            "{:<4} x{:<3} {:<40} {:>8}\n\
             warning: Scanned item \"F\" does not have a price model. This item will be ignored.\n\
             Total Price: $4.25\n",
            "A", 4, "3-pack x1 @ $3.00, single x1 @ $1.25", "$4.25"
        );
        assert_eq!(text, expected);
        assert!(text.starts_with("A    x4   3-pack x1 @ $3.00, single x1 @ $1.25"));
    }

    #[test]
    fn test_text_warning_lines() {
        let text = render_text(&receipt_for(&["F"]));
        assert_eq!(
            text,
            "warning: Scanned item \"F\" does not have a price model. This item will be ignored.\n\
             Total Price: $0.00\n"
        );
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&receipt_for(&["A", "B", "F", "A", "A"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 725);
        assert_eq!(value["total_amount"], 7.25);
        assert_eq!(value["warnings"][0]["product_id"], "F");
        assert_eq!(value["lines"].as_array().unwrap().len(), 2);
        assert_eq!(value["lines"][0]["partition"], serde_json::json!([[3, 1]]));
    }

    #[test]
    fn test_price_list_rendering() {
        let registry = PriceList::default().into_registry().unwrap();
        let text = render_price_list(&registry);
        assert!(text.starts_with("A: 1 for $1.25, 3 for $3.00\n"));
        assert!(text.contains("D: 1 for $0.75\n"));
    }
}
