//! # Output
//!
//! Wraps a core receipt with an id and timestamp, and renders receipts and
//! catalogs as text or JSON.
//!
//! ## Text Receipt
//! ```text
//! Receipt 2f1c...e9   2026-10-17 09:30:00 UTC
//! Apple                  10 x $0.65                    $6.50
//! Orange                 20 x $0.40 (3 for $1.00)      $6.80
//! Banana              4.500 @ $0.75                   $3.375
//! ------------------------------------------------------------
//! TOTAL                                              $16.675
//! ```

use std::fmt::Write as _;

use checkout_core::{Catalog, CatalogItem, Receipt, ReceiptLine, SellMode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::OutputFormat;
use crate::error::AppResult;

const RULE_WIDTH: usize = 60;

// =============================================================================
// Issued Receipt
// =============================================================================

/// A receipt as handed to the customer: core receipt plus identity.
///
/// The core receipt is a pure function of basket and catalog; the id and
/// timestamp are added here, at the edge.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedReceipt {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    #[serde(flatten)]
    pub receipt: Receipt,
}

impl IssuedReceipt {
    /// Stamps a receipt with a fresh UUID v4 and the current time.
    pub fn new(receipt: Receipt) -> Self {
        IssuedReceipt {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            receipt,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders an issued receipt in the requested format.
pub fn render_receipt(issued: &IssuedReceipt, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(issued)?),
        OutputFormat::Text => Ok(receipt_text(issued)),
    }
}

/// Renders the catalog in the requested format.
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
        OutputFormat::Text => Ok(catalog_text(catalog)),
    }
}

fn receipt_text(issued: &IssuedReceipt) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Receipt {}   {}",
        issued.id,
        issued.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    for line in issued.receipt.items() {
        let _ = writeln!(
            out,
            "{:<16}{:>9} {:<26}{:>9}",
            line.entry.name(),
            measure_text(line),
            price_text(&line.entry.item),
            line.amount.to_string()
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = write!(
        out,
        "{:<16}{:>44}",
        "TOTAL",
        issued.receipt.total().to_string()
    );
    out
}

fn catalog_text(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|item| format!("{:<16}{:<11}{}", item.name, item.sell_mode, price_text(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `10 x` for counted lines, `4.500 @` for weighed ones.
fn measure_text(line: &ReceiptLine) -> String {
    match line.entry.item.sell_mode {
        SellMode::ByWeight => format!("{} @", line.entry.weight),
        _ => format!("{} x", line.entry.quantity),
    }
}

/// `$0.40 (3 for $1.00)`; weighed items never show a bundle rule.
fn price_text(item: &CatalogItem) -> String {
    match (&item.sell_mode, &item.discount) {
        (SellMode::ByUnit, Some(rule)) => format!(
            "{} ({} for {})",
            item.unit_price, rule.frequency, rule.bundle_price
        ),
        _ => item.unit_price.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
