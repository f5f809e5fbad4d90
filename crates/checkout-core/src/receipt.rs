//! # Receipt Builder
//!
//! Orchestrates validation, compaction and pricing into a receipt.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  build_receipt(basket, catalog)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_basket ──► BasketEmpty / UnknownItem / InvalidQuantity        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compact ─────────► one entry per item, catalog order                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price (per line) ─► UnhandledSellMode / AmountOverflow                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt { items, total }                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure aborts the run; a partial receipt is never returned.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::basket::BasketEntry;
use crate::catalog::Catalog;
use crate::compaction::{compact, CompactedEntry};
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::pricing::price;
use crate::validation::validate_basket;

// =============================================================================
// Receipt
// =============================================================================

/// A priced receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    /// The compacted entry for one item.
    pub entry: CompactedEntry,
    /// Amount charged for the line, discounts applied.
    pub amount: Money,
}

/// The result of one pricing run.
///
/// Lines follow catalog order. Built only by [`build_receipt`] and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    items: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    /// Lines in catalog order.
    pub fn items(&self) -> &[ReceiptLine] {
        &self.items
    }

    /// Grand total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Finds the line for an item.
    pub fn entry(&self, name: &str) -> Option<&ReceiptLine> {
        self.items.iter().find(|line| line.entry.name() == name)
    }

    /// Number of distinct items purchased.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Prices a basket against a catalog.
///
/// ## Example
/// ```rust
/// use checkout_core::{build_receipt, Basket, Catalog, CatalogItem, DiscountRule, Money, Weight};
///
/// let catalog = Catalog::new(vec![
///     CatalogItem::by_unit("Apple", Money::from_cents(65)),
///     CatalogItem::by_unit("Orange", Money::from_cents(40))
///         .with_discount(DiscountRule::new(3, Money::from_cents(100))),
///     CatalogItem::by_weight("Banana", Money::from_cents(75)),
/// ])
/// .unwrap();
///
/// let mut basket = Basket::new();
/// basket.add_units("Orange", 5);
/// basket.add_weight("Banana", Weight::from_milli(500));
/// basket.add_units("Apple", 1);
///
/// let receipt = build_receipt(basket.entries(), &catalog).unwrap();
/// assert_eq!(receipt.line_count(), 3);
/// assert_eq!(receipt.total(), Money::from_mills(650 + 1_800 + 375));
/// ```
pub fn build_receipt(basket: &[BasketEntry], catalog: &Catalog) -> CheckoutResult<Receipt> {
    validate_basket(basket, catalog)?;

    let mut items = Vec::new();
    let mut total = Money::zero();

    for entry in compact(basket, catalog) {
        let amount = price(&entry)?;
        total = total
            .checked_add(amount)
            .ok_or_else(|| CheckoutError::amount_overflow(entry.name()))?;
        items.push(ReceiptLine { entry, amount });
    }

    Ok(Receipt { items, total })
}

// =============================================================================
// Unit Tests
// =============================================================================
