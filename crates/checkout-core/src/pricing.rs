//! # Pricing Engine
//!
//! Turns one compacted entry into a monetary amount.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ByUnit, no rule      qty × unit_price                                  │
//! │                                                                         │
//! │  ByUnit, N for B      ⌊qty / N⌋ × B  +  (qty mod N) × unit_price         │
//! │                       Orange 0.40, 3 for 1.00, qty 5:                   │
//! │                       1 × 1.00 + 2 × 0.40 = 1.80                        │
//! │                                                                         │
//! │  ByWeight             weight × unit_price (rules ignored)               │
//! │                                                                         │
//! │  Other(mode)          UnhandledSellMode                                 │
//! │                                                                         │
//! │  Any product out of range  AmountOverflow                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New sell modes are wired in here and nowhere else.

use crate::compaction::CompactedEntry;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::{DiscountRule, SellMode};

/// Prices one compacted entry.
///
/// ## Example
/// ```rust
/// use checkout_core::{pricing::price, CompactedEntry, CatalogItem, DiscountRule, Money, Weight};
///
/// let orange = CatalogItem::by_unit("Orange", Money::from_cents(40))
///     .with_discount(DiscountRule::new(3, Money::from_cents(100)));
/// let entry = CompactedEntry { item: orange, quantity: 10, weight: Weight::zero() };
///
/// assert_eq!(price(&entry), Ok(Money::from_cents(340)));
/// ```
pub fn price(entry: &CompactedEntry) -> CheckoutResult<Money> {
    let item = &entry.item;

    let amount = match &item.sell_mode {
        SellMode::ByUnit => match &item.discount {
            Some(rule) => price_bundled(entry.quantity, item.unit_price, rule),
            None => item.unit_price.checked_multiply_quantity(entry.quantity),
        },
        SellMode::ByWeight => item.unit_price.checked_multiply_weight(entry.weight),
        SellMode::Other(_) => {
            return Err(CheckoutError::UnhandledSellMode {
                item: item.name.clone(),
                mode: item.sell_mode.clone(),
            })
        }
    };

    amount.ok_or_else(|| CheckoutError::amount_overflow(&item.name))
}

/// Full bundles at the bundle price, the remainder at the unit price.
fn price_bundled(quantity: i64, unit_price: Money, rule: &DiscountRule) -> Option<Money> {
    let frequency = i64::from(rule.frequency);
    let bundles = quantity / frequency;
    let remainder = quantity % frequency;

    rule.bundle_price
        .checked_multiply_quantity(bundles)?
        .checked_add(unit_price.checked_multiply_quantity(remainder)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
