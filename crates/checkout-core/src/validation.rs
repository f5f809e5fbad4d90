//! # Validation Module
//!
//! Basket and catalog validation for checkout-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (once)                                   │
//! │  ├── Names present, unique, bounded                                     │
//! │  └── Prices and bundle rules sane                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Basket validation (every run, THIS MODULE)                    │
//! │  ├── Basket not empty                                                   │
//! │  ├── Every entry names a catalog item                                   │
//! │  ├── Measure matches the item's sell mode and is positive               │
//! │  └── Measure within the per-entry maximum (every sell mode)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing                                                       │
//! │  └── Sell mode supported (UnhandledSellMode)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sell-mode support is left to pricing: a malformed basket and
//! a catalog that declares an unsupported mode are different failures.
//!
//! ## Usage
//! ```rust
//! use checkout_core::{validation::validate_basket, BasketEntry, Catalog, CatalogItem, Money};
//!
//! let catalog = Catalog::new(vec![CatalogItem::by_unit("Apple", Money::from_cents(65))]).unwrap();
//!
//! assert!(validate_basket(&[BasketEntry::units("Apple", 2)], &catalog).is_ok());
//! assert!(validate_basket(&[BasketEntry::units("Apple", 0)], &catalog).is_err());
//! ```

use crate::basket::BasketEntry;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult, CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::{DiscountRule, Measure, SellMode, Weight};
use crate::{MAX_ITEM_NAME_LEN, MAX_ITEM_QUANTITY};

// =============================================================================
// Basket Validator
// =============================================================================

/// Checks that a basket is well-formed before it is priced.
///
/// ## Rules (first failure wins, entries in insertion order)
/// ```text
/// basket empty?                         → BasketEmpty
/// entry item not in catalog?            → UnknownItem
/// ByUnit   + Units(q <= 0)              → InvalidQuantity
/// ByUnit   + Weight(_) / Mixed          → InvalidQuantity
/// ByWeight + Weight(w <= 0)             → InvalidQuantity
/// ByWeight + Units(_) / Mixed           → InvalidQuantity
/// any mode + |q| > MAX_ITEM_QUANTITY    → InvalidQuantity
/// any mode + |w| > MAX_ITEM_WEIGHT      → InvalidQuantity
/// Other    + anything else              → passes (pricing decides)
/// ```
pub fn validate_basket(basket: &[BasketEntry], catalog: &Catalog) -> CheckoutResult<()> {
    if basket.is_empty() {
        return Err(CheckoutError::BasketEmpty);
    }

    for entry in basket {
        let item = catalog
            .get(&entry.item)
            .ok_or_else(|| CheckoutError::UnknownItem(entry.item.clone()))?;

        validate_measure(&item.name, &item.sell_mode, &entry.measure)?;
    }

    Ok(())
}

/// Checks one measure against the sell mode of its item.
pub fn validate_measure(item: &str, mode: &SellMode, measure: &Measure) -> CheckoutResult<()> {
    match (mode, measure) {
        (SellMode::ByUnit, Measure::Units(qty)) if *qty <= 0 => {
            return Err(CheckoutError::invalid_quantity(item, "quantity must be positive"))
        }
        (SellMode::ByUnit, Measure::Weight(_) | Measure::Mixed { .. }) => {
            return Err(CheckoutError::invalid_quantity(
                item,
                "is sold by unit but was weighed",
            ))
        }
        (SellMode::ByWeight, Measure::Weight(weight)) if !weight.is_positive() => {
            return Err(CheckoutError::invalid_quantity(item, "weight must be positive"))
        }
        (SellMode::ByWeight, Measure::Units(_) | Measure::Mixed { .. }) => {
            return Err(CheckoutError::invalid_quantity(
                item,
                "is sold by weight but was counted",
            ))
        }
        _ => {}
    }

    validate_measure_bounds(item, measure)
}

/// Checks that a measure stays within the per-entry maximum.
///
/// Applies to every sell mode, so summing scans can never overflow.
pub fn validate_measure_bounds(item: &str, measure: &Measure) -> CheckoutResult<()> {
    if measure.units().unsigned_abs() > MAX_ITEM_QUANTITY.unsigned_abs() {
        return Err(CheckoutError::invalid_quantity(
            item,
            &format!("quantity cannot exceed {MAX_ITEM_QUANTITY}"),
        ));
    }

    if measure.weight().milli().unsigned_abs() > Weight::max_entry().milli().unsigned_abs() {
        return Err(CheckoutError::invalid_quantity(
            item,
            &format!("weight cannot exceed {}", Weight::max_entry()),
        ));
    }

    Ok(())
}

// =============================================================================
// Catalog Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_ITEM_NAME_LEN` characters
pub fn validate_item_name(name: &str) -> CatalogResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CatalogError::EmptyName);
    }

    if trimmed.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(CatalogError::NameTooLong {
            name: name.to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_unit_price(item: &str, price: Money) -> CatalogResult<()> {
    if price.is_negative() {
        return Err(CatalogError::NegativePrice {
            item: item.to_string(),
        });
    }

    Ok(())
}

/// Validates an "N for B" rule.
///
/// ## Rules
/// - N must be positive (a zero frequency would divide by zero when pricing)
/// - B must not be negative
pub fn validate_discount_rule(item: &str, rule: &DiscountRule) -> CatalogResult<()> {
    if rule.frequency == 0 {
        return Err(CatalogError::ZeroDiscountFrequency {
            item: item.to_string(),
        });
    }

    if rule.bundle_price.is_negative() {
        return Err(CatalogError::NegativeBundlePrice {
            item: item.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
