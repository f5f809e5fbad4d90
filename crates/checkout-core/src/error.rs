//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                       │
//! │  ├── CheckoutError  - A pricing run failed (no receipt produced)        │
//! │  └── CatalogError   - A catalog could not be constructed                │
//! │                                                                         │
//! │  checkout-cli errors (app)                                              │
//! │  └── AppError       - File, JSON, scan spec and config failures         │
//! │                                                                         │
//! │  Flow: CheckoutError / CatalogError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the item name in every per-item error
//! 3. Errors are enum variants, never String
//! 4. Every error aborts the whole run; there is no partial receipt

use thiserror::Error;

use crate::types::SellMode;

// =============================================================================
// Checkout Error
// =============================================================================

/// Failures of a single pricing run.
///
/// There is no distinction between operator error and catalog error here:
/// both surface as a failed run carrying a descriptive message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The basket has no entries at all.
    #[error("Basket is empty")]
    BasketEmpty,

    /// An entry's quantity or weight is unusable for its item.
    ///
    /// ## When This Occurs
    /// - Unit quantity is zero or negative for an item sold by unit
    /// - Weight is zero or negative for an item sold by weight
    /// - The wrong measure was supplied (a weight for a unit item, or
    ///   a count for a weighed item)
    /// - A scan record carried both a quantity and a weight for an item sold
    ///   by unit or by weight
    /// - A quantity or weight exceeds the per-entry maximum
    #[error("Basket has invalid number of items: {item} {reason}")]
    InvalidQuantity { item: String, reason: String },

    /// An entry names an item that is not in the catalog.
    #[error("Item not in catalog: {0}")]
    UnknownItem(String),

    /// The pricing engine has no rule for the item's sell mode.
    ///
    /// ## When This Occurs
    /// Only during pricing. Validation never rejects a sell mode, so a
    /// well-formed basket can still fail here when the catalog declares a
    /// mode the engine does not support.
    #[error("Sell By type not handled: {mode} (item {item})")]
    UnhandledSellMode { item: String, mode: SellMode },

    /// A line amount or the running total does not fit in [`crate::Money`].
    ///
    /// `item` is the line being priced when the overflow happened.
    #[error("Amount out of range while pricing {item}")]
    AmountOverflow { item: String },
}

impl CheckoutError {
    pub(crate) fn amount_overflow(item: &str) -> Self {
        CheckoutError::AmountOverflow {
            item: item.to_string(),
        }
    }

    /// Shorthand for [`CheckoutError::InvalidQuantity`].
    pub(crate) fn invalid_quantity(item: &str, reason: &str) -> Self {
        CheckoutError::InvalidQuantity {
            item: item.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog construction errors.
///
/// A catalog is checked once, when it is built. Pricing runs can then rely
/// on names being unique and prices being non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Item name is missing or blank.
    #[error("item name is required")]
    EmptyName,

    /// Item name is longer than allowed.
    #[error("item name '{name}' must be at most {max} characters")]
    NameTooLong { name: String, max: usize },

    /// Unit price below zero.
    #[error("unit price of {item} must not be negative")]
    NegativePrice { item: String },

    /// Discount rule with a frequency of zero.
    #[error("discount frequency of {item} must be positive")]
    ZeroDiscountFrequency { item: String },

    /// Discount rule with a bundle price below zero.
    #[error("bundle price of {item} must not be negative")]
    NegativeBundlePrice { item: String },

    /// Two items share a name.
    #[error("item '{0}' already exists")]
    DuplicateItem(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
