//! # checkout-core: Pure Basket Pricing
//!
//! This crate prices a shopping basket against a catalog and produces a
//! receipt. Every function is pure: no I/O, no clocks, no logging.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │            Collaborator (checkout-cli, UI, tests)               │    │
//! │  │    load catalog ──► collect scans ──► display receipt           │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ build_receipt(&basket, &catalog)       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │    │
//! │  │   │ validation │─►│ compaction │─►│  pricing   │─►│ receipt  │  │    │
//! │  │   │  rules     │  │ merge scans│  │ N for B    │  │ total    │  │    │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └──────────┘  │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS        │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - SellMode, DiscountRule, Weight, Measure
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - CatalogItem and the validated Catalog
//! - [`basket`] - Basket entries and the loose ScanRecord input form
//! - [`validation`] - Basket and catalog validation
//! - [`compaction`] - Merging repeated scans
//! - [`pricing`] - Per-line pricing with bundle discounts
//! - [`receipt`] - Receipt and the `build_receipt` pipeline
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{build_receipt, Basket, Catalog, CatalogItem, DiscountRule, Money};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::by_unit("Orange", Money::from_cents(40))
//!         .with_discount(DiscountRule::new(3, Money::from_cents(100))),
//! ])
//! .unwrap();
//!
//! let mut basket = Basket::new();
//! basket.add_units("Orange", 2);
//! basket.add_units("Orange", 3);
//!
//! let receipt = build_receipt(basket.entries(), &catalog).unwrap();
//! assert_eq!(receipt.entry("Orange").unwrap().entry.quantity, 5);
//! assert_eq!(receipt.total(), Money::from_cents(180)); // 1 × 1.00 + 2 × 0.40
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod compaction;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketEntry, ScanRecord};
pub use catalog::{Catalog, CatalogItem};
pub use compaction::{compact, CompactedEntry};
pub use error::{CatalogError, CatalogResult, CheckoutError, CheckoutResult};
pub use money::Money;
pub use pricing::price;
pub use receipt::{build_receipt, Receipt, ReceiptLine};
pub use types::*;
pub use validation::validate_basket;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a catalog item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Maximum unit count on a single basket entry.
///
/// ## Business Reason
/// Catches a mistyped count, such as a barcode keyed into the quantity field.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;

/// Maximum weight on a single basket entry, in whole weight units.
pub const MAX_ITEM_WEIGHT_UNITS: i64 = 1_000_000;
