//! # Catalog
//!
//! The fixed list of sellable items and their pricing rules.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collaborator (file, defaults, test)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::new(items) ← checks names, prices, discount rules ONCE        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  &Catalog passed to every build_receipt() call (read-only)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog order is significant: receipts list their lines in this order,
//! whatever order the items were scanned in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;
use crate::types::{DiscountRule, SellMode};
use crate::validation::{validate_discount_rule, validate_item_name, validate_unit_price};

// =============================================================================
// Catalog Item
// =============================================================================

/// An item available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Unique display name, also the key basket entries refer to.
    pub name: String,

    /// How the item is measured at the till.
    #[ts(as = "String")]
    pub sell_mode: SellMode,

    /// Price per unit, or per weight unit for weighed items.
    pub unit_price: Money,

    /// Optional "N for B" bundle rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountRule>,
}

impl CatalogItem {
    /// Creates an item with no discount rule.
    pub fn new(name: impl Into<String>, sell_mode: SellMode, unit_price: Money) -> Self {
        CatalogItem {
            name: name.into(),
            sell_mode,
            unit_price,
            discount: None,
        }
    }

    /// Creates an item sold by unit.
    pub fn by_unit(name: impl Into<String>, unit_price: Money) -> Self {
        CatalogItem::new(name, SellMode::ByUnit, unit_price)
    }

    /// Creates an item sold by weight.
    pub fn by_weight(name: impl Into<String>, unit_price: Money) -> Self {
        CatalogItem::new(name, SellMode::ByWeight, unit_price)
    }

    /// Attaches a bundle rule.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{CatalogItem, DiscountRule, Money};
    ///
    /// let orange = CatalogItem::by_unit("Orange", Money::from_cents(40))
    ///     .with_discount(DiscountRule::new(3, Money::from_cents(100)));
    /// assert!(orange.discount.is_some());
    /// ```
    pub fn with_discount(mut self, rule: DiscountRule) -> Self {
        self.discount = Some(rule);
        self
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, validated collection of catalog items.
///
/// ## Invariants
/// - Item names are non-empty and unique
/// - Unit prices and bundle prices are non-negative
/// - Discount frequencies are positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogItem>", into = "Vec<CatalogItem>")]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, checking every item.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Catalog, CatalogError, CatalogItem, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     CatalogItem::by_unit("Apple", Money::from_cents(65)),
    ///     CatalogItem::by_weight("Banana", Money::from_cents(75)),
    /// ])
    /// .unwrap();
    /// assert_eq!(catalog.len(), 2);
    ///
    /// let duplicate = Catalog::new(vec![
    ///     CatalogItem::by_unit("Apple", Money::from_cents(65)),
    ///     CatalogItem::by_unit("Apple", Money::from_cents(70)),
    /// ]);
    /// assert_eq!(duplicate, Err(CatalogError::DuplicateItem("Apple".to_string())));
    /// ```
    pub fn new(items: Vec<CatalogItem>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            validate_item_name(&item.name)?;
            validate_unit_price(&item.name, item.unit_price)?;
            if let Some(rule) = &item.discount {
                validate_discount_rule(&item.name, rule)?;
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateItem(item.name.clone()));
            }
        }

        Ok(Catalog { items })
    }

    /// Looks up an item by name.
    pub fn get(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Checks whether an item with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<CatalogItem>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<CatalogItem>) -> CatalogResult<Self> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<CatalogItem> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
