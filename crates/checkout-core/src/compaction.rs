//! # Basket Compaction
//!
//! Merges repeated scans of the same item into one entry per item.
//!
//! ```text
//! Basket (scan order)                 Compacted (catalog order)
//! ───────────────────                 ─────────────────────────
//! Banana  1.000                       Apple   qty 4
//! Apple   x1          compact()       Banana  4.000
//! Banana  3.000      ──────────►
//! Apple   x3
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::basket::BasketEntry;
use crate::catalog::{Catalog, CatalogItem};
use crate::types::Weight;

/// One line per distinct catalog item, with its measures summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompactedEntry {
    /// Snapshot of the catalog item.
    pub item: CatalogItem,
    /// Sum of unit quantities across scans.
    pub quantity: i64,
    /// Sum of weights across scans.
    pub weight: Weight,
}

impl CompactedEntry {
    /// Name of the item on this line.
    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// Merges every scan of the same item, walking the catalog in order.
///
/// Items with a zero summed quantity and zero summed weight are left out.
/// Sums clamp at the `i64` bounds instead of wrapping; validated baskets
/// never get near them.
/// Entries naming items outside the catalog are ignored; the validator
/// rejects those before a receipt is ever built.
pub fn compact(basket: &[BasketEntry], catalog: &Catalog) -> Vec<CompactedEntry> {
    catalog
        .iter()
        .filter_map(|item| {
            let (quantity, weight) = basket
                .iter()
                .filter(|entry| entry.item == item.name)
                .fold((0_i64, Weight::zero()), |(qty, weight), entry| {
                    (
                        qty.saturating_add(entry.measure.units()),
                        weight.saturating_add(entry.measure.weight()),
                    )
                });

            if quantity == 0 && weight.is_zero() {
                return None;
            }

            Some(CompactedEntry {
                item: item.clone(),
                quantity,
                weight,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Measure;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem::by_unit("Apple", Money::from_cents(65)),
            CatalogItem::by_unit("Orange", Money::from_cents(40)),
            CatalogItem::by_weight("Banana", Money::from_cents(75)),
        ])
        .unwrap()
    }

    #[test]
    fn test_merges_repeated_scans() {
        let basket = [
            BasketEntry::units("Apple", 5),
            BasketEntry::units("Apple", 2),
            BasketEntry::units("Apple", 3),
        ];
        let compacted = compact(&basket, &catalog());

        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].name(), "Apple");
        assert_eq!(compacted[0].quantity, 10);
        assert!(compacted[0].weight.is_zero());
    }

    #[test]
    fn test_catalog_order_not_scan_order() {
        let basket = [
            BasketEntry::weight("Banana", Weight::from_units(1)),
            BasketEntry::units("Orange", 1),
            BasketEntry::units("Apple", 1),
            BasketEntry::weight("Banana", Weight::from_milli(500)),
        ];
        let compacted = compact(&basket, &catalog());

        let names: Vec<&str> = compacted.iter().map(CompactedEntry::name).collect();
        assert_eq!(names, ["Apple", "Orange", "Banana"]);
        assert_eq!(compacted[2].weight, Weight::from_milli(1_500));
    }

    #[test]
    fn test_zero_sum_items_are_omitted() {
        let basket = [BasketEntry::units("Apple", 0), BasketEntry::units("Orange", 2)];
        let compacted = compact(&basket, &catalog());

        assert_eq!(compacted.len(), 1);
        assert_eq!(compacted[0].name(), "Orange");
    }

    #[test]
    fn test_mixed_measure_adds_to_both_sums() {
        let basket = [
            BasketEntry {
                item: "Apple".to_string(),
                measure: Measure::Mixed {
                    units: 2,
                    weight: Weight::from_milli(250),
                },
            },
            BasketEntry::units("Apple", 1),
        ];
        let compacted = compact(&basket, &catalog());

        assert_eq!(compacted[0].quantity, 3);
        assert_eq!(compacted[0].weight, Weight::from_milli(250));
    }

    #[test]
    fn test_sums_clamp_instead_of_wrapping() {
        let basket = [
            BasketEntry::units("Apple", i64::MAX),
            BasketEntry::units("Apple", 1),
        ];
        assert_eq!(compact(&basket, &catalog())[0].quantity, i64::MAX);
    }

    #[test]
    fn test_unknown_items_are_ignored() {
        let basket = [BasketEntry::units("Kiwi", 4)];
        assert!(compact(&basket, &catalog()).is_empty());
    }
}
