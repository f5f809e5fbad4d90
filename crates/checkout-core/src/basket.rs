//! # Basket
//!
//! The caller-supplied purchases for one transaction.
//!
//! ## Entry Forms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  External input (file, UI)          Core                                │
//! │  ─────────────────────────          ────                                │
//! │  ScanRecord                         BasketEntry                         │
//! │  { item, quantity, weight } ──────► { item, Measure::Units(q) }         │
//! │                                     { item, Measure::Weight(w) }        │
//! │                                     { item, Measure::Mixed{q, w} }      │
//! │                                                                         │
//! │  Weight NaN, infinite or too large? → InvalidQuantity                   │
//! │  Mixed entries are judged by the validator against the sell mode        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same item may be scanned many times; the entries live side by side
//! here and are merged by [`crate::compaction::compact`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CheckoutError, CheckoutResult};
use crate::types::{Measure, Weight};

// =============================================================================
// Basket Entry
// =============================================================================

/// One scan: a catalog item name plus what was counted or weighed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasketEntry {
    /// Name of the catalog item.
    pub item: String,
    /// Unit count or weight.
    pub measure: Measure,
}

impl BasketEntry {
    /// Entry for a counted item.
    pub fn units(item: impl Into<String>, quantity: i64) -> Self {
        BasketEntry {
            item: item.into(),
            measure: Measure::Units(quantity),
        }
    }

    /// Entry for a weighed item.
    pub fn weight(item: impl Into<String>, weight: Weight) -> Self {
        BasketEntry {
            item: item.into(),
            measure: Measure::Weight(weight),
        }
    }
}

// =============================================================================
// Scan Record
// =============================================================================

/// Loose external form of a basket entry with both measures present.
///
/// Absent fields default to zero. Convert with `BasketEntry::try_from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScanRecord {
    pub item: String,
    #[serde(default)]
    pub quantity: i64,
    /// Decimal weight as read from a scale.
    #[serde(default)]
    pub weight: f64,
}

impl TryFrom<ScanRecord> for BasketEntry {
    type Error = CheckoutError;

    /// ## Rules
    /// - weight not a usable reading → `InvalidQuantity`
    /// - quantity and weight both non-zero → `Measure::Mixed`
    /// - non-zero weight → `Measure::Weight`
    /// - otherwise → `Measure::Units(quantity)`, zero included, so the
    ///   validator reports it against the item's sell mode
    fn try_from(record: ScanRecord) -> CheckoutResult<Self> {
        let weight = Weight::from_decimal(record.weight).ok_or_else(|| {
            CheckoutError::invalid_quantity(&record.item, "weight is not a usable reading")
        })?;

        let measure = match (record.quantity, weight.is_zero()) {
            (0, false) => Measure::Weight(weight),
            (qty, true) => Measure::Units(qty),
            (qty, false) => Measure::Mixed { units: qty, weight },
        };

        Ok(BasketEntry {
            item: record.item,
            measure,
        })
    }
}

// =============================================================================
// Basket
// =============================================================================

/// An ordered list of basket entries.
///
/// Entries are never merged on insert; insertion order is kept so the
/// validator reports the first bad scan deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket {
    entries: Vec<BasketEntry>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket::default()
    }

    /// Adds a counted scan.
    pub fn add_units(&mut self, item: impl Into<String>, quantity: i64) {
        self.entries.push(BasketEntry::units(item, quantity));
    }

    /// Adds a weighed scan.
    pub fn add_weight(&mut self, item: impl Into<String>, weight: Weight) {
        self.entries.push(BasketEntry::weight(item, weight));
    }

    /// Adds an entry as-is.
    pub fn push(&mut self, entry: BasketEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[BasketEntry] {
        &self.entries
    }

    /// Number of scans, not distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<BasketEntry>> for Basket {
    fn from(entries: Vec<BasketEntry>) -> Self {
        Basket { entries }
    }
}

impl FromIterator<BasketEntry> for Basket {
    fn from_iter<I: IntoIterator<Item = BasketEntry>>(iter: I) -> Self {
        Basket {
            entries: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Vec<ScanRecord>> for Basket {
    type Error = CheckoutError;

    /// Converts every record, stopping at the first unusable weight.
    fn try_from(records: Vec<ScanRecord>) -> CheckoutResult<Self> {
        records.into_iter().map(BasketEntry::try_from).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item: &str, quantity: i64, weight: f64) -> ScanRecord {
        ScanRecord {
            item: item.to_string(),
            quantity,
            weight,
        }
    }

    #[test]
    fn test_scan_record_conversion() {
        assert_eq!(
            BasketEntry::try_from(record("Apple", 3, 0.0)),
            Ok(BasketEntry::units("Apple", 3))
        );
        assert_eq!(
            BasketEntry::try_from(record("Banana", 0, 0.5)),
            Ok(BasketEntry::weight("Banana", Weight::from_milli(500)))
        );
        // Nothing supplied stays a zero count for the validator to judge
        assert_eq!(
            BasketEntry::try_from(record("Apple", 0, 0.0)),
            Ok(BasketEntry::units("Apple", 0))
        );
    }

    #[test]
    fn test_mixed_scan_record_kept_for_validation() {
        assert_eq!(
            BasketEntry::try_from(record("Apple", 1, 1.0)),
            Ok(BasketEntry {
                item: "Apple".to_string(),
                measure: Measure::Mixed {
                    units: 1,
                    weight: Weight::from_units(1),
                },
            })
        );
    }

    #[test]
    fn test_unusable_weight_rejected() {
        for weight in [f64::NAN, f64::INFINITY, 1e300] {
            let err = BasketEntry::try_from(record("Banana", 0, weight)).unwrap_err();
            assert!(matches!(err, CheckoutError::InvalidQuantity { ref item, .. } if item == "Banana"));
        }
    }

    #[test]
    fn test_huge_weight_from_json_rejected() {
        let records: Vec<ScanRecord> =
            serde_json::from_str(r#"[{"item": "Banana", "weight": 1e300}]"#).unwrap();
        assert!(matches!(
            Basket::try_from(records),
            Err(CheckoutError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_scan_record_defaults() {
        let records: Vec<ScanRecord> =
            serde_json::from_str(r#"[{"item": "Apple", "quantity": 2}, {"item": "Banana", "weight": 1.25}]"#)
                .unwrap();
        let basket = Basket::try_from(records).unwrap();

        assert_eq!(
            basket.entries(),
            &[
                BasketEntry::units("Apple", 2),
                BasketEntry::weight("Banana", Weight::from_milli(1_250)),
            ]
        );
    }

    #[test]
    fn test_basket_keeps_duplicates_in_order() {
        let mut basket = Basket::new();
        assert!(basket.is_empty());

        basket.add_units("Apple", 1);
        basket.add_weight("Banana", Weight::from_units(1));
        basket.add_units("Apple", 3);
        assert_eq!(basket.len(), 3);
        assert_eq!(basket.entries()[2], BasketEntry::units("Apple", 3));

        basket.clear();
        assert!(basket.is_empty());
    }
}
