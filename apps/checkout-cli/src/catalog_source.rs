//! # Catalog Source
//!
//! Loads the price list from a JSON file, or falls back to the built-in
//! house prices.
//!
//! ## File Format
//! ```json
//! [
//!   { "name": "Apple",  "sell_by": "by_unit",   "price_cents": 65 },
//!   { "name": "Orange", "sell_by": "by_unit",   "price_cents": 40,
//!     "discount": { "every": 3, "price_cents": 100 } },
//!   { "name": "Banana", "sell_by": "by_weight", "price_cents": 75 }
//! ]
//! ```
//!
//! `sell_by` values other than `by_unit` and `by_weight` are accepted here;
//! pricing such an item fails at checkout time.

use std::fs;
use std::path::Path;

use checkout_core::{Catalog, CatalogItem, CatalogResult, DiscountRule, Money, SellMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// One catalog entry as written in a price list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub sell_by: String,
    pub price_cents: i64,
    #[serde(default)]
    pub discount: Option<DiscountRecord>,
}

/// "every N for price_cents".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub every: u32,
    pub price_cents: i64,
}

impl From<CatalogRecord> for CatalogItem {
    fn from(record: CatalogRecord) -> Self {
        let item = CatalogItem::new(
            record.name,
            SellMode::from(record.sell_by),
            Money::from_cents(record.price_cents),
        );

        match record.discount {
            Some(d) => item.with_discount(DiscountRule::new(d.every, Money::from_cents(d.price_cents))),
            None => item,
        }
    }
}

/// The house price list used when no catalog file is configured.
pub fn default_catalog() -> CatalogResult<Catalog> {
    Catalog::new(vec![
        CatalogItem::by_unit("Apple", Money::from_cents(65)),
        CatalogItem::by_unit("Orange", Money::from_cents(40))
            .with_discount(DiscountRule::new(3, Money::from_cents(100))),
        CatalogItem::by_weight("Banana", Money::from_cents(75)),
    ])
}

/// Parses price list JSON.
pub fn parse_catalog(path: &Path, json: &str) -> AppResult<Catalog> {
    let records: Vec<CatalogRecord> =
        serde_json::from_str(json).map_err(|source| AppError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::new(records.into_iter().map(CatalogItem::from).collect())?;
    Ok(catalog)
}

/// Loads the catalog from `path`, or the house price list when `None`.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    let Some(path) = path else {
        let catalog = default_catalog()?;
        info!(items = catalog.len(), "Using built-in price list");
        return Ok(catalog);
    };

    debug!(path = %path.display(), "Reading catalog file");
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(path, &json)?;
    info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog().unwrap();
        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Orange", "Banana"]);

        let orange = catalog.get("Orange").unwrap();
        assert_eq!(
            orange.discount,
            Some(DiscountRule::new(3, Money::from_cents(100)))
        );
    }

    #[test]
    fn test_parse_catalog_file() {
        let json = r#"[
            {"name": "Apple", "sell_by": "by_unit", "price_cents": 65},
            {"name": "Orange", "sell_by": "by_unit", "price_cents": 40,
             "discount": {"every": 3, "price_cents": 100}},
            {"name": "Chicken", "sell_by": "test_case", "price_cents": 450}
        ]"#;
        let catalog = parse_catalog(Path::new("prices.json"), json).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("Chicken").map(|i| i.sell_mode.clone()),
            Some(SellMode::Other("test_case".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_catalog() {
        let json = r#"[
            {"name": "Orange", "sell_by": "by_unit", "price_cents": 40,
             "discount": {"every": 0, "price_cents": 100}}
        ]"#;
        let err = parse_catalog(Path::new("prices.json"), json).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));

        let err = parse_catalog(Path::new("prices.json"), "{not json").unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Some(Path::new("/nonexistent/checkout/prices.json"))).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
