//! # Basket Source
//!
//! Collects scans from a basket file and `--scan` arguments.
//!
//! ## Scan Syntax
//! ```text
//! Apple        one unit
//! Apple=3      three units
//! Banana@0.5   0.5 weight units
//! ```
//!
//! File scans come first, then command-line scans, in the order given.

use std::fs;
use std::path::Path;

use checkout_core::{Basket, ScanRecord};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Parses one `--scan` argument.
pub fn parse_scan(spec: &str) -> AppResult<ScanRecord> {
    let invalid = |reason: &str| AppError::InvalidScan {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let (item, quantity, weight) = if let Some((name, weight)) = spec.split_once('@') {
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| invalid("weight must be a decimal number"))?;
        if !weight.is_finite() {
            return Err(invalid("weight must be a finite number"));
        }
        (name, 0, weight)
    } else if let Some((name, quantity)) = spec.split_once('=') {
        let quantity: i64 = quantity
            .trim()
            .parse()
            .map_err(|_| invalid("quantity must be a whole number"))?;
        (name, quantity, 0.0)
    } else {
        (spec, 1, 0.0)
    };

    let item = item.trim();
    if item.is_empty() {
        return Err(invalid("item name is missing"));
    }

    Ok(ScanRecord {
        item: item.to_string(),
        quantity,
        weight,
    })
}

/// Parses basket file JSON: an array of scan records.
pub fn parse_basket_file(path: &Path, json: &str) -> AppResult<Vec<ScanRecord>> {
    serde_json::from_str(json).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads scans from a basket file.
pub fn load_basket_file(path: &Path) -> AppResult<Vec<ScanRecord>> {
    let json = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_basket_file(path, &json)?;
    debug!(path = %path.display(), scans = records.len(), "Basket file read");
    Ok(records)
}

/// Builds the basket from an optional file and command-line scans.
///
/// An empty result is not an error here; the pricing run reports it.
pub fn assemble_basket(file: Option<&Path>, scans: &[String]) -> AppResult<Basket> {
    let mut records = match file {
        Some(path) => load_basket_file(path)?,
        None => Vec::new(),
    };

    for spec in scans {
        records.push(parse_scan(spec)?);
    }

    Ok(Basket::try_from(records)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{BasketEntry, CheckoutError, Measure, Weight};

    #[test]
    fn test_parse_scan_forms() {
        let apple = parse_scan("Apple").unwrap();
        assert_eq!((apple.item.as_str(), apple.quantity), ("Apple", 1));

        let apples = parse_scan("Apple=3").unwrap();
        assert_eq!(apples.quantity, 3);
        assert_eq!(apples.weight, 0.0);

        let banana = parse_scan(" Banana @ 0.5 ").unwrap();
        assert_eq!(banana.item, "Banana");
        assert_eq!(banana.quantity, 0);
        assert_eq!(banana.weight, 0.5);
    }

    #[test]
    fn test_parse_scan_keeps_non_positive_values_for_validation() {
        assert_eq!(parse_scan("Apple=-1").unwrap().quantity, -1);
        assert_eq!(parse_scan("Apple=0").unwrap().quantity, 0);
    }

    #[test]
    fn test_parse_scan_errors() {
        assert!(matches!(parse_scan("Apple=three"), Err(AppError::InvalidScan { .. })));
        assert!(matches!(parse_scan("Banana@heavy"), Err(AppError::InvalidScan { .. })));
        assert!(matches!(parse_scan("Banana@inf"), Err(AppError::InvalidScan { .. })));
        assert!(matches!(parse_scan("=2"), Err(AppError::InvalidScan { .. })));
    }

    #[test]
    fn test_assemble_from_scans() {
        let scans = vec!["Apple=2".to_string(), "Banana@1.5".to_string()];
        let basket = assemble_basket(None, &scans).unwrap();

        assert_eq!(
            basket.entries(),
            &[
                BasketEntry::units("Apple", 2),
                BasketEntry::weight("Banana", Weight::from_milli(1_500)),
            ]
        );
    }

    #[test]
    fn test_basket_file_mixed_record() {
        let records = parse_basket_file(
            Path::new("basket.json"),
            r#"[{"item": "Apple", "quantity": 1, "weight": 1.0}]"#,
        )
        .unwrap();
        let basket = Basket::try_from(records).unwrap();
        assert_eq!(
            basket.entries()[0].measure,
            Measure::Mixed {
                units: 1,
                weight: Weight::from_units(1),
            }
        );
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let err = assemble_basket(None, &["Banana@1e300".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Checkout(CheckoutError::InvalidQuantity { .. })
        ));
    }
}
