//! End-to-end checkout scenarios against the house price list.

use checkout_core::{
    build_receipt, Basket, BasketEntry, Catalog, CatalogItem, CheckoutError, DiscountRule, Money,
    ScanRecord, SellMode, Weight, MAX_ITEM_QUANTITY,
};

fn house_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogItem::by_unit("Apple", Money::from_cents(65)),
        CatalogItem::by_unit("Orange", Money::from_cents(40))
            .with_discount(DiscountRule::new(3, Money::from_cents(100))),
        CatalogItem::by_weight("Banana", Money::from_cents(75)),
        CatalogItem::new(
            "Chicken",
            SellMode::Other("test_case".to_string()),
            Money::from_cents(450),
        ),
    ])
    .expect("house catalog is valid")
}

fn total_of(basket: &Basket) -> Money {
    build_receipt(basket.entries(), &house_catalog())
        .expect("basket prices")
        .total()
}

#[test]
fn scenario_empty_basket_fails() {
    let result = build_receipt(&[], &house_catalog());
    assert_eq!(result, Err(CheckoutError::BasketEmpty));
}

#[test]
fn scenario_bad_measures_fail_with_invalid_quantity() {
    let catalog = house_catalog();
    let cases = [
        BasketEntry::units("Apple", 0),
        BasketEntry::units("Apple", -1),
        BasketEntry::weight("Banana", Weight::zero()),
        BasketEntry::weight("Apple", Weight::from_units(1)),
        BasketEntry::units("Banana", 1),
    ];

    for entry in cases {
        let result = build_receipt(std::slice::from_ref(&entry), &catalog);
        assert!(
            matches!(result, Err(CheckoutError::InvalidQuantity { .. })),
            "{entry:?} should be rejected, got {result:?}"
        );
    }
}

fn scan(item: &str, quantity: i64, weight: f64) -> ScanRecord {
    ScanRecord {
        item: item.to_string(),
        quantity,
        weight,
    }
}

fn price_records(records: Vec<ScanRecord>) -> Result<Money, CheckoutError> {
    let basket = Basket::try_from(records)?;
    Ok(build_receipt(basket.entries(), &house_catalog())?.total())
}

#[test]
fn scenario_mixed_scan_record_fails_with_invalid_quantity() {
    for item in ["Apple", "Banana"] {
        let result = price_records(vec![scan(item, 1, 1.0)]);
        assert!(
            matches!(result, Err(CheckoutError::InvalidQuantity { item: ref name, .. }) if name == item),
            "{item}: got {result:?}"
        );
    }
}

#[test]
fn scenario_mixed_scan_record_for_unsupported_mode_reaches_pricing() {
    let result = price_records(vec![scan("Chicken", 1, 1.0)]);
    assert!(matches!(result, Err(CheckoutError::UnhandledSellMode { .. })));
}

#[test]
fn scenario_mixed_scan_record_does_not_hide_earlier_error() {
    let result = price_records(vec![scan("Kiwi", 1, 0.0), scan("Apple", 1, 1.0)]);
    assert_eq!(result, Err(CheckoutError::UnknownItem("Kiwi".to_string())));

    let result = price_records(vec![scan("Apple", 0, 0.0), scan("Apple", 1, 1.0)]);
    assert!(matches!(
        result,
        Err(CheckoutError::InvalidQuantity { ref reason, .. }) if reason.contains("positive")
    ));
}

#[test]
fn scenario_huge_quantities_fail_instead_of_overflowing() {
    let result = build_receipt(
        &[
            BasketEntry::units("Apple", i64::MAX),
            BasketEntry::units("Apple", 1),
        ],
        &house_catalog(),
    );
    assert!(matches!(result, Err(CheckoutError::InvalidQuantity { .. })));

    let result = build_receipt(
        &[BasketEntry::units("Apple", 100_000_000_000_000_000)],
        &house_catalog(),
    );
    assert!(matches!(result, Err(CheckoutError::InvalidQuantity { .. })));

    let result = price_records(vec![scan("Banana", 0, 1e300)]);
    assert!(matches!(result, Err(CheckoutError::InvalidQuantity { .. })));
}

#[test]
fn scenario_many_maximum_scans_still_price() {
    let basket: Basket = (0..10)
        .map(|_| BasketEntry::units("Apple", MAX_ITEM_QUANTITY))
        .collect();

    assert_eq!(
        total_of(&basket),
        Money::from_cents(65).checked_multiply_quantity(10 * MAX_ITEM_QUANTITY).unwrap()
    );
}

#[test]
fn scenario_unhandled_sell_mode_fails_after_validation() {
    let result = build_receipt(&[BasketEntry::units("Chicken", 1)], &house_catalog());

    match result {
        Err(CheckoutError::UnhandledSellMode { item, mode }) => {
            assert_eq!(item, "Chicken");
            assert_eq!(mode, SellMode::Other("test_case".to_string()));
        }
        other => panic!("expected UnhandledSellMode, got {other:?}"),
    }
}

#[test]
fn scenario_split_scans_price_like_one_scan() {
    let mut single = Basket::new();
    single.add_units("Apple", 10);

    let mut split = Basket::new();
    split.add_units("Apple", 5);
    split.add_units("Apple", 2);
    split.add_units("Apple", 3);

    assert_eq!(total_of(&single), Money::from_cents(650));
    assert_eq!(total_of(&split), total_of(&single));
}

#[test]
fn scenario_orange_bundles() {
    let mut five = Basket::new();
    five.add_units("Orange", 5);
    assert_eq!(total_of(&five), Money::from_cents(180));

    let mut ten = Basket::new();
    ten.add_units("Orange", 5);
    ten.add_units("Orange", 2);
    ten.add_units("Orange", 3);
    assert_eq!(total_of(&ten), Money::from_cents(340));
}

#[test]
fn scenario_bananas_by_weight() {
    let mut five = Basket::new();
    five.add_weight("Banana", Weight::from_units(5));
    assert_eq!(total_of(&five), Money::from_cents(375));

    let mut ten = Basket::new();
    ten.add_weight("Banana", Weight::from_units(5));
    ten.add_weight("Banana", Weight::from_units(2));
    ten.add_weight("Banana", Weight::from_units(3));

    let receipt = build_receipt(ten.entries(), &house_catalog()).unwrap();
    assert_eq!(
        receipt.entry("Banana").map(|line| line.entry.weight),
        Some(Weight::from_units(10))
    );
    assert_eq!(receipt.total(), Money::from_cents(750));
}

#[test]
fn scenario_mixed_basket_end_to_end() {
    let mut basket = Basket::new();
    basket.add_units("Apple", 1);
    basket.add_units("Orange", 1);
    basket.add_weight("Banana", Weight::from_units(1));
    basket.add_units("Apple", 3);
    basket.add_units("Orange", 12);
    basket.add_weight("Banana", Weight::from_milli(500));
    basket.add_units("Apple", 6);
    basket.add_units("Orange", 7);
    basket.add_weight("Banana", Weight::from_units(3));

    let receipt = build_receipt(basket.entries(), &house_catalog()).unwrap();

    let lines: Vec<(&str, i64, Weight, Money)> = receipt
        .items()
        .iter()
        .map(|l| (l.entry.name(), l.entry.quantity, l.entry.weight, l.amount))
        .collect();
    assert_eq!(
        lines,
        [
            ("Apple", 10, Weight::zero(), Money::from_cents(650)),
            ("Orange", 20, Weight::zero(), Money::from_cents(680)),
            ("Banana", 0, Weight::from_milli(4_500), Money::from_mills(3_375)),
        ]
    );
    assert_eq!(receipt.total(), Money::from_mills(16_675));
    assert_eq!(receipt.total().to_string(), "$16.675");
}

#[test]
fn scenario_unknown_item_fails() {
    let result = build_receipt(&[BasketEntry::units("Kiwi", 1)], &house_catalog());
    assert_eq!(result, Err(CheckoutError::UnknownItem("Kiwi".to_string())));
}
