//! # Domain Types
//!
//! Small value types shared by the catalog, the basket and the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    SellMode     │   │  DiscountRule   │   │     Measure     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  ByUnit         │   │  frequency (N)  │   │  Units(i64)     │        │
//! │  │  ByWeight       │   │  bundle_price   │   │  Weight(Weight) │        │
//! │  │  Other(name)    │   │  "N for $B"     │   │  Mixed{..}      │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │     Weight      │                                                    │
//! │  │  ─────────────  │                                                    │
//! │  │  milli (i64)    │                                                    │
//! │  │  4500 = 4.5     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::money::Money;
use crate::MAX_ITEM_WEIGHT_UNITS;

/// Thousandths per weight unit.
pub const MILLI_PER_UNIT: i64 = 1000;

// =============================================================================
// Sell Mode
// =============================================================================

/// How an item is measured at the till.
///
/// `Other` is the open end of the enum: a catalog may declare a mode this
/// engine does not know. Validation lets such items through and pricing
/// rejects them with [`crate::CheckoutError::UnhandledSellMode`], so the
/// pricing match is the one place a new mode has to be wired in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SellMode {
    /// Sold as discrete, countable units.
    ByUnit,
    /// Sold by a continuous weight measure.
    ByWeight,
    /// Any mode the engine cannot price.
    Other(String),
}

impl SellMode {
    /// Returns the wire name of the mode.
    pub fn as_str(&self) -> &str {
        match self {
            SellMode::ByUnit => "by_unit",
            SellMode::ByWeight => "by_weight",
            SellMode::Other(name) => name,
        }
    }
}

impl fmt::Display for SellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<&str> for SellMode {
    fn from(s: &str) -> Self {
        match s {
            "by_unit" => SellMode::ByUnit,
            "by_weight" => SellMode::ByWeight,
            other => SellMode::Other(other.to_string()),
        }
    }
}

impl From<String> for SellMode {
    fn from(s: String) -> Self {
        SellMode::from(s.as_str())
    }
}

impl From<SellMode> for String {
    fn from(mode: SellMode) -> Self {
        mode.as_str().to_string()
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// Volume discount: every `frequency` units bought together cost
/// `bundle_price` instead of `frequency × unit price`.
///
/// Partial bundles are charged at the full unit price. Weight-sold items
/// ignore discount rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRule {
    /// Units per bundle (N). Must be positive.
    pub frequency: u32,
    /// Price of one full bundle.
    pub bundle_price: Money,
}

impl DiscountRule {
    /// Creates an "N for B" rule. Checked when the catalog is built.
    #[inline]
    pub const fn new(frequency: u32, bundle_price: Money) -> Self {
        DiscountRule {
            frequency,
            bundle_price,
        }
    }
}

// =============================================================================
// Weight
// =============================================================================

/// A weight in thousandths of the catalog's weight unit.
///
/// Integer storage keeps split entries (5 + 2 + 3) summing to exactly the
/// same weight as a single entry of 10.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from thousandths of a unit.
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Weight(milli)
    }

    /// Creates a weight from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Weight(units * MILLI_PER_UNIT)
    }

    /// Creates a weight from a decimal reading such as a scale display.
    ///
    /// Rounded to the nearest thousandth. Returns `None` for NaN, infinities
    /// and readings beyond `±MAX_ITEM_WEIGHT_UNITS`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_ITEM_WEIGHT_UNITS as f64 {
            return None;
        }
        Some(Weight((value * MILLI_PER_UNIT as f64).round() as i64))
    }

    /// Largest weight a single basket entry may carry.
    #[inline]
    pub const fn max_entry() -> Self {
        Weight(MAX_ITEM_WEIGHT_UNITS * MILLI_PER_UNIT)
    }

    /// Returns the weight in thousandths of a unit.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// Shows the weight as a decimal with three places: `4.500`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:03}",
            sign,
            abs / MILLI_PER_UNIT as u64,
            abs % MILLI_PER_UNIT as u64
        )
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl Weight {
    /// Adds two weights, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(self, other: Weight) -> Weight {
        Weight(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}

// =============================================================================
// Measure
// =============================================================================

/// What was scanned for one basket entry: a unit count or a weight.
///
/// `Mixed` only comes from loose input that carried both. It is never valid
/// for unit or weight items; items of any other sell mode let it through to
/// pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Discrete unit count.
    Units(i64),
    /// Continuous weight.
    Weight(Weight),
    /// Both a unit count and a weight.
    Mixed { units: i64, weight: Weight },
}

impl Measure {
    /// Unit count carried by this measure, zero for weights.
    pub fn units(&self) -> i64 {
        match self {
            Measure::Units(qty) | Measure::Mixed { units: qty, .. } => *qty,
            Measure::Weight(_) => 0,
        }
    }

    /// Weight carried by this measure, zero for unit counts.
    pub fn weight(&self) -> Weight {
        match self {
            Measure::Units(_) => Weight::zero(),
            Measure::Weight(w) | Measure::Mixed { weight: w, .. } => *w,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
