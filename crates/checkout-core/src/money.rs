//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Mills?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.65 × 10 = 6.500000000000001  ❌ WRONG!                             │
//! │                                                                         │
//! │  Why not cents?                                                         │
//! │    4.5 kg × $0.75/kg = $3.375 → half a cent cannot be stored            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Mills (1/1000 of the major unit)                 │
//! │    4500 milli-kg × 750 mills / 1000 = 3375 mills, exact                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // Create from cents or mills
//! let price = Money::from_cents(65);      // $0.65
//! assert_eq!(price.mills(), 650);
//!
//! // Arithmetic operations
//! let ten = price * 10;                    // $6.50
//! let total = ten + Money::from_mills(175); // $6.675
//! assert_eq!(total.mills(), 6675);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::Weight;

/// Mills per major currency unit.
pub const MILLS_PER_UNIT: i64 = 1000;

/// Mills per cent.
pub const MILLS_PER_CENT: i64 = 10;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in mills (thousandths of the major currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never has to be checked for underflow
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Mills, not cents**: weight pricing produces half cents, and receipts
///   must add up exactly
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.unit_price ──┬──► price(entry) ──► ReceiptLine.amount
///                          │                           │
/// DiscountRule.bundle_price┘                           ▼
///                                               Receipt.total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from mills.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let total = Money::from_mills(16_675); // $16.675
    /// assert_eq!(total.mills(), 16_675);
    /// ```
    #[inline]
    pub const fn from_mills(mills: i64) -> Self {
        Money(mills)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let apple = Money::from_cents(65);
    /// assert_eq!(apple.mills(), 650);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MILLS_PER_CENT)
    }

    /// Creates a Money value from major units and cents.
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(1, 0), Money::from_cents(100));
    /// assert_eq!(Money::from_major_minor(-5, 50).mills(), -5_500);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, cents: i64) -> Self {
        if major < 0 {
            Money(major * MILLS_PER_UNIT - cents * MILLS_PER_CENT)
        } else {
            Money(major * MILLS_PER_UNIT + cents * MILLS_PER_CENT)
        }
    }

    /// Returns the value in mills.
    #[inline]
    pub const fn mills(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(mills) => Some(Money(mills)),
            None => None,
        }
    }

    /// Multiplies money by a unit quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let orange = Money::from_cents(40);
    /// assert_eq!(orange.checked_multiply_quantity(2), Some(Money::from_cents(80)));
    /// assert_eq!(orange.checked_multiply_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(mills) => Some(Money(mills)),
            None => None,
        }
    }

    /// Multiplies a per-unit-weight price by a weight, `None` when the
    /// result does not fit.
    ///
    /// The product is exact in millionths and rounded half away from zero to
    /// the nearest mill.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::Weight;
    ///
    /// let banana = Money::from_cents(75);
    /// let amount = banana.checked_multiply_weight(Weight::from_milli(4_500));
    /// assert_eq!(amount, Some(Money::from_mills(3_375)));
    /// ```
    pub fn checked_multiply_weight(&self, weight: Weight) -> Option<Money> {
        // i128 cannot overflow here: both factors fit in i64
        let raw = i128::from(self.0) * i128::from(weight.milli());
        let half = i128::from(MILLS_PER_UNIT / 2);
        let rounded = if raw < 0 { raw - half } else { raw + half };
        i64::try_from(rounded / i128::from(MILLS_PER_UNIT))
            .ok()
            .map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display: `$6.50`, `$3.375`, `-$5.50`.
///
/// Two decimals unless a fraction of a cent is present.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / MILLS_PER_UNIT as u64;
        let fraction = abs % MILLS_PER_UNIT as u64;

        if fraction % MILLS_PER_CENT as u64 == 0 {
            write!(f, "{}${}.{:02}", sign, major, fraction / MILLS_PER_CENT as u64)
        } else {
            write!(f, "{}${}.{:03}", sign, major, fraction)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a unit quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
