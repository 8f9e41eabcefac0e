//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    5500.00 × 9.8 = 53899.99999999999  ❌ WRONG!                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise + Integer Milligrams                       │
//! │    550000 paise × 9800 mg / 1000 = 5390000 paise = ₹53900.00           │
//! │    Every division rounds half-up explicitly, in one place              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::Money;
//!
//! // Create from the smallest unit (paise)
//! let rate = Money::from_cents(550000); // ₹5500.00 per gram
//!
//! // Arithmetic operations
//! let doubled = rate * 2;                        // ₹11000.00
//! let total = rate + Money::from_cents(500000);  // ₹10500.00
//! assert_eq!(doubled.cents(), 1_100_000);
//! assert_eq!(total.cents(), 1_050_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{TaxRate, Weight};

/// Denominator for basis-point arithmetic (10000 bps = 100%).
const BPS_SCALE: i128 = 10_000;

/// Milligrams per gram.
const MG_PER_GRAM: i128 = 1_000;

/// Divides with standard half-up rounding (ties away from zero).
///
/// Callers widen both operands to i128 so the intermediate product of
/// rate × weight or amount × bps cannot overflow. A quotient outside the
/// i64 range is an error, never a truncation.
fn div_round_half_up(field: &str, numerator: i128, denominator: i128) -> CoreResult<i64> {
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    i64::try_from(rounded).map_err(|_| CoreError::out_of_range(field))
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative inputs arrive from forms and must be
///   representable so validation can reject them with a field name
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Rate master ──► rate_per_gram ──► base price ──► wastage / making     │
/// │                                                        │                │
/// │                                         PricedLineItem.final_price     │
/// │                                                        │                │
/// │  OrderTotals.subtotal ──► discount ──► tax ──► grand total             │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let price = Money::from_cents(6321200); // ₹63212.00
    /// assert_eq!(price.cents(), 6321200);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rupees and paise).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -₹5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Prices a weight at this per-gram rate.
    ///
    /// ## Rounding
    /// Standard half-up rounding to the paisa, not Bankers Rounding. This
    /// matches how the amounts are printed on the counter and the invoice.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    /// use aurum_core::types::Weight;
    ///
    /// let rate = Money::from_cents(550000);     // ₹5500.00 / g
    /// let weight = Weight::from_mg(9800);       // 9.800 g
    /// assert_eq!(rate.times_weight(weight).unwrap().cents(), 5390000); // ₹53900.00
    /// ```
    pub fn times_weight(&self, weight: Weight) -> CoreResult<Money> {
        let raw = self.0 as i128 * weight.mg() as i128;
        div_round_half_up("base price", raw, MG_PER_GRAM).map(Money)
    }

    /// Returns `bps` basis points of this amount, rounded half-up.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let base = Money::from_cents(5390000);    // ₹53900.00
    /// let wastage = base.percent_of(800).unwrap(); // 8%
    /// assert_eq!(wastage.cents(), 431200);          // ₹4312.00
    /// ```
    pub fn percent_of(&self, bps: i64) -> CoreResult<Money> {
        let raw = self.0 as i128 * bps as i128;
        div_round_half_up("percentage amount", raw, BPS_SCALE).map(Money)
    }

    /// Calculates tax on this amount.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    /// use aurum_core::types::TaxRate;
    ///
    /// let before_tax = Money::from_cents(24121200); // ₹241212.00
    /// let tax = before_tax.calculate_tax(TaxRate::from_bps(300)).unwrap(); // 3%
    /// assert_eq!(tax.cents(), 723636);              // ₹7236.36
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: TaxRate) -> CoreResult<Money> {
        self.percent_of(rate.bps() as i64)
    }

    /// Adds two amounts, failing instead of wrapping past the i64 range.
    #[inline]
    pub fn checked_add(self, other: Money, field: &str) -> CoreResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| CoreError::out_of_range(field))
    }

    /// Returns the smaller of two amounts.
    #[inline]
    pub fn min(self, other: Money) -> Money {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. The desktop layer formats for display through
/// `ConfigState::format_currency`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Plain operators follow i64 semantics (overflow panics in debug builds).
/// Pricing and aggregation go through the checked helpers instead.
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (piece counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
