//! # Order Totals
//!
//! Aggregates priced line items into the amounts printed at the foot of an
//! invoice.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Σ line.final_price ─────────────────────► subtotal      ₹243212.00    │
//! │                                               │                         │
//! │  − discount (clamped or rejected) ───────► before tax    ₹241212.00    │
//! │                                               │                         │
//! │  × tax rate (3%) ────────────────────────► tax           ₹7236.36      │
//! │         ├── CGST 1.5%                    ₹3618.18                       │
//! │         └── SGST 1.5%                    ₹3618.18                       │
//! │                                               ▼                         │
//! │                                          grand total    ₹248448.36     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is charged on the post-discount amount only. The two components are
//! derived from the single tax figure so they can never disagree with it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricedLineItem;
use crate::types::{DiscountMode, TaxRate};
use crate::validation::ensure_non_negative;

// =============================================================================
// Policy
// =============================================================================

/// Store-wide settings that shape the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsPolicy {
    pub tax_rate: TaxRate,
    pub discount_mode: DiscountMode,
}

impl TotalsPolicy {
    pub fn new(tax_rate: TaxRate, discount_mode: DiscountMode) -> Self {
        TotalsPolicy {
            tax_rate,
            discount_mode,
        }
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// The tax amount split into two equal components (central and state).
///
/// When the tax has an odd number of paise the extra paisa goes to the
/// first component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub central: Money,
    pub state: Money,
}

impl TaxBreakdown {
    /// Splits a tax amount in two.
    ///
    /// ```rust
    /// use aurum_core::money::Money;
    /// use aurum_core::order::TaxBreakdown;
    ///
    /// let split = TaxBreakdown::split(Money::from_cents(101));
    /// assert_eq!(split.central.cents(), 51);
    /// assert_eq!(split.state.cents(), 50);
    /// ```
    pub fn split(tax: Money) -> Self {
        let cents = tax.cents();
        let central = cents - cents / 2;
        TaxBreakdown {
            central: Money::from_cents(central),
            state: Money::from_cents(cents - central),
        }
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.central + self.state
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Footer amounts for an order.
///
/// ## Invariants
/// - `price_before_tax = subtotal - discount`
/// - `grand_total = price_before_tax + tax`
/// - `tax_breakdown.total() == tax`
/// - `0 <= discount <= subtotal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub line_count: usize,
    pub subtotal: Money,
    /// Discount actually applied (after clamping).
    pub discount: Money,
    pub price_before_tax: Money,
    pub tax: Money,
    pub tax_breakdown: TaxBreakdown,
    pub grand_total: Money,
}

impl OrderTotals {
    /// Totals of an empty order.
    pub fn zero() -> Self {
        OrderTotals::default()
    }
}

/// Computes order totals from priced lines and a discount.
///
/// ## Discount Handling
/// - Negative discount → `CoreError::InvalidArgument`
/// - Discount above subtotal → clamped to subtotal under
///   `DiscountMode::Clamp`, `CoreError::InvalidDiscount` under
///   `DiscountMode::Strict`
///
/// ## Example
/// ```rust
/// use aurum_core::money::Money;
/// use aurum_core::order::{compute_order_totals, TotalsPolicy};
/// use aurum_core::pricing::PricedLineItem;
///
/// let line = PricedLineItem {
///     base_price: Money::from_cents(24321200),
///     wastage_amount: Money::zero(),
///     making_amount: Money::zero(),
///     stone_value: Money::zero(),
///     final_price: Money::from_cents(24321200),
/// };
///
/// let totals = compute_order_totals(&[line], Money::from_cents(200000), &TotalsPolicy::default())
///     .unwrap();
/// assert_eq!(totals.price_before_tax.cents(), 24121200);
/// assert_eq!(totals.tax.cents(), 723636);
/// assert_eq!(totals.grand_total.cents(), 24844836);
/// ```
pub fn compute_order_totals(
    items: &[PricedLineItem],
    discount: Money,
    policy: &TotalsPolicy,
) -> CoreResult<OrderTotals> {
    ensure_non_negative("discount", discount.cents())?;

    let subtotal = items
        .iter()
        .try_fold(Money::zero(), |acc, item| acc.checked_add(item.final_price, "subtotal"))?;

    let discount = if discount > subtotal {
        match policy.discount_mode {
            DiscountMode::Clamp => subtotal,
            DiscountMode::Strict => return Err(CoreError::InvalidDiscount { discount, subtotal }),
        }
    } else {
        discount
    };

    let price_before_tax = subtotal - discount;
    let tax = price_before_tax.calculate_tax(policy.tax_rate)?;

    Ok(OrderTotals {
        line_count: items.len(),
        subtotal,
        discount,
        price_before_tax,
        tax,
        tax_breakdown: TaxBreakdown::split(tax),
        grand_total: price_before_tax.checked_add(tax, "grand total")?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(final_cents: i64) -> PricedLineItem {
        PricedLineItem {
            base_price: Money::from_cents(final_cents),
            wastage_amount: Money::zero(),
            making_amount: Money::zero(),
            stone_value: Money::zero(),
            final_price: Money::from_cents(final_cents),
        }
    }

    fn strict() -> TotalsPolicy {
        TotalsPolicy::new(TaxRate::JEWELRY_GST, DiscountMode::Strict)
    }

    #[test]
    fn test_reference_example() {
        // 63212.00 + 180000.00 = 243212.00
        let items = [line(6321200), line(18000000)];
        let totals =
            compute_order_totals(&items, Money::from_cents(200000), &TotalsPolicy::default()).unwrap();

        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.subtotal.cents(), 24321200);
        assert_eq!(totals.discount.cents(), 200000);
        assert_eq!(totals.price_before_tax.cents(), 24121200);
        assert_eq!(totals.tax.cents(), 723636);
        assert_eq!(totals.tax_breakdown.central.cents(), 361818);
        assert_eq!(totals.tax_breakdown.state.cents(), 361818);
        assert_eq!(totals.grand_total.cents(), 24844836);
    }

    #[test]
    fn test_empty_order_is_zero() {
        let totals = compute_order_totals(&[], Money::zero(), &strict()).unwrap();
        assert_eq!(totals, OrderTotals::zero());
    }

    #[test]
    fn test_empty_order_clamps_discount_to_zero() {
        let totals =
            compute_order_totals(&[], Money::from_cents(500), &TotalsPolicy::default()).unwrap();
        assert_eq!(totals, OrderTotals::zero());

        assert!(compute_order_totals(&[], Money::from_cents(500), &strict()).is_err());
    }

    #[test]
    fn test_full_discount_means_nothing_to_pay() {
        let items = [line(6321200)];
        let totals = compute_order_totals(&items, Money::from_cents(6321200), &strict()).unwrap();

        assert!(totals.price_before_tax.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_excess_discount_clamped() {
        let items = [line(100000)];
        let totals =
            compute_order_totals(&items, Money::from_cents(150000), &TotalsPolicy::default()).unwrap();

        assert_eq!(totals.discount.cents(), 100000);
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_excess_discount_rejected_in_strict_mode() {
        let items = [line(100000)];
        match compute_order_totals(&items, Money::from_cents(150000), &strict()) {
            Err(CoreError::InvalidDiscount { discount, subtotal }) => {
                assert_eq!(discount.cents(), 150000);
                assert_eq!(subtotal.cents(), 100000);
            }
            other => panic!("expected InvalidDiscount, got {:?}", other),
        }
    }

    #[test]
    fn test_subtotal_overflow_rejected() {
        let items = [line(i64::MAX), line(1)];
        let result = compute_order_totals(&items, Money::zero(), &TotalsPolicy::default());
        assert!(matches!(
            result,
            Err(CoreError::InvalidArgument { ref field, .. }) if field == "subtotal"
        ));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let items = [line(100000)];
        let result = compute_order_totals(&items, Money::from_cents(-1), &TotalsPolicy::default());
        assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
    }

    #[test]
    fn test_grand_total_identity() {
        let subtotals = [0, 1, 99, 101, 6321200, 24321200, 999_999_99];
        for &cents in &subtotals {
            for discount in [0, 1, cents / 3, cents] {
                let totals =
                    compute_order_totals(&[line(cents)], Money::from_cents(discount), &strict()).unwrap();
                let before_tax = Money::from_cents(cents - discount);

                assert_eq!(totals.price_before_tax, before_tax);
                assert_eq!(totals.tax, before_tax.calculate_tax(TaxRate::JEWELRY_GST).unwrap());
                assert_eq!(
                    totals.grand_total,
                    totals.subtotal - totals.discount + totals.tax
                );
                assert_eq!(totals.tax_breakdown.total(), totals.tax);
            }
        }
    }

    #[test]
    fn test_zero_tax_rate() {
        let policy = TotalsPolicy::new(TaxRate::zero(), DiscountMode::Clamp);
        let totals = compute_order_totals(&[line(5000)], Money::zero(), &policy).unwrap();
        assert_eq!(totals.grand_total.cents(), 5000);
        assert_eq!(totals.tax_breakdown, TaxBreakdown::default());
    }

    #[test]
    fn test_odd_paisa_split() {
        let split = TaxBreakdown::split(Money::from_cents(7));
        assert_eq!(split.central.cents(), 4);
        assert_eq!(split.state.cents(), 3);
    }
}
