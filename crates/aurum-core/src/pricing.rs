//! # Pricing Module
//!
//! Prices a single jewelry line item.
//!
//! ## Price Build-up
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Price Calculation                               │
//! │                                                                         │
//! │  rate/g ₹5500.00 × net 9.800 g ─────────────► base      ₹53900.00      │
//! │                                                  │                      │
//! │  base × wastage 8% ─────────────────────────► wastage   ₹4312.00       │
//! │                                                  │                      │
//! │  flat ₹5000.00  (or base × making %) ───────► making    ₹5000.00       │
//! │                                                  │                      │
//! │  certified stones ──────────────────────────► stones    ₹0.00          │
//! │                                                  ▼                      │
//! │                                              final     ₹63212.00       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The displayed wastage and making amounts are each rounded half-up to the
//! paisa. The final price rounds once, on the exact total of base, wastage,
//! making and stones, so it can sit one paisa away from the sum of the
//! displayed components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::JewelryProduct;
use crate::rates::RateProvider;
use crate::types::Weight;
use crate::validation::ensure_non_negative;

// =============================================================================
// Making Charge
// =============================================================================

/// How a raw making-charge number entered at the counter is interpreted.
///
/// Stores quote making charges either as a flat labour amount per piece or
/// as a percentage of the metal value. The mode is a configuration choice,
/// never guessed from the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MakingChargeMode {
    /// The raw number is an amount in paise.
    Flat,
    /// The raw number is basis points of the base metal price.
    Percent,
}

impl Default for MakingChargeMode {
    fn default() -> Self {
        MakingChargeMode::Flat
    }
}

/// Fabrication labour charge for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MakingCharge {
    /// Fixed amount in paise.
    Flat { amount_cents: i64 },
    /// Basis points of the base metal price (1200 = 12%).
    Percent { bps: i64 },
}

impl MakingCharge {
    /// Builds a making charge from a raw number and the configured mode.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::pricing::{MakingCharge, MakingChargeMode};
    ///
    /// assert_eq!(
    ///     MakingCharge::from_raw(500000, MakingChargeMode::Flat),
    ///     MakingCharge::Flat { amount_cents: 500000 }
    /// );
    /// assert_eq!(
    ///     MakingCharge::from_raw(1200, MakingChargeMode::Percent),
    ///     MakingCharge::Percent { bps: 1200 }
    /// );
    /// ```
    pub fn from_raw(value: i64, mode: MakingChargeMode) -> Self {
        match mode {
            MakingChargeMode::Flat => MakingCharge::Flat {
                amount_cents: value,
            },
            MakingChargeMode::Percent => MakingCharge::Percent { bps: value },
        }
    }

    /// No making charge.
    pub const fn none() -> Self {
        MakingCharge::Flat { amount_cents: 0 }
    }

    /// Resolves the charge against a base metal price, rounded to the paisa.
    pub fn amount_for(&self, base_price: Money) -> CoreResult<Money> {
        match *self {
            MakingCharge::Flat { amount_cents } => Ok(Money::from_cents(amount_cents)),
            MakingCharge::Percent { bps } => base_price.percent_of(bps),
        }
    }

    /// The part of the charge expressed in basis points of the base price.
    fn percent_bps(&self) -> i64 {
        match *self {
            MakingCharge::Flat { .. } => 0,
            MakingCharge::Percent { bps } => bps,
        }
    }

    /// The part of the charge that is a fixed amount.
    fn flat_amount(&self) -> Money {
        match *self {
            MakingCharge::Flat { amount_cents } => Money::from_cents(amount_cents),
            MakingCharge::Percent { .. } => Money::zero(),
        }
    }

    fn ensure_non_negative(&self) -> CoreResult<()> {
        match *self {
            MakingCharge::Flat { amount_cents } => ensure_non_negative("making charge", amount_cents),
            MakingCharge::Percent { bps } => ensure_non_negative("making charge percentage", bps),
        }
    }
}

impl Default for MakingCharge {
    fn default() -> Self {
        MakingCharge::none()
    }
}

// =============================================================================
// Pricing Input
// =============================================================================

/// Everything needed to price one piece.
///
/// Raw integer fields mirror what the counter form submits; accessors return
/// typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Metal weight excluding stones, in milligrams.
    pub net_weight_mg: i64,

    /// Metal rate per gram, in paise.
    pub rate_per_gram_cents: i64,

    /// Wastage surcharge in basis points (800 = 8%).
    pub wastage_bps: i64,

    /// Labour charge.
    pub making_charge: MakingCharge,

    /// Value of certified stones set in the piece, in paise.
    #[serde(default)]
    pub stone_value_cents: i64,
}

impl PricingInput {
    /// Creates an input with no stone value.
    pub fn new(
        net_weight: Weight,
        rate_per_gram: Money,
        wastage_bps: i64,
        making_charge: MakingCharge,
    ) -> Self {
        PricingInput {
            net_weight_mg: net_weight.mg(),
            rate_per_gram_cents: rate_per_gram.cents(),
            wastage_bps,
            making_charge,
            stone_value_cents: 0,
        }
    }

    /// Sets the stone value.
    pub fn with_stone_value(mut self, stone_value: Money) -> Self {
        self.stone_value_cents = stone_value.cents();
        self
    }

    #[inline]
    pub fn net_weight(&self) -> Weight {
        Weight::from_mg(self.net_weight_mg)
    }

    #[inline]
    pub fn rate_per_gram(&self) -> Money {
        Money::from_cents(self.rate_per_gram_cents)
    }

    #[inline]
    pub fn stone_value(&self) -> Money {
        Money::from_cents(self.stone_value_cents)
    }

    fn validate(&self) -> CoreResult<()> {
        ensure_non_negative("net weight", self.net_weight_mg)?;
        ensure_non_negative("rate per gram", self.rate_per_gram_cents)?;
        ensure_non_negative("wastage percentage", self.wastage_bps)?;
        self.making_charge.ensure_non_negative()?;
        ensure_non_negative("stone value", self.stone_value_cents)?;
        Ok(())
    }
}

// =============================================================================
// Priced Line Item
// =============================================================================

/// The price components of one piece.
///
/// Always derived from a `PricingInput`; recompute whenever an input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedLineItem {
    /// rate × net weight.
    pub base_price: Money,
    /// base × wastage %.
    pub wastage_amount: Money,
    pub making_amount: Money,
    pub stone_value: Money,
    /// base + wastage + making + stones, rounded once on the exact total.
    pub final_price: Money,
}

/// Calculates the price of a single piece.
///
/// ## Errors
/// `CoreError::InvalidArgument` when any numeric input is negative, or when
/// the price does not fit in an i64 amount of paise.
///
/// ## Example
/// ```rust
/// use aurum_core::money::Money;
/// use aurum_core::pricing::{calculate_line_price, MakingCharge, PricingInput};
/// use aurum_core::types::Weight;
///
/// let input = PricingInput::new(
///     Weight::from_mg(9800),                        // 9.8 g
///     Money::from_cents(550000),                    // ₹5500.00 / g
///     800,                                          // 8% wastage
///     MakingCharge::Flat { amount_cents: 500000 },  // ₹5000.00
/// );
///
/// let priced = calculate_line_price(&input).unwrap();
/// assert_eq!(priced.base_price.cents(), 5390000);
/// assert_eq!(priced.wastage_amount.cents(), 431200);
/// assert_eq!(priced.final_price.cents(), 6321200);
/// ```
pub fn calculate_line_price(input: &PricingInput) -> CoreResult<PricedLineItem> {
    input.validate()?;

    let base_price = input.rate_per_gram().times_weight(input.net_weight())?;
    let wastage_amount = base_price.percent_of(input.wastage_bps)?;
    let making_amount = input.making_charge.amount_for(base_price)?;
    let stone_value = input.stone_value();

    // Percentage surcharges are combined before rounding; base, flat making
    // and stones are already whole paise.
    let surcharge_bps = input
        .wastage_bps
        .checked_add(input.making_charge.percent_bps())
        .ok_or_else(|| CoreError::out_of_range("wastage percentage"))?;
    let final_price = base_price
        .checked_add(base_price.percent_of(surcharge_bps)?, "final price")?
        .checked_add(input.making_charge.flat_amount(), "final price")?
        .checked_add(stone_value, "final price")?;

    Ok(PricedLineItem {
        base_price,
        wastage_amount,
        making_amount,
        stone_value,
        final_price,
    })
}

/// Prices a stocked product at the rate in force on `on`.
///
/// ## Workflow
/// ```text
/// Tag scanned ──► product (metal, purity, net weight, wastage, making)
///                      │
///                      ▼
///          rates.rate_on(metal, purity, on)
///                      │
///                      ▼
///              calculate_line_price
/// ```
pub fn quote_product<R>(
    product: &JewelryProduct,
    rates: &R,
    on: NaiveDate,
) -> CoreResult<PricedLineItem>
where
    R: RateProvider + ?Sized,
{
    let rate = rates.rate_on(product.metal, product.purity, on)?;
    calculate_line_price(&product.pricing_input(rate))
}

// =============================================================================
// Unit Tests
// =============================================================================
