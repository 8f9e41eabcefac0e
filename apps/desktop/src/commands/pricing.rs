//! # Pricing Commands
//!
//! Quote a piece before it goes on the order.
//!
//! ## Quote Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Manual entry (weight, rate, wastage, making) ──► quote_line_price     │
//! │                                                                         │
//! │  Tag scan (product ID) ──► rate master lookup ──► quote_product        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use aurum_core::{calculate_line_price, MakingCharge, PricedLineItem, PricingInput};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, RateState};

/// A manual quote as submitted by the counter form.
///
/// `making_charge` is a raw number read according to the configured
/// `MakingChargeMode`: paise for flat charges, basis points for percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub net_weight_mg: i64,
    pub rate_per_gram_cents: i64,
    pub wastage_bps: i64,
    pub making_charge: i64,
    #[serde(default)]
    pub stone_value_cents: i64,
}

impl QuoteRequest {
    /// Resolves the raw making charge with the configured mode.
    pub fn into_input(self, config: &ConfigState) -> PricingInput {
        PricingInput {
            net_weight_mg: self.net_weight_mg,
            rate_per_gram_cents: self.rate_per_gram_cents,
            wastage_bps: self.wastage_bps,
            making_charge: MakingCharge::from_raw(self.making_charge, config.making_charge_mode),
            stone_value_cents: self.stone_value_cents,
        }
    }
}

/// Prices a manually entered piece.
pub fn quote_line_price(
    config: &ConfigState,
    request: QuoteRequest,
) -> Result<PricedLineItem, ApiError> {
    debug!(
        net_weight_mg = request.net_weight_mg,
        rate_per_gram_cents = request.rate_per_gram_cents,
        mode = ?config.making_charge_mode,
        "quote_line_price command"
    );

    let input = request.into_input(config);
    Ok(calculate_line_price(&input)?)
}

/// Prices a stocked product at the rate in force on `on` (today if absent).
pub fn quote_product(
    rates: &RateState,
    catalog: &CatalogState,
    product_id: &str,
    on: Option<NaiveDate>,
) -> Result<PricedLineItem, ApiError> {
    let on = on.unwrap_or_else(super::today);
    debug!(product_id = %product_id, on = %on, "quote_product command");

    let product = catalog.get(product_id)?;
    if !product.is_active {
        return Err(ApiError::validation("Product is not available for sale"));
    }

    Ok(aurum_core::quote_product(&product, rates, on)?)
}
