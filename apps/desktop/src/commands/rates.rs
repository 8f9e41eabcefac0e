//! # Rate Commands
//!
//! Publish and read the daily metal rates.
//!
//! Purity arrives from the form as fineness in parts per thousand
//! (916 for 22K) so the same command covers gold, silver and platinum.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use aurum_core::{MetalType, Money, Purity, RateEntry, RateProvider};

use crate::error::ApiError;
use crate::state::{ConfigState, RateState};

/// Request to publish a rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRateRequest {
    pub metal: MetalType,
    pub fineness: u16,
    pub rate_per_gram_cents: i64,
    /// Defaults to today
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
}

/// A rate together with its display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub entry: RateEntry,
    pub rate_display: String,
}

fn purity(fineness: u16) -> Result<Purity, ApiError> {
    Purity::from_fineness(fineness)
        .ok_or_else(|| ApiError::validation(format!("fineness {} is not in 1..=999", fineness)))
}

/// Publishes a rate. Publishing again for the same day replaces the entry.
pub fn set_metal_rate(
    rates: &RateState,
    config: &ConfigState,
    request: SetRateRequest,
) -> Result<RateResponse, ApiError> {
    let purity = purity(request.fineness)?;
    let effective_from = request.effective_from.unwrap_or_else(super::today);
    let rate_per_gram = Money::from_cents(request.rate_per_gram_cents);

    let replaced = rates.with_rates_mut(|r| {
        r.set_rate(request.metal, purity, effective_from, rate_per_gram)
    })?;

    info!(
        metal = %request.metal,
        purity = %purity,
        effective_from = %effective_from,
        rate = %rate_per_gram,
        replaced = ?replaced.map(|m| m.cents()),
        "Metal rate published"
    );

    Ok(RateResponse {
        entry: RateEntry {
            metal: request.metal,
            purity,
            effective_from,
            rate_per_gram,
        },
        rate_display: config.format_currency(rate_per_gram.cents()),
    })
}

/// Returns the rate in force on `on` (today if absent).
pub fn get_metal_rate(
    rates: &RateState,
    config: &ConfigState,
    metal: MetalType,
    fineness: u16,
    on: Option<NaiveDate>,
) -> Result<RateResponse, ApiError> {
    let purity = purity(fineness)?;
    let on = on.unwrap_or_else(super::today);
    debug!(metal = %metal, purity = %purity, on = %on, "get_metal_rate command");

    let rate_per_gram = rates.rate_on(metal, purity, on)?;
    let effective_from = rates
        .with_rates(|r| {
            r.board(on)
                .into_iter()
                .find(|e| e.metal == metal && e.purity == purity)
                .map(|e| e.effective_from)
        })
        .unwrap_or(on);

    Ok(RateResponse {
        entry: RateEntry {
            metal,
            purity,
            effective_from,
            rate_per_gram,
        },
        rate_display: config.format_currency(rate_per_gram.cents()),
    })
}

/// Lists every published rate for a metal and purity, oldest first.
pub fn get_rate_history(
    rates: &RateState,
    metal: MetalType,
    fineness: u16,
) -> Result<Vec<RateEntry>, ApiError> {
    let purity = purity(fineness)?;
    debug!(metal = %metal, purity = %purity, "get_rate_history command");
    Ok(rates.with_rates(|r| r.history(metal, purity)))
}

/// Returns the rate board for a day: one entry per metal and purity.
pub fn get_rate_board(rates: &RateState, on: Option<NaiveDate>) -> Vec<RateEntry> {
    let on = on.unwrap_or_else(super::today);
    debug!(on = %on, "get_rate_board command");
    rates.with_rates(|r| r.board(on))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn publish(rates: &RateState, fineness: u16, day: u32, cents: i64) -> Result<RateResponse, ApiError> {
        set_metal_rate(
            rates,
            &ConfigState::default(),
            SetRateRequest {
                metal: MetalType::Gold,
                fineness,
                rate_per_gram_cents: cents,
                effective_from: Some(date(day)),
            },
        )
    }

    #[test]
    fn test_publish_and_read_rate() {
        let rates = RateState::new();
        let config = ConfigState::default();
        let published = publish(&rates, 916, 19, 550000).unwrap();
        assert_eq!(published.rate_display, "₹5500.00");

        // A later day falls back to the latest publication
        let response = get_metal_rate(&rates, &config, MetalType::Gold, 916, Some(date(21))).unwrap();
        assert_eq!(response.entry.rate_per_gram.cents(), 550000);
        assert_eq!(response.entry.effective_from, date(19));
    }

    #[test]
    fn test_missing_rate() {
        let rates = RateState::new();
        publish(&rates, 916, 19, 550000).unwrap();

        let err = get_metal_rate(&rates, &ConfigState::default(), MetalType::Gold, 916, Some(date(18)))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RateNotFound);
    }

    #[test]
    fn test_invalid_inputs() {
        let rates = RateState::new();
        assert_eq!(publish(&rates, 0, 19, 550000).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(publish(&rates, 1000, 19, 550000).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(publish(&rates, 916, 19, -1).unwrap_err().code, ErrorCode::ValidationError);
        assert!(rates.with_rates(|r| r.is_empty()));
    }

    #[test]
    fn test_history_and_board() {
        let rates = RateState::new();
        publish(&rates, 916, 20, 552000).unwrap();
        publish(&rates, 916, 19, 550000).unwrap();
        publish(&rates, 999, 19, 600000).unwrap();

        let history = get_rate_history(&rates, MetalType::Gold, 916).unwrap();
        let cents: Vec<i64> = history.iter().map(|e| e.rate_per_gram.cents()).collect();
        assert_eq!(cents, vec![550000, 552000]);

        let board = get_rate_board(&rates, Some(date(19)));
        assert_eq!(board.len(), 2);
        assert!(board.iter().all(|e| e.effective_from == date(19)));
    }
}
