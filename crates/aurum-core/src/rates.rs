//! # Rate Master
//!
//! Per-gram metal rates by (metal, purity) and effective date.
//!
//! ## Lookup Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Gold 916 history                                                       │
//! │                                                                         │
//! │   2026-10-01 ₹5400.00    2026-10-15 ₹5500.00    2026-10-20 ₹5525.00    │
//! │        │                      │                      │                  │
//! │  ──────●──────────────────────●──────────────────────●──────────►      │
//! │                                     ▲                                   │
//! │                              rate_on(2026-10-19)                        │
//! │                              → ₹5500.00 (latest entry not after date)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing code only sees the `RateProvider` trait. `RateTable` is the
//! in-memory implementation the desktop app keeps in state; a persisted
//! rate master can implement the same trait.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MetalType, Purity};
use crate::validation::ensure_non_negative;

// =============================================================================
// Rate Provider
// =============================================================================

/// Supplies the per-gram rate for a metal and purity on a given day.
pub trait RateProvider {
    /// Returns the rate in force on `on`.
    ///
    /// ## Errors
    /// `CoreError::RateNotFound` when no rate was published for the pair on
    /// or before that date.
    fn rate_on(&self, metal: MetalType, purity: Purity, on: NaiveDate) -> CoreResult<Money>;
}

// =============================================================================
// Rate Table
// =============================================================================

/// One published rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub metal: MetalType,
    pub purity: Purity,
    #[ts(as = "String")]
    pub effective_from: NaiveDate,
    pub rate_per_gram: Money,
}

/// In-memory rate master.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: BTreeMap<(MetalType, Purity), BTreeMap<NaiveDate, Money>>,
}

impl RateTable {
    pub fn new() -> Self {
        RateTable::default()
    }

    /// Publishes a rate effective from `effective_from`.
    ///
    /// Publishing twice for the same day replaces the earlier entry and
    /// returns it.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    /// use aurum_core::rates::{RateProvider, RateTable};
    /// use aurum_core::types::{MetalType, Purity};
    /// use chrono::NaiveDate;
    ///
    /// let mut rates = RateTable::new();
    /// let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    /// rates.set_rate(MetalType::Gold, Purity::K22, day, Money::from_cents(550000)).unwrap();
    ///
    /// let rate = rates.rate_on(MetalType::Gold, Purity::K22, day).unwrap();
    /// assert_eq!(rate.cents(), 550000);
    /// ```
    pub fn set_rate(
        &mut self,
        metal: MetalType,
        purity: Purity,
        effective_from: NaiveDate,
        rate_per_gram: Money,
    ) -> CoreResult<Option<Money>> {
        ensure_non_negative("rate per gram", rate_per_gram.cents())?;

        Ok(self
            .rates
            .entry((metal, purity))
            .or_default()
            .insert(effective_from, rate_per_gram))
    }

    /// Lists published rates for a pair, oldest first.
    pub fn history(&self, metal: MetalType, purity: Purity) -> Vec<RateEntry> {
        self.rates
            .get(&(metal, purity))
            .map(|by_date| {
                by_date
                    .iter()
                    .map(|(date, rate)| RateEntry {
                        metal,
                        purity,
                        effective_from: *date,
                        rate_per_gram: *rate,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the rate in force on `on` for every pair that has one.
    pub fn board(&self, on: NaiveDate) -> Vec<RateEntry> {
        self.rates
            .iter()
            .filter_map(|(&(metal, purity), by_date)| {
                by_date.range(..=on).next_back().map(|(date, rate)| RateEntry {
                    metal,
                    purity,
                    effective_from: *date,
                    rate_per_gram: *rate,
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateProvider for RateTable {
    fn rate_on(&self, metal: MetalType, purity: Purity, on: NaiveDate) -> CoreResult<Money> {
        self.rates
            .get(&(metal, purity))
            .and_then(|by_date| by_date.range(..=on).next_back())
            .map(|(_, rate)| *rate)
            .ok_or(CoreError::RateNotFound { metal, purity, on })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn gold_table() -> RateTable {
        let mut rates = RateTable::new();
        rates
            .set_rate(MetalType::Gold, Purity::K22, day(1), Money::from_cents(540000))
            .unwrap();
        rates
            .set_rate(MetalType::Gold, Purity::K22, day(15), Money::from_cents(550000))
            .unwrap();
        rates
            .set_rate(MetalType::Gold, Purity::K22, day(20), Money::from_cents(552500))
            .unwrap();
        rates
    }

    #[test]
    fn test_latest_entry_not_after_date() {
        let rates = gold_table();
        let lookup = |d| rates.rate_on(MetalType::Gold, Purity::K22, day(d)).unwrap().cents();

        assert_eq!(lookup(1), 540000);
        assert_eq!(lookup(14), 540000);
        assert_eq!(lookup(15), 550000);
        assert_eq!(lookup(19), 550000);
        assert_eq!(lookup(31), 552500);
    }

    #[test]
    fn test_missing_rates() {
        let rates = gold_table();

        let before_first = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        assert!(matches!(
            rates.rate_on(MetalType::Gold, Purity::K22, before_first),
            Err(CoreError::RateNotFound { .. })
        ));
        assert!(matches!(
            rates.rate_on(MetalType::Gold, Purity::K18, day(19)),
            Err(CoreError::RateNotFound { purity, .. }) if purity == Purity::K18
        ));
    }

    #[test]
    fn test_same_day_replaces() {
        let mut rates = gold_table();
        let previous = rates
            .set_rate(MetalType::Gold, Purity::K22, day(15), Money::from_cents(551000))
            .unwrap();

        assert_eq!(previous, Some(Money::from_cents(550000)));
        assert_eq!(rates.history(MetalType::Gold, Purity::K22).len(), 3);
        assert_eq!(
            rates.rate_on(MetalType::Gold, Purity::K22, day(16)).unwrap().cents(),
            551000
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut rates = RateTable::new();
        let result = rates.set_rate(MetalType::Silver, Purity::STERLING, day(1), Money::from_cents(-1));
        assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
        assert!(rates.is_empty());
    }

    #[test]
    fn test_history_is_oldest_first() {
        let history = gold_table().history(MetalType::Gold, Purity::K22);
        let dates: Vec<_> = history.iter().map(|e| e.effective_from).collect();
        assert_eq!(dates, vec![day(1), day(15), day(20)]);
        assert!(gold_table().history(MetalType::Platinum, Purity::K24).is_empty());
    }

    #[test]
    fn test_board_skips_pairs_without_rate_yet() {
        let mut rates = gold_table();
        rates
            .set_rate(MetalType::Silver, Purity::STERLING, day(18), Money::from_cents(9500))
            .unwrap();

        let board = rates.board(day(16));
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].rate_per_gram.cents(), 550000);

        assert_eq!(rates.board(day(18)).len(), 2);
    }

    #[test]
    fn test_trait_object_lookup() {
        let rates = gold_table();
        let provider: &dyn RateProvider = &rates;
        assert!(provider.rate_on(MetalType::Gold, Purity::K22, day(2)).is_ok());
    }
}
