//! # Rate State
//!
//! Holds the rate master for the running app.
//!
//! Rates are read on every quote and written a few times a day when the
//! morning board is published, so an `RwLock` lets quotes proceed in
//! parallel.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use aurum_core::{CoreResult, MetalType, Money, Purity, RateProvider, RateTable};

#[derive(Debug, Default)]
pub struct RateState {
    rates: Arc<RwLock<RateTable>>,
}

impl RateState {
    pub fn new() -> Self {
        RateState::default()
    }

    /// Wraps an existing table (e.g. loaded by the shell at startup).
    pub fn from_table(table: RateTable) -> Self {
        RateState {
            rates: Arc::new(RwLock::new(table)),
        }
    }

    /// Executes a function with read access to the rate table.
    pub fn with_rates<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RateTable) -> R,
    {
        let rates = self.rates.read().expect("Rate lock poisoned");
        f(&rates)
    }

    /// Executes a function with write access to the rate table.
    pub fn with_rates_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RateTable) -> R,
    {
        let mut rates = self.rates.write().expect("Rate lock poisoned");
        f(&mut rates)
    }
}

impl RateProvider for RateState {
    fn rate_on(&self, metal: MetalType, purity: Purity, on: NaiveDate) -> CoreResult<Money> {
        self.with_rates(|rates| rates.rate_on(metal, purity, on))
    }
}
