//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AURUM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use aurum_core::{DiscountMode, MakingChargeMode, TaxRate, TotalsPolicy};
use aurum_core::validation::validate_tax_rate_bps;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (printed on invoices)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Sales tax rate in basis points, e.g. 300 = 3%
    pub tax_rate_bps: u32,

    /// How raw making-charge numbers from the counter are read
    pub making_charge_mode: MakingChargeMode,

    /// Reject discounts larger than the subtotal instead of clamping
    pub strict_discount: bool,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Aurum Jewellers"
    /// - Currency: INR (₹)
    /// - Tax: 3% (1.5% + 1.5%)
    /// - Making charges: flat amounts
    /// - Discounts: clamped to subtotal
    fn default() -> Self {
        ConfigState {
            store_name: "Aurum Jewellers".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            tax_rate_bps: TaxRate::JEWELRY_GST.bps(),
            making_charge_mode: MakingChargeMode::Flat,
            strict_discount: false,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AURUM_STORE_NAME`: Override store name
    /// - `AURUM_TAX_RATE`: Override tax rate as a percentage (e.g., "3")
    /// - `AURUM_MAKING_CHARGE_MODE`: `flat` or `percent`
    /// - `AURUM_STRICT_DISCOUNT`: `true` or `false`
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("AURUM_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(raw) = lookup("AURUM_TAX_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(pct) if pct >= 0.0 => {
                    let bps = TaxRate::from_percentage(pct).bps();
                    match validate_tax_rate_bps(bps) {
                        Ok(()) => config.tax_rate_bps = bps,
                        Err(e) => warn!(value = %raw, error = %e, "Ignoring AURUM_TAX_RATE"),
                    }
                }
                _ => warn!(value = %raw, "Ignoring unparseable AURUM_TAX_RATE"),
            }
        }

        if let Some(raw) = lookup("AURUM_MAKING_CHARGE_MODE") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "flat" => config.making_charge_mode = MakingChargeMode::Flat,
                "percent" | "percentage" => config.making_charge_mode = MakingChargeMode::Percent,
                _ => warn!(value = %raw, "Ignoring unknown AURUM_MAKING_CHARGE_MODE"),
            }
        }

        if let Some(raw) = lookup("AURUM_STRICT_DISCOUNT") {
            match raw.trim().parse::<bool>() {
                Ok(strict) => config.strict_discount = strict,
                Err(_) => warn!(value = %raw, "Ignoring unparseable AURUM_STRICT_DISCOUNT"),
            }
        }

        config
    }

    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Totals policy derived from this configuration.
    pub fn totals_policy(&self) -> TotalsPolicy {
        let discount_mode = if self.strict_discount {
            DiscountMode::Strict
        } else {
            DiscountMode::Clamp
        };
        TotalsPolicy::new(self.tax_rate(), discount_mode)
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(6321200), "₹63212.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
