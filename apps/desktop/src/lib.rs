//! # Aurum Desktop Library
//!
//! Command layer for the Aurum POS counter application. The UI shell owns
//! the window and persistence; this crate owns state and commands and
//! delegates all arithmetic to `aurum-core`.
//!
//! ## Module Organization
//! ```text
//! aurum_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state (AURUM_* env vars)
//! │   ├── order.rs    ◄─── Order being written up
//! │   ├── rates.rs    ◄─── Rate master
//! │   └── catalog.rs  ◄─── Products on the shelf
//! ├── commands/
//! │   ├── pricing.rs  ◄─── Line quotes
//! │   ├── order.rs    ◄─── Order manipulation
//! │   ├── rates.rs    ◄─── Daily rate board
//! │   ├── catalog.rs  ◄─── Product add/edit/lookup
//! │   ├── report.rs   ◄─── Stock and sales summaries
//! │   └── config.rs   ◄─── Configuration
//! ├── shell.rs        ◄─── #[tauri::command] adapters (feature `tauri-shell`)
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()      RUST_LOG or "info,aurum=debug"                  │
//! │  2. AppStates::from_env()                                               │
//! │       • ConfigState from AURUM_* variables                              │
//! │       • Empty order, rate master and catalog                            │
//! │  3. Shell loads rates/products into RateState / CatalogState            │
//! │  4. Shell routes UI events to `commands::*` (`shell::register`)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
#[cfg(feature = "tauri-shell")]
pub mod shell;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigState, OrderState, RateState};

/// Every piece of state the commands need, built once at startup.
#[derive(Debug, Default)]
pub struct AppStates {
    pub config: ConfigState,
    pub order: OrderState,
    pub rates: RateState,
    pub catalog: CatalogState,
}

impl AppStates {
    /// Reads configuration from the environment and starts with an empty
    /// order, rate master and catalog.
    pub fn from_env() -> Self {
        let config = ConfigState::from_env();
        info!(
            store = %config.store_name,
            tax_rate_bps = config.tax_rate_bps,
            making_charge_mode = ?config.making_charge_mode,
            strict_discount = config.strict_discount,
            "State initialized"
        );

        AppStates {
            config,
            ..AppStates::default()
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aurum=trace` - Show trace for aurum crates only
/// - Default: INFO, DEBUG for aurum crates
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,aurum=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
