//! # Config Commands
//!
//! Read-only access to the configuration loaded at startup.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (to configure the UI)
/// - Invoice printing (store name, currency)
/// - Deciding whether the making-charge field takes paise or a percentage
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
