//! # Config Commands
//!
//! Read-only access to the resolved application configuration.

use tracing::debug;

use crate::config::AppConfig;

/// Returns the resolved configuration.
///
/// ## When Used
/// - Frontend startup, to render the store name and currency symbol
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}
