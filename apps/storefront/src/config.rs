//! # Configuration
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LENSLOFT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// ## Fields
/// Every field has a development default; the env overrides exist mostly
/// so tests and the dev harness can redirect the session file and collapse
/// the simulated auth latency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Store name shown in the header and page titles.
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Override for the session record path.
    /// `None` means the platform data directory.
    pub session_path: Option<PathBuf>,

    /// Simulated backend latency for login/signup, in milliseconds.
    ///
    /// The mock directory resolves instantly; this delay is what makes the
    /// auth dialog's loading state actually visible, and what any real
    /// backend would impose anyway.
    pub auth_latency_ms: u64,
}

impl Default for AppConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        AppConfig {
            store_name: "LensLoft".to_string(),
            currency_symbol: "₹".to_string(),
            session_path: None,
            auth_latency_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LENSLOFT_STORE_NAME`: Override the store name
    /// - `LENSLOFT_SESSION_PATH`: Override the session record path
    /// - `LENSLOFT_AUTH_LATENCY_MS`: Override the simulated auth latency
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(store_name) = std::env::var("LENSLOFT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(path) = std::env::var("LENSLOFT_SESSION_PATH") {
            config.session_path = Some(PathBuf::from(path));
        }

        if let Ok(latency_str) = std::env::var("LENSLOFT_AUTH_LATENCY_MS") {
            if let Ok(latency) = latency_str.parse::<u64>() {
                config.auth_latency_ms = latency;
            }
        }

        config
    }

    /// A config for tests: no disk default path surprises, no latency.
    #[cfg(test)]
    pub fn for_tests(session_path: PathBuf) -> Self {
        AppConfig {
            session_path: Some(session_path),
            auth_latency_ms: 0,
            ..AppConfig::default()
        }
    }
}
