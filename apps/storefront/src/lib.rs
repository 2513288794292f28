//! # LensLoft Storefront Library
//!
//! The composition root for the LensLoft storefront: builds the state
//! containers, restores the persisted session, and exposes the command
//! layer a webview frontend invokes.
//!
//! ## Module Organization
//! ```text
//! lensloft_storefront/
//! ├── lib.rs          ◄─── You are here (composition root)
//! ├── config.rs       ◄─── AppConfig (env overrides over defaults)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only catalog handle
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── browse.rs   ◄─── Query/filter/sort state
//! │   └── session.rs  ◄─── Auth state + directory + session store
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product lookup commands
//! │   ├── browse.rs   ◄─── Grid engine + routing setters
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── auth.rs     ◄─── Login/signup/logout commands
//! │   └── config.rs   ◄─── Config snapshot command
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,lensloft=debug; override with RUST_LOG              │
//! │                                                                         │
//! │  2. Resolve Configuration ────────────────────────────────────────────► │
//! │     • Defaults + LENSLOFT_* env overrides                               │
//! │                                                                         │
//! │  3. Resolve Session Record Path ──────────────────────────────────────► │
//! │     • macOS: ~/Library/Application Support/com.lensloft.storefront/     │
//! │     • Windows: %APPDATA%\lensloft\storefront\                           │
//! │     • Linux: ~/.local/share/lensloft-storefront/                        │
//! │                                                                         │
//! │  4. Build State Containers ───────────────────────────────────────────► │
//! │     • CatalogState: the compiled-in demo catalog                        │
//! │     • CartState: empty cart behind a Mutex                              │
//! │     • BrowseState: page-load defaults                                   │
//! │     • SessionState: auth FSM + directory, session restored from disk    │
//! │                                                                         │
//! │  5. Hand the Storefront to the UI shell ──────────────────────────────► │
//! │     • every UI event invokes one command against these containers       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use lensloft_session::SessionStore;
use state::{BrowseState, CartState, CatalogState, SessionState};

/// The storefront composition root.
///
/// Owns every state container. The UI shell holds one of these and routes
/// each UI event to a command, passing the container(s) the command
/// declares.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: AppConfig,
    pub catalog: CatalogState,
    pub cart: CartState,
    pub browse: BrowseState,
    pub session: SessionState,
}

impl Storefront {
    /// Builds the storefront: seeds the catalog, starts an empty cart and
    /// default browse state, and restores any persisted session.
    pub fn new(config: AppConfig) -> Self {
        let session_path = session_record_path(&config);
        info!(path = %session_path.display(), "Session record path resolved");

        let session = SessionState::restore(SessionStore::new(session_path));
        let catalog = CatalogState::seeded();
        info!(products = catalog.catalog().len(), "Catalog seeded");

        Storefront {
            config,
            catalog,
            cart: CartState::new(),
            browse: BrowseState::new(),
            session,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=lensloft=trace` - Trace for lensloft crates only
/// - Default: info, with debug for lensloft crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lensloft=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the session record path.
///
/// ## Resolution Order
/// 1. `AppConfig::session_path` (set via `LENSLOFT_SESSION_PATH`)
/// 2. The platform data directory
/// 3. The working directory, if the platform gives us no home at all
fn session_record_path(config: &AppConfig) -> PathBuf {
    if let Some(path) = &config.session_path {
        return path.clone();
    }

    match ProjectDirs::from("com", "lensloft", "storefront") {
        Some(dirs) => dirs.data_dir().join("lensloft-session.json"),
        None => {
            warn!("No platform data directory; keeping the session record in the working directory");
            PathBuf::from("lensloft-session.json")
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storefront_builds_with_seeded_catalog() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::for_tests(dir.path().join("session.json"));

        let app = Storefront::new(config);
        assert_eq!(app.catalog.catalog().len(), 8);
        assert!(app.cart.with_cart(|c| c.is_empty()));
        assert!(app.session.with_auth(|a| !a.is_authenticated()));
    }

    #[test]
    fn test_session_path_override_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        let config = AppConfig::for_tests(path.clone());

        assert_eq!(session_record_path(&config), path);
    }
}
