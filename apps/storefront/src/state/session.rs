//! # Session State
//!
//! The auth session container: the state machine, the mock user directory,
//! and the handle to the persisted session record.
//!
//! ## Restore-On-Init
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Startup                                      │
//! │                                                                         │
//! │  SessionState::restore(store)                                           │
//! │       │                                                                 │
//! │       ├── store.load() → Ok(Some(user)) ──► Authenticated(user)        │
//! │       ├── store.load() → Ok(None)       ──► Anonymous                  │
//! │       └── store.load() → Err(io)        ──► warn + Anonymous           │
//! │                                                                         │
//! │  A reload restores the session; nothing that can go wrong on disk      │
//! │  keeps the storefront from starting.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The auth state and the directory live behind separate mutexes: commands
//! hold each lock only for the duration of one closure, and never both at
//! once (the login flow resolves the directory first, then completes the
//! state machine).

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use lensloft_core::auth::{AuthState, UserDirectory};
use lensloft_session::SessionStore;

/// The storefront's managed auth session.
#[derive(Debug, Clone)]
pub struct SessionState {
    auth: Arc<Mutex<AuthState>>,
    directory: Arc<Mutex<UserDirectory>>,
    store: SessionStore,
}

impl SessionState {
    /// Creates session state, restoring any persisted session.
    ///
    /// Corrupt or missing records mean an anonymous start - the store
    /// already treats those as `Ok(None)`, and even a real I/O error only
    /// costs the restored session, never the startup.
    pub fn restore(store: SessionStore) -> Self {
        let auth = match store.load() {
            Ok(Some(user)) => {
                info!(email = %user.email, "Restored persisted session");
                let mut state = AuthState::default();
                state.restore(user);
                state
            }
            Ok(None) => AuthState::default(),
            Err(err) => {
                warn!(error = %err, "Could not read session record; starting anonymous");
                AuthState::default()
            }
        };

        SessionState {
            auth: Arc::new(Mutex::new(auth)),
            directory: Arc::new(Mutex::new(UserDirectory::with_demo_users())),
            store,
        }
    }

    /// Executes a function with read access to the auth state.
    pub fn with_auth<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AuthState) -> R,
    {
        let auth = self.auth.lock().expect("Auth mutex poisoned");
        f(&auth)
    }

    /// Executes a function with write access to the auth state.
    pub fn with_auth_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AuthState) -> R,
    {
        let mut auth = self.auth.lock().expect("Auth mutex poisoned");
        f(&mut auth)
    }

    /// Executes a function with write access to the user directory.
    pub fn with_directory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut UserDirectory) -> R,
    {
        let mut directory = self.directory.lock().expect("Directory mutex poisoned");
        f(&mut directory)
    }

    /// The session record store.
    #[inline]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lensloft_core::types::User;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_fresh_install_starts_anonymous() {
        let dir = TempDir::new().unwrap();
        let session = SessionState::restore(store_in(&dir));

        assert!(session.with_auth(|a| !a.is_authenticated()));
    }

    #[test]
    fn test_persisted_session_is_restored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let user = User {
            id: "22222222-2222-2222-2222-222222222222".to_string(),
            email: "back@x.com".to_string(),
            name: "Back Again".to_string(),
            avatar: None,
            preferences: None,
            created_at: Utc::now(),
        };
        store.save(&user).unwrap();

        let session = SessionState::restore(store);
        assert_eq!(
            session.with_auth(|a| a.user().map(|u| u.email.clone())),
            Some("back@x.com".to_string())
        );
    }

    #[test]
    fn test_corrupt_record_starts_anonymous() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "garbage!!").unwrap();

        let session = SessionState::restore(store);
        assert!(session.with_auth(|a| !a.is_authenticated()));
    }

    #[test]
    fn test_directory_is_seeded_with_demo_account() {
        let dir = TempDir::new().unwrap();
        let session = SessionState::restore(store_in(&dir));

        let known = session.with_directory_mut(|d| d.contains("demo@lensloft.dev"));
        assert!(known);
    }
}
