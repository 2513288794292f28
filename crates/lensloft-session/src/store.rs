//! # Session Store
//!
//! Load/save/clear for the single persisted session record.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Record Lifecycle                             │
//! │                                                                         │
//! │  App startup ──────► load() ──┬── file missing ───► Ok(None)           │
//! │                               ├── file corrupt ───► warn + discard     │
//! │                               │                      ──► Ok(None)       │
//! │                               └── file valid ─────► Ok(Some(user))     │
//! │                                                                         │
//! │  Login/signup ─────► save(&user)   (temp file + rename, never torn)    │
//! │                                                                         │
//! │  Logout ──────────► clear()        (missing file is fine)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SessionResult;
use lensloft_core::types::User;

/// Persists the signed-in user as one JSON file.
///
/// ## Usage
/// ```rust,no_run
/// use std::path::PathBuf;
/// use lensloft_session::SessionStore;
///
/// let store = SessionStore::new(PathBuf::from("/tmp/lensloft-session.json"));
/// let restored = store.load()?; // None on a fresh install
/// # Ok::<(), lensloft_session::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session, if there is a usable one.
    ///
    /// ## Behavior
    /// - File missing: `Ok(None)` - fresh install or post-logout
    /// - File unparseable: warn, delete the junk, `Ok(None)` - the record
    ///   format may have changed between versions, or the file was edited;
    ///   either way the visitor just starts anonymous
    /// - File valid: `Ok(Some(user))`
    pub fn load(&self) -> SessionResult<Option<User>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session record on disk");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                debug!(email = %user.email, "Restored session record");
                Ok(Some(user))
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding unparseable session record"
                );
                // Best effort - if the delete fails we'll just discard again
                // next startup.
                let _ = fs::remove_file(&self.path);
                Ok(None)
            }
        }
    }

    /// Persists the signed-in user.
    ///
    /// Writes to a sibling temp file and renames it into place, so a crash
    /// mid-write can never leave a torn record for the next startup.
    pub fn save(&self, user: &User) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(user)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        debug!(email = %user.email, path = %self.path.display(), "Saved session record");
        Ok(())
    }

    /// Removes the persisted session. A missing file is not an error.
    pub fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared session record");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lensloft_core::types::{Preferences, User};
    use tempfile::TempDir;

    fn test_user() -> User {
        User {
            id: "11111111-1111-1111-1111-111111111111".to_string(),
            email: "saved@x.com".to_string(),
            name: "Saved".to_string(),
            avatar: None,
            preferences: Some(Preferences::starter()),
            created_at: Utc::now(),
        }
    }

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("lensloft-session.json"))
    }

    #[test]
    fn test_load_missing_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let user = test_user();

        store.save(&user).unwrap();
        let restored = store.load().unwrap().unwrap();

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.email, user.email);
        assert_eq!(restored.preferences, user.preferences);
    }

    #[test]
    fn test_corrupt_record_is_discarded_silently() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{ not json at all").unwrap();

        // Corrupt data is "no session", never an error
        assert!(store.load().unwrap().is_none());

        // ...and the junk file is gone, so the next load is clean too
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_record_is_discarded() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        // Valid JSON, wrong shape (missing required fields)
        fs::write(store.path(), r#"{"hello": "world"}"#).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&test_user()).unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());

        // Clearing an already-clear store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested/deeper/session.json"));

        store.save(&test_user()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut user = test_user();
        store.save(&user).unwrap();

        user.name = "Renamed".to_string();
        store.save(&user).unwrap();

        assert_eq!(store.load().unwrap().unwrap().name, "Renamed");
    }
}
