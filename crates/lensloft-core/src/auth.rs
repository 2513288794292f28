//! # Auth Session State Machine
//!
//! The small finite-state machine behind login/signup/logout, plus the
//! mock user directory that stands in for an account backend.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Auth Session States                                  │
//! │                                                                         │
//! │                  begin_attempt()                                        │
//! │  ┌───────────┐ ─────────────────► ┌────────────────┐                   │
//! │  │ Anonymous │                    │ Authenticating │                   │
//! │  └───────────┘ ◄───────────────── └────────────────┘                   │
//! │        ▲            fail()                │                             │
//! │        │        (no prior session)       │ complete(user)              │
//! │        │                                  ▼                             │
//! │        │       logout()           ┌────────────────┐                   │
//! │        └───────────────────────── │ Authenticated  │                   │
//! │                                   └────────────────┘                   │
//! │                                           │    ▲                        │
//! │                          begin_attempt()  │    │ fail() restores the    │
//! │                          (re-auth)        ▼    │ prior session          │
//! │                                   ┌────────────────┐                   │
//! │                                   │ Authenticating │                   │
//! │                                   └────────────────┘                   │
//! │                                                                         │
//! │  begin_attempt() while Authenticating ──► Err(AttemptInProgress)       │
//! │  (a duplicate submission can never interleave with a live attempt)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected attempt returns the machine to its pre-attempt state: an
//! anonymous visitor stays anonymous, and a signed-in user who fails to
//! switch accounts keeps their current session.
//!
//! ## Not a Security Model
//! The directory accepts any non-empty credentials and registers unknown
//! emails on the fly. This is demo behavior for a storefront without a
//! backend - nothing here verifies a password.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::AuthError;
use crate::types::{Preferences, User, UserPatch};

/// Id of the demo account every fresh directory knows about.
pub const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

// =============================================================================
// Auth State
// =============================================================================

/// The auth session, one per storefront instance.
///
/// Serialized for the frontend as `{ status: "anonymous" }`,
/// `{ status: "authenticating" }`, or
/// `{ status: "authenticated", user: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "user", rename_all = "camelCase")]
pub enum AuthState {
    /// No session. The initial state.
    Anonymous,

    /// A login/signup is resolving.
    Authenticating {
        /// The session to fall back to if the attempt is rejected.
        /// Internal bookkeeping - the frontend never sees it.
        #[serde(skip)]
        prior: Option<User>,
    },

    /// A user is signed in.
    Authenticated(User),
}

impl AuthState {
    /// Marks the start of a login/signup attempt.
    ///
    /// ## Errors
    /// `AttemptInProgress` when an attempt is already resolving. The UI
    /// disables the submit button during an attempt; this is the state
    /// machine's own backstop.
    pub fn begin_attempt(&mut self) -> Result<(), AuthError> {
        match self {
            AuthState::Authenticating { .. } => Err(AuthError::AttemptInProgress),
            AuthState::Anonymous => {
                *self = AuthState::Authenticating { prior: None };
                Ok(())
            }
            AuthState::Authenticated(user) => {
                let prior = Some(user.clone());
                *self = AuthState::Authenticating { prior };
                Ok(())
            }
        }
    }

    /// Resolves the in-flight attempt successfully.
    pub fn complete(&mut self, user: User) {
        *self = AuthState::Authenticated(user);
    }

    /// Resolves the in-flight attempt as rejected.
    ///
    /// The machine returns to its pre-attempt state: `Anonymous` for a
    /// first-time visitor, or the previously authenticated session when
    /// the attempt was a re-auth.
    pub fn fail(&mut self) {
        *self = match std::mem::replace(self, AuthState::Anonymous) {
            AuthState::Authenticating { prior: Some(user) } => AuthState::Authenticated(user),
            _ => AuthState::Anonymous,
        };
    }

    /// Ends the session. Always lands in `Anonymous`.
    pub fn logout(&mut self) {
        *self = AuthState::Anonymous;
    }

    /// Restores a persisted session at startup.
    pub fn restore(&mut self, user: User) {
        *self = AuthState::Authenticated(user);
    }

    /// Applies a partial profile update to the signed-in user.
    ///
    /// Returns the updated user, or `None` when nobody is signed in
    /// (absence is normal control flow, not an error).
    pub fn update_user(&mut self, patch: UserPatch) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => {
                if let Some(name) = patch.name {
                    user.name = name;
                }
                if let Some(avatar) = patch.avatar {
                    user.avatar = Some(avatar);
                }
                if let Some(preferences) = patch.preferences {
                    user.preferences = Some(preferences);
                }
                Some(user)
            }
            _ => None,
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True when a user is signed in.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// True while an attempt is resolving.
    #[inline]
    pub fn is_authenticating(&self) -> bool {
        matches!(self, AuthState::Authenticating { .. })
    }
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::Anonymous
    }
}

// =============================================================================
// User Directory
// =============================================================================

/// The mock account backend: an in-memory list of users keyed by email.
///
/// ## Lifecycle
/// Constructed by the composition root at process start and discarded at
/// process end. Deliberately NOT a global - every storefront instance
/// owns exactly one directory, which keeps tests isolated and makes the
/// eventual swap for a real account service a one-site change.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        UserDirectory { users: Vec::new() }
    }

    /// Creates a directory pre-seeded with the demo account.
    pub fn with_demo_users() -> Self {
        UserDirectory {
            users: vec![User {
                id: DEMO_USER_ID.to_string(),
                email: "demo@lensloft.dev".to_string(),
                name: "Demo User".to_string(),
                avatar: None,
                preferences: Some(Preferences {
                    frame_shape: Some(crate::types::FrameShape::Rectangle),
                    favorite_colors: vec!["black".to_string(), "blue".to_string()],
                }),
                created_at: Utc::now(),
            }],
        }
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no account is registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Looks up an account by its email (the unique business key).
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// True when an account with this email exists.
    pub fn contains(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Resolves a login: the existing account, or a freshly registered one.
    ///
    /// Unknown emails get an account synthesized from the address (demo
    /// permissiveness - a real backend would reject them). The display
    /// name is the email's local part.
    pub fn find_or_synthesize(&mut self, email: &str) -> User {
        if let Some(user) = self.find_by_email(email) {
            return user.clone();
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            avatar: None,
            preferences: Some(Preferences::starter()),
            created_at: Utc::now(),
        };

        self.users.push(user.clone());
        user
    }

    /// Registers a new account for a signup.
    ///
    /// ## Errors
    /// `EmailTaken` when the email already has an account - the one
    /// business rejection signup can produce.
    pub fn register_account(&mut self, email: &str, name: &str) -> Result<User, AuthError> {
        if self.contains(email) {
            return Err(AuthError::EmailTaken {
                email: email.to_string(),
            });
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            avatar: None,
            preferences: Some(Preferences::starter()),
            created_at: Utc::now(),
        };

        self.users.push(user.clone());
        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameShape;

    #[test]
    fn test_initial_state_is_anonymous() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_successful_attempt_from_anonymous() {
        let mut state = AuthState::default();
        let mut directory = UserDirectory::new();

        state.begin_attempt().unwrap();
        assert!(state.is_authenticating());

        let user = directory.find_or_synthesize("new@x.com");
        state.complete(user);

        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.email.as_str()), Some("new@x.com"));
    }

    #[test]
    fn test_failed_attempt_from_anonymous_stays_anonymous() {
        let mut state = AuthState::default();

        state.begin_attempt().unwrap();
        state.fail();

        assert_eq!(state, AuthState::Anonymous);
    }

    #[test]
    fn test_failed_attempt_restores_prior_session() {
        let mut directory = UserDirectory::new();
        let first = directory.find_or_synthesize("first@x.com");

        let mut state = AuthState::Authenticated(first);

        // Try to switch accounts; the attempt is rejected
        state.begin_attempt().unwrap();
        state.fail();

        // Still signed in as the first account
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.email.as_str()), Some("first@x.com"));
    }

    #[test]
    fn test_duplicate_attempt_is_rejected() {
        let mut state = AuthState::default();

        state.begin_attempt().unwrap();
        let second = state.begin_attempt();

        assert_eq!(second, Err(AuthError::AttemptInProgress));
        // The in-flight attempt is undisturbed
        assert!(state.is_authenticating());
    }

    #[test]
    fn test_logout_is_unconditional() {
        let mut directory = UserDirectory::with_demo_users();
        let user = directory.find_or_synthesize("demo@lensloft.dev");

        let mut state = AuthState::Authenticated(user);
        state.logout();
        assert_eq!(state, AuthState::Anonymous);

        // Logging out while anonymous is a no-op, not an error
        state.logout();
        assert_eq!(state, AuthState::Anonymous);
    }

    #[test]
    fn test_restore_lands_authenticated() {
        let mut directory = UserDirectory::new();
        let user = directory.find_or_synthesize("saved@x.com");

        let mut state = AuthState::default();
        state.restore(user);
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_update_user_applies_patch_fields() {
        let mut directory = UserDirectory::new();
        let user = directory.find_or_synthesize("me@x.com");
        let mut state = AuthState::Authenticated(user);

        let updated = state
            .update_user(UserPatch {
                name: Some("Maya".to_string()),
                avatar: None,
                preferences: Some(Preferences {
                    frame_shape: Some(FrameShape::CatEye),
                    favorite_colors: vec!["rose gold".to_string()],
                }),
            })
            .cloned()
            .unwrap();

        assert_eq!(updated.name, "Maya");
        assert_eq!(updated.email, "me@x.com"); // untouched
        assert_eq!(
            updated.preferences.and_then(|p| p.frame_shape),
            Some(FrameShape::CatEye)
        );
    }

    #[test]
    fn test_update_user_while_anonymous_is_absent() {
        let mut state = AuthState::default();
        assert!(state.update_user(UserPatch::default()).is_none());
    }

    #[test]
    fn test_directory_login_registers_unknown_email() {
        let mut directory = UserDirectory::new();
        assert!(directory.is_empty());

        let user = directory.find_or_synthesize("new@x.com");
        assert_eq!(user.name, "new"); // local part of the address
        assert_eq!(directory.len(), 1);

        // Logging in again resolves to the SAME account
        let again = directory.find_or_synthesize("new@x.com");
        assert_eq!(again.id, user.id);
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_directory_rejects_duplicate_signup() {
        let mut directory = UserDirectory::new();

        directory.register_account("a@x.com", "A").unwrap();
        let second = directory.register_account("a@x.com", "Somebody Else");

        assert_eq!(
            second,
            Err(AuthError::EmailTaken {
                email: "a@x.com".to_string()
            })
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_demo_directory_seed() {
        let directory = UserDirectory::with_demo_users();
        let demo = directory.find_by_email("demo@lensloft.dev").unwrap();
        assert_eq!(demo.id, DEMO_USER_ID);
        assert_eq!(demo.name, "Demo User");
    }
}
