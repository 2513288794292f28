//! # Auth Commands
//!
//! Login, signup, logout and profile updates over the auth session.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User submits the auth dialog                                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  invoke('login', { email, password })                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Validate fields (empty email/password fails fast,          │    │
//! │  │     the state machine is never touched)                        │    │
//! │  │  2. begin_attempt() - a second submit while one is in flight   │    │
//! │  │     is rejected here                                           │    │
//! │  │  3. Simulated backend latency (tokio sleep)                    │    │
//! │  │  4. Directory lookup - unknown emails get an account           │    │
//! │  │     registered on the fly (demo permissiveness)                │    │
//! │  │  5. complete(user), persist the session record                 │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Header swaps the sign-in link for the account menu                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Signup differs in step 4 only: a taken email is a business rejection,
//! `fail()` returns the machine to its pre-attempt state (an existing
//! session under another account survives the rejected attempt).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::SessionState;
use lensloft_core::auth::AuthState;
use lensloft_core::error::ValidationError;
use lensloft_core::types::{User, UserPatch};
use lensloft_core::validation::{validate_display_name, validate_email, validate_password};

/// Response for a successful login/signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
}

/// Signs a user in.
///
/// ## Behavior
/// - Empty email or password: validation failure, state untouched
/// - Known email: signs in as that account
/// - Unknown email: registers an account derived from the address and
///   signs in as it (demo-only permissive behavior - not a security model)
///
/// ## Errors
/// - `VALIDATION_ERROR` for empty fields
/// - `AUTH_ERROR` for a duplicate submission while an attempt is resolving
pub async fn login(
    session: &SessionState,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    debug!(email = %email, "login command");

    // Field validation happens before the state machine is touched; login
    // only requires presence, not a well-formed address.
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        }
        .into());
    }
    validate_password(password)?;

    session.with_auth_mut(|auth| auth.begin_attempt())?;

    // Simulated backend round-trip; the dialog shows its loading state here
    tokio::time::sleep(Duration::from_millis(config.auth_latency_ms)).await;

    let user = session.with_directory_mut(|directory| directory.find_or_synthesize(email));

    session.with_auth_mut(|auth| auth.complete(user.clone()));
    persist_session(session);

    info!(email = %user.email, "login complete");
    Ok(AuthResponse { user })
}

/// Creates an account and signs it in.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a malformed email, empty password or name
/// - `AUTH_ERROR` when the email already has an account, or for a
///   duplicate submission. A rejected signup leaves any existing session
///   exactly as it was.
pub async fn signup(
    session: &SessionState,
    config: &AppConfig,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthResponse, ApiError> {
    debug!(email = %email, "signup command");

    let email = validate_email(email)?;
    validate_password(password)?;
    let name = validate_display_name(name)?;

    session.with_auth_mut(|auth| auth.begin_attempt())?;

    tokio::time::sleep(Duration::from_millis(config.auth_latency_ms)).await;

    let registered =
        session.with_directory_mut(|directory| directory.register_account(&email, &name));

    match registered {
        Ok(user) => {
            session.with_auth_mut(|auth| auth.complete(user.clone()));
            persist_session(session);

            info!(email = %user.email, "signup complete");
            Ok(AuthResponse { user })
        }
        Err(rejection) => {
            // Business rejection: back to the pre-attempt state
            session.with_auth_mut(|auth| auth.fail());
            persist_session(session);

            debug!(email = %email, "signup rejected");
            Err(rejection.into())
        }
    }
}

/// Ends the session. Always lands anonymous, and always clears the
/// persisted record.
pub fn logout(session: &SessionState) -> AuthState {
    debug!("logout command");

    session.with_auth_mut(|auth| auth.logout());
    persist_session(session);

    session.with_auth(|auth| auth.clone())
}

/// The signed-in user, if any. Anonymous is a normal answer, not an error.
pub fn current_user(session: &SessionState) -> Option<User> {
    session.with_auth(|auth| auth.user().cloned())
}

/// The full auth state, for the frontend to render auth-dependent chrome.
pub fn auth_state(session: &SessionState) -> AuthState {
    session.with_auth(|auth| auth.clone())
}

/// Applies a partial profile update to the signed-in user.
///
/// ## Errors
/// `AUTH_ERROR` when nobody is signed in.
pub fn update_user(session: &SessionState, patch: UserPatch) -> Result<User, ApiError> {
    debug!("update_user command");

    let updated = session
        .with_auth_mut(|auth| auth.update_user(patch).cloned())
        .ok_or_else(|| ApiError::auth("No active session"))?;

    persist_session(session);
    Ok(updated)
}

/// Mirrors the auth state to the session record: save while authenticated,
/// clear otherwise.
///
/// Persistence failures cost the cross-reload session, nothing else - the
/// in-memory session is already in its new state, so we log and move on.
fn persist_session(session: &SessionState) {
    let user = session.with_auth(|auth| auth.user().cloned());

    let result = match &user {
        Some(user) => session.store().save(user),
        None => session.store().clear(),
    };

    if let Err(err) = result {
        warn!(error = %err, "Session record update failed");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use lensloft_session::SessionStore;
    use tempfile::TempDir;

    fn setup(dir: &TempDir) -> (SessionState, AppConfig) {
        let path = dir.path().join("session.json");
        let session = SessionState::restore(SessionStore::new(path.clone()));
        let config = AppConfig::for_tests(path);
        (session, config)
    }

    #[tokio::test]
    async fn test_login_requires_email_and_password() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        let no_email = login(&session, &config, "", "pw").await.unwrap_err();
        assert_eq!(no_email.code, ErrorCode::ValidationError);

        let no_password = login(&session, &config, "a@x.com", "").await.unwrap_err();
        assert_eq!(no_password.code, ErrorCode::ValidationError);

        // Neither failure touched the state machine
        assert!(current_user(&session).is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_registers_account() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        let response = login(&session, &config, "new@x.com", "pw").await.unwrap();
        assert_eq!(response.user.email, "new@x.com");
        assert_eq!(response.user.name, "new");

        // Logging in again resolves to the same account
        logout(&session);
        let again = login(&session, &config, "new@x.com", "pw").await.unwrap();
        assert_eq!(again.user.id, response.user.id);
    }

    #[tokio::test]
    async fn test_login_known_demo_account() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        let response = login(&session, &config, "demo@lensloft.dev", "pw")
            .await
            .unwrap();
        assert_eq!(response.user.name, "Demo User");
        assert!(auth_state(&session).is_authenticated());
    }

    #[tokio::test]
    async fn test_login_persists_session_across_restore() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        login(&session, &config, "back@x.com", "pw").await.unwrap();

        // A "reload": fresh SessionState over the same store
        let reloaded = SessionState::restore(session.store().clone());
        assert_eq!(
            current_user(&reloaded).map(|u| u.email),
            Some("back@x.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_record() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        login(&session, &config, "gone@x.com", "pw").await.unwrap();
        let state = logout(&session);
        assert_eq!(state, AuthState::Anonymous);

        let reloaded = SessionState::restore(session.store().clone());
        assert!(current_user(&reloaded).is_none());
    }

    #[tokio::test]
    async fn test_signup_then_duplicate_signup_fails() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        let first = signup(&session, &config, "a@x.com", "pw123", "A")
            .await
            .unwrap();
        assert_eq!(first.user.email, "a@x.com");

        let duplicate = signup(&session, &config, "a@x.com", "pw456", "Imposter")
            .await
            .unwrap_err();
        assert_eq!(duplicate.code, ErrorCode::AuthError);
    }

    #[tokio::test]
    async fn test_rejected_signup_keeps_existing_session() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        signup(&session, &config, "a@x.com", "pw123", "A")
            .await
            .unwrap();

        // Sign in under a different account, then try to sign up with the
        // taken email
        login(&session, &config, "b@x.com", "pw").await.unwrap();
        let rejection = signup(&session, &config, "a@x.com", "pw", "Again").await;
        assert!(rejection.is_err());

        // Still signed in as b@x.com, in memory AND on disk
        assert_eq!(
            current_user(&session).map(|u| u.email),
            Some("b@x.com".to_string())
        );
        let reloaded = SessionState::restore(session.store().clone());
        assert_eq!(
            current_user(&reloaded).map(|u| u.email),
            Some("b@x.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_signup_validates_fields() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        assert!(signup(&session, &config, "not-an-email", "pw", "A")
            .await
            .is_err());
        assert!(signup(&session, &config, "a@x.com", "", "A").await.is_err());
        assert!(signup(&session, &config, "a@x.com", "pw", "").await.is_err());

        assert!(current_user(&session).is_none());
    }

    #[tokio::test]
    async fn test_duplicate_submission_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        // Simulate an attempt still resolving
        session
            .with_auth_mut(|auth| auth.begin_attempt())
            .unwrap();

        let second = login(&session, &config, "a@x.com", "pw").await.unwrap_err();
        assert_eq!(second.code, ErrorCode::AuthError);

        // The in-flight attempt is undisturbed
        assert!(session.with_auth(|a| a.is_authenticating()));
    }

    #[tokio::test]
    async fn test_update_user_persists_patch() {
        let dir = TempDir::new().unwrap();
        let (session, config) = setup(&dir);

        login(&session, &config, "me@x.com", "pw").await.unwrap();

        let updated = update_user(
            &session,
            UserPatch {
                name: Some("Maya".to_string()),
                ..UserPatch::default()
            },
        )
        .unwrap();
        assert_eq!(updated.name, "Maya");

        let reloaded = SessionState::restore(session.store().clone());
        assert_eq!(
            current_user(&reloaded).map(|u| u.name),
            Some("Maya".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_user_while_anonymous_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (session, _config) = setup(&dir);

        let err = update_user(&session, UserPatch::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthError);
    }
}
