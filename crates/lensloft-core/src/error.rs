//! # Error Types
//!
//! Domain-specific error types for lensloft-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lensloft-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── AuthError        - Auth state-machine rejections                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lensloft-session errors (separate crate)                              │
//! │  └── SessionError     - Session record I/O failures                    │
//! │                                                                         │
//! │  Storefront API errors (in app)                                        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (email, product id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Absent lookups are NOT errors - `Option` models them; these types
//!    cover genuine rejections only

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Auth rejection (wraps AuthError).
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Auth Error
// =============================================================================

/// Rejections raised by the auth session state machine.
///
/// All of these are recoverable: the state machine returns to its
/// pre-attempt state and the user can resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A login/signup field was submitted empty.
    #[error("{field} is required")]
    MissingCredential { field: &'static str },

    /// Signup with an email that already has an account.
    #[error("An account with '{email}' already exists")]
    EmailTaken { email: String },

    /// A second login/signup was submitted while one is still resolving.
    ///
    /// ## Why an explicit rejection?
    /// The UI disables the submit button during an attempt, but the state
    /// machine backstops it: a duplicate submission must not be able to
    /// interleave with the in-flight attempt.
    #[error("An authentication attempt is already in progress")]
    AttemptInProgress,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before state-machine operations run, and
/// surfaced as field-level messages in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email, unknown routing token).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AuthError::EmailTaken {
            email: "a@x.com".to_string(),
        };
        assert_eq!(err.to_string(), "An account with 'a@x.com' already exists");

        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_nesting_into_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let auth_err: CoreError = AuthError::AttemptInProgress.into();
        assert!(matches!(auth_err, CoreError::Auth(_)));
    }
}
