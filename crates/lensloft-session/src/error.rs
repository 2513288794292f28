//! # Session Store Errors
//!
//! Only genuinely unexpected I/O surfaces as an error. The failure modes a
//! storefront actually sees day-to-day - no file yet, a corrupt file - are
//! handled inside the store and reported as "no session".

use thiserror::Error;

/// Errors from session record operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem operation failed (permissions, disk full, ...).
    #[error("Session store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The user record could not be serialized.
    ///
    /// Deserialization failures never land here - a record that can't be
    /// parsed is discarded as "no session".
    #[error("Session record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
