//! # lensloft-session: Device-Local Session Persistence
//!
//! Owns the storefront's one durable record: the signed-in [`User`],
//! serialized to a JSON file so a reload restores the session.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apps/storefront                                                        │
//! │      │  save on login/signup · clear on logout · load at startup        │
//! │      ▼                                                                  │
//! │  lensloft-session (THIS CRATE)                                          │
//! │      │  one JSON file, written atomically                               │
//! │      ▼                                                                  │
//! │  <data dir>/lensloft-session.json                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Rule
//! Corrupt or missing data is **"no session"**, never an error: `load`
//! returns `Ok(None)` for both, and the storefront starts anonymous.
//!
//! [`User`]: lensloft_core::types::User

pub mod error;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use store::SessionStore;
