//! # lensloft-core: Pure Business Logic for the LensLoft Storefront
//!
//! This crate is the **heart** of LensLoft. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       LensLoft Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (webview)                           │   │
//! │  │    Browse UI ──► Product Detail ──► Cart Drawer ──► Auth Dialog│   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command invocations                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Storefront Commands                            │   │
//! │  │    browse_products, add_to_cart, login, signup, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lensloft-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  filter   │  │   cart    │  │   auth    │  │   │
//! │  │   │  Product  │  │  SortKey  │  │   Cart    │  │ AuthState │  │   │
//! │  │   │   seed    │  │  engine   │  │ CartItem  │  │ Directory │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               lensloft-session (Persistence Layer)              │   │
//! │  │            one JSON record: the signed-in User                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Category, FrameShape, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The compiled-in product catalog and its lookups
//! - [`filter`] - The pure filter/sort engine behind the products grid
//! - [`cart`] - Cart state machine (add/update/remove/clear + derived totals)
//! - [`auth`] - Auth session state machine and the mock user directory
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation run before state-machine operations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupees (i64), no floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lensloft_core::catalog::Catalog;
//! use lensloft_core::filter::{filter_and_sort, FilterOptions, SortKey};
//!
//! let catalog = Catalog::seeded();
//!
//! // Everything in stock, cheapest first
//! let filters = FilterOptions::default();
//! let hits = filter_and_sort(catalog.all(), "", &filters, SortKey::PriceLow);
//! assert_eq!(hits.len(), catalog.len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lensloft_core::Money` instead of
// `use lensloft_core::money::Money`

pub use auth::{AuthState, UserDirectory};
pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use error::{AuthError, CoreError, ValidationError};
pub use filter::{FilterOptions, PriceRange, SortKey};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single frame in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
/// Enforced by the quantity validators the UI layer calls, not by the
/// cart itself (the cart clamps low, never high).
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Maximum length of a free-text search query
pub const MAX_QUERY_LEN: usize = 100;
