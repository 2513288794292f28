//! # Catalog State
//!
//! The shared handle to the product catalog.
//!
//! ## Thread Safety
//! The catalog is immutable after construction (it is seeded once at
//! startup and never written again), so an `Arc` without a lock is all
//! the sharing it needs.

use std::sync::Arc;

use lensloft_core::catalog::Catalog;

/// Shared, read-only catalog handle.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Wraps an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Creates the state around the compiled-in demo catalog.
    pub fn seeded() -> Self {
        CatalogState::new(Catalog::seeded())
    }

    /// The catalog itself.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::seeded()
    }
}
