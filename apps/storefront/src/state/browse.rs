//! # Browse State
//!
//! The products grid's live inputs: free-text query, filter sidebar state,
//! and the selected sort key.
//!
//! ## Where Inputs Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Browse State Inputs                                  │
//! │                                                                         │
//! │  Routing layer (?q=..., ?category=...) ──► from_route() at page load   │
//! │  Header search box ──────────────────────► set_search_query command    │
//! │  Sidebar checkboxes / price slider ──────► update_filters command      │
//! │  Sort dropdown ──────────────────────────► set_sort command            │
//! │  "Clear filters" ────────────────────────► clear_filters command       │
//! │                                                                         │
//! │  Every change re-runs the pure engine over the full catalog - the      │
//! │  grid never holds a stale result set.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront does not own URL state; the routing layer reads and
//! writes the query string and merely hands the tokens over.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use lensloft_core::filter::{FilterOptions, SortKey};
use lensloft_core::types::Category;

/// The current grid inputs, as one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    /// Free-text search query (already trimmed).
    pub query: String,

    /// Sidebar filter state.
    pub filters: FilterOptions,

    /// Selected sort key.
    pub sort: SortKey,
}

impl Default for BrowseQuery {
    /// A fresh products page: no query, sidebar defaults, popular-first.
    fn default() -> Self {
        BrowseQuery {
            query: String::new(),
            filters: FilterOptions::browse_default(),
            sort: SortKey::default(),
        }
    }
}

/// The storefront's managed browse state.
#[derive(Debug, Clone)]
pub struct BrowseState {
    inner: Arc<Mutex<BrowseQuery>>,
}

impl BrowseState {
    /// Creates browse state with page-load defaults.
    pub fn new() -> Self {
        BrowseState {
            inner: Arc::new(Mutex::new(BrowseQuery::default())),
        }
    }

    /// Creates browse state from navigational parameters.
    ///
    /// The routing layer calls this when the products page is entered with
    /// `?q=` and/or `?category=` present.
    pub fn from_route(query: Option<&str>, category: Option<Category>) -> Self {
        let mut initial = BrowseQuery::default();

        if let Some(query) = query {
            initial.query = query.trim().to_string();
        }
        if let Some(category) = category {
            initial.filters.category = vec![category];
        }

        BrowseState {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Executes a function with read access to the browse state.
    pub fn with_browse<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BrowseQuery) -> R,
    {
        let browse = self.inner.lock().expect("Browse mutex poisoned");
        f(&browse)
    }

    /// Executes a function with write access to the browse state.
    pub fn with_browse_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BrowseQuery) -> R,
    {
        let mut browse = self.inner.lock().expect("Browse mutex poisoned");
        f(&mut browse)
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
