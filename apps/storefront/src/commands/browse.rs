//! # Browse Commands
//!
//! The products grid: routing setters, filter/sort mutations, and the
//! command that runs the pure engine over the catalog.
//!
//! ## Grid Update Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Grid Update Cycle                                    │
//! │                                                                         │
//! │  UI event ──► set_search_query / set_category / update_filters /       │
//! │              set_sort / clear_filters                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  BrowseState mutates (one field of BrowseQuery)                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  frontend re-invokes browse_products()                                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  filter_and_sort(catalog, query, filters, sort)  ◄── pure, stateless   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ordered Vec<ProductDto> re-renders the grid                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{BrowseQuery, BrowseState, CatalogState};
use lensloft_core::filter::{filter_and_sort, FilterOptions, SortKey};
use lensloft_core::types::Category;
use lensloft_core::validation::validate_search_query;

/// Runs the filter/sort engine over the catalog with the current browse
/// state and returns the ordered grid contents.
pub fn browse_products(catalog: &CatalogState, browse: &BrowseState) -> Vec<ProductDto> {
    let start = Instant::now();

    let hits = browse.with_browse(|query| {
        filter_and_sort(
            catalog.catalog().all(),
            &query.query,
            &query.filters,
            query.sort,
        )
    });

    let dtos: Vec<ProductDto> = hits.iter().map(ProductDto::from).collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        "browse_products complete"
    );

    dtos
}

/// The current browse state, for the sidebar/sort controls to render from.
pub fn get_browse_state(browse: &BrowseState) -> BrowseQuery {
    browse.with_browse(|query| query.clone())
}

/// Sets the free-text query (header search box, or `?q=` at page load).
///
/// ## Errors
/// `VALIDATION_ERROR` when the query exceeds the length cap.
pub fn set_search_query(browse: &BrowseState, query: &str) -> Result<BrowseQuery, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "set_search_query command");

    Ok(browse.with_browse_mut(|state| {
        state.query = query;
        state.clone()
    }))
}

/// Replaces the category filter with a single category (navigation links
/// and the `?category=` routing parameter).
///
/// ## Errors
/// `VALIDATION_ERROR` for an unknown category token.
pub fn set_category(browse: &BrowseState, category_token: &str) -> Result<BrowseQuery, ApiError> {
    let category: Category = category_token.parse()?;
    debug!(category = %category, "set_category command");

    Ok(browse.with_browse_mut(|state| {
        state.filters.category = vec![category];
        state.clone()
    }))
}

/// Selects the grid's sort key.
pub fn set_sort(browse: &BrowseState, sort: SortKey) -> BrowseQuery {
    debug!(sort = %sort.as_token(), "set_sort command");

    browse.with_browse_mut(|state| {
        state.sort = sort;
        state.clone()
    })
}

/// Replaces the whole sidebar filter state (checkbox toggles and the
/// price slider submit one merged record).
pub fn update_filters(browse: &BrowseState, filters: FilterOptions) -> BrowseQuery {
    debug!("update_filters command");

    browse.with_browse_mut(|state| {
        state.filters = filters;
        state.clone()
    })
}

/// Resets the sidebar and the search query to page-load defaults.
///
/// Idempotent: clearing twice leaves exactly the same state as once.
/// The sort key is deliberately untouched - clearing filters should not
/// reshuffle the grid ordering the user picked.
pub fn clear_filters(browse: &BrowseState) -> BrowseQuery {
    debug!("clear_filters command");

    browse.with_browse_mut(|state| {
        state.filters = FilterOptions::browse_default();
        state.query.clear();
        state.clone()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_defaults_show_whole_catalog_popular_first() {
        let catalog = CatalogState::seeded();
        let browse = BrowseState::new();

        let grid = browse_products(&catalog, &browse);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0].id, "4"); // 891 reviews, most popular
    }

    #[test]
    fn test_category_plus_price_low_end_to_end() {
        let catalog = CatalogState::seeded();
        let browse = BrowseState::new();

        set_category(&browse, "eyeglasses").unwrap();
        set_sort(&browse, SortKey::PriceLow);

        let grid = browse_products(&catalog, &browse);
        let ids: Vec<&str> = grid.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "2", "6"]);
        assert_eq!(
            grid.iter().map(|p| p.price_rupees).collect::<Vec<_>>(),
            vec![1200, 1650, 1800, 2100]
        );
    }

    #[test]
    fn test_search_query_narrows_grid() {
        let catalog = CatalogState::seeded();
        let browse = BrowseState::new();

        set_search_query(&browse, "  blue light  ").unwrap();
        let grid = browse_products(&catalog, &browse);

        // "Blue Light Protection" (1) and "Blue Light Filter"/name (4)
        let ids: Vec<&str> = grid.iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&"1"));
        assert!(ids.contains(&"4"));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_set_category_replaces_previous_selection() {
        let browse = BrowseState::new();

        set_category(&browse, "eyeglasses").unwrap();
        set_category(&browse, "sunglasses").unwrap();

        let state = get_browse_state(&browse);
        assert_eq!(state.filters.category, vec![Category::Sunglasses]);
    }

    #[test]
    fn test_unknown_category_token_is_rejected() {
        let browse = BrowseState::new();
        assert!(set_category(&browse, "prescription-sunglasses").is_err());

        // State untouched by the failed setter
        assert!(get_browse_state(&browse).filters.category.is_empty());
    }

    #[test]
    fn test_clear_filters_is_idempotent() {
        let catalog = CatalogState::seeded();
        let browse = BrowseState::new();

        set_search_query(&browse, "vincent").unwrap();
        set_category(&browse, "eyeglasses").unwrap();
        update_filters(
            &browse,
            FilterOptions {
                brand: vec!["Hustlr".to_string()],
                ..FilterOptions::browse_default()
            },
        );

        let once = clear_filters(&browse);
        let twice = clear_filters(&browse);
        assert_eq!(once, twice);
        assert_eq!(once.filters, FilterOptions::browse_default());
        assert_eq!(once.query, "");

        // And the cleared grid shows everything again
        assert_eq!(browse_products(&catalog, &browse).len(), 8);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let browse = BrowseState::new();
        set_sort(&browse, SortKey::Rating);

        let cleared = clear_filters(&browse);
        assert_eq!(cleared.sort, SortKey::Rating);
    }
}
