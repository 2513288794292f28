//! # Product Commands
//!
//! Commands for product lookup and the catalog-derived sidebar facets.
//!
//! ## Lookup Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lookups                                      │
//! │                                                                         │
//! │  Header search box ────► search_products("cat-eye")                    │
//! │  Product detail page ──► get_product("5")                              │
//! │  Category landing ─────► products_by_category("eyeglasses")            │
//! │  Collection rail ──────► products_by_collection("Roman Holiday")       │
//! │  Filter sidebar build ─► filter_sidebar()                              │
//! │                                                                         │
//! │  All read-only against the compiled-in catalog; only get_product can   │
//! │  fail (NOT_FOUND for a stale link).                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use lensloft_core::types::{Category, FrameShape, FrameSize, Product};
use lensloft_core::validation::validate_search_query;

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples the internal domain model from the API contract
/// - Carries display-derived fields (`price_display`, `discount_percent`)
///   so the frontend never re-implements money formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price_rupees: i64,
    pub original_price_rupees: Option<i64>,
    /// Formatted selling price, e.g. "₹1,200".
    pub price_display: String,
    /// "% OFF" badge value, when the product is marked down.
    pub discount_percent: Option<u8>,
    pub images: Vec<String>,
    pub category: Category,
    pub frame_shape: FrameShape,
    pub frame_color: String,
    pub lens_color: Option<String>,
    pub material: String,
    pub size: FrameSize,
    pub features: Vec<String>,
    pub description: String,
    pub in_stock: bool,
    pub rating: f32,
    pub reviews_count: u32,
    pub collection: Option<String>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            price_rupees: p.price_rupees,
            original_price_rupees: p.original_price_rupees,
            price_display: p.price().to_string(),
            discount_percent: p.discount_percent(),
            images: p.images.clone(),
            category: p.category,
            frame_shape: p.frame_shape,
            frame_color: p.frame_color.clone(),
            lens_color: p.lens_color.clone(),
            material: p.material.clone(),
            size: p.size,
            features: p.features.clone(),
            description: p.description.clone(),
            in_stock: p.in_stock,
            rating: p.rating,
            reviews_count: p.reviews_count,
            collection: p.collection.clone(),
        }
    }
}

/// Sidebar facets derived from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarFacets {
    /// Distinct brands, in catalog order.
    pub brands: Vec<String>,

    /// Distinct frame shapes, in catalog order.
    pub frame_shapes: Vec<FrameShape>,
}

/// Searches products by free-text query.
///
/// Matches name, brand, description and feature tags, case-insensitive.
/// An empty query returns the whole catalog.
///
/// ## Errors
/// `VALIDATION_ERROR` when the query exceeds the length cap.
pub fn search_products(
    catalog: &CatalogState,
    query: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_products command");

    let hits: Vec<ProductDto> = catalog
        .catalog()
        .search(&query)
        .into_iter()
        .map(ProductDto::from)
        .collect();

    debug!(count = hits.len(), "search_products complete");
    Ok(hits)
}

/// Gets a single product by id.
///
/// ## When To Use
/// - The product detail page
/// - The virtual try-on dialog resolving its frame overlay
///
/// ## Errors
/// `NOT_FOUND` for an unknown id (stale links render a not-found view).
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");

    let product = catalog.catalog().require(id)?;
    Ok(ProductDto::from(product))
}

/// Lists all products in a category, catalog order.
///
/// Takes the kebab-case routing token so category navigation links can be
/// passed through untouched.
///
/// ## Errors
/// `VALIDATION_ERROR` for an unknown category token.
pub fn products_by_category(
    catalog: &CatalogState,
    category_token: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    let category: Category = category_token.parse()?;
    debug!(category = %category, "products_by_category command");

    Ok(catalog
        .catalog()
        .by_category(category)
        .into_iter()
        .map(ProductDto::from)
        .collect())
}

/// Lists all products in a named collection, catalog order.
///
/// An unknown collection is an empty list, not an error - the collections
/// rail is built from free-text names.
pub fn products_by_collection(catalog: &CatalogState, collection: &str) -> Vec<ProductDto> {
    debug!(collection = %collection, "products_by_collection command");

    catalog
        .catalog()
        .by_collection(collection)
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Returns the facet values the filter sidebar renders checkboxes for.
pub fn filter_sidebar(catalog: &CatalogState) -> SidebarFacets {
    debug!("filter_sidebar command");

    SidebarFacets {
        brands: catalog.catalog().brands(),
        frame_shapes: catalog.catalog().frame_shapes(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_products() {
        let catalog = CatalogState::seeded();

        let hits = search_products(&catalog, "vincent").unwrap();
        assert_eq!(hits.len(), 2);

        let all = search_products(&catalog, "").unwrap();
        assert_eq!(all.len(), 8);

        let overlong = "q".repeat(200);
        assert!(search_products(&catalog, &overlong).is_err());
    }

    #[test]
    fn test_get_product_found_and_not_found() {
        let catalog = CatalogState::seeded();

        let product = get_product(&catalog, "1").unwrap();
        assert_eq!(product.name, "Vincent Chase Retro Rectangle");
        assert_eq!(product.price_display, "₹1,200");
        assert_eq!(product.discount_percent, Some(20)); // 1500 -> 1200

        let missing = get_product(&catalog, "999");
        assert!(missing.is_err());
    }

    #[test]
    fn test_products_by_category_token() {
        let catalog = CatalogState::seeded();

        let eyeglasses = products_by_category(&catalog, "eyeglasses").unwrap();
        let ids: Vec<&str> = eyeglasses.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5", "6"]);

        assert!(products_by_category(&catalog, "new-arrivals").is_err());
    }

    #[test]
    fn test_products_by_collection() {
        let catalog = CatalogState::seeded();

        let air_wrap = products_by_collection(&catalog, "Air Wrap");
        assert_eq!(air_wrap.len(), 1);
        assert_eq!(air_wrap[0].id, "3");

        assert!(products_by_collection(&catalog, "Nope").is_empty());
    }

    #[test]
    fn test_filter_sidebar_facets() {
        let catalog = CatalogState::seeded();
        let facets = filter_sidebar(&catalog);

        assert_eq!(facets.brands.len(), 5);
        assert_eq!(facets.frame_shapes.len(), 6);
    }
}
