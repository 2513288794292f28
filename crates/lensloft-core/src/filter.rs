//! # Filter/Sort Engine
//!
//! The pure function behind the products grid: narrow the catalog by the
//! sidebar's filter state and a free-text query, then order the survivors
//! by the selected sort key.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    filter_and_sort Pipeline                             │
//! │                                                                         │
//! │  full catalog                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. free-text query   (name | brand | description | feature tags)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. inclusion predicates, short-circuit on first failure:               │
//! │     category → frame shape → price range → brand → in-stock             │
//! │     (AND across fields, OR within a field's set;                        │
//! │      empty field = no constraint)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. stable sort by SortKey (ties keep catalog order)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ordered Vec<Product> - recomputed on every input change               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function: no side effects, deterministic, and the output is always
//! a permutation of the filtered input.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Category, FrameShape, Product};

// =============================================================================
// Price Range
// =============================================================================

/// An inclusive price window in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_rupees: i64,
    pub max_rupees: i64,
}

impl PriceRange {
    #[inline]
    pub const fn new(min_rupees: i64, max_rupees: i64) -> Self {
        PriceRange {
            min_rupees,
            max_rupees,
        }
    }

    /// True when `price` falls inside the window (inclusive both ends).
    #[inline]
    pub const fn contains(&self, price_rupees: i64) -> bool {
        price_rupees >= self.min_rupees && price_rupees <= self.max_rupees
    }
}

// =============================================================================
// Filter Options
// =============================================================================

/// The sidebar's filter state.
///
/// Each set-valued field, when non-empty, is an inclusion filter: a product
/// passes when it matches ANY entry (OR within the field) and passes EVERY
/// non-empty field (AND across fields). Empty fields impose no constraint.
///
/// `color` and `material` are part of the sidebar contract but are not
/// applied by the engine; see the predicate chain in [`filter_and_sort`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub category: Vec<Category>,
    pub frame_shape: Vec<FrameShape>,
    pub price_range: Option<PriceRange>,
    pub brand: Vec<String>,
    pub color: Vec<String>,
    pub material: Vec<String>,
    pub in_stock_only: bool,
}

impl FilterOptions {
    /// The sidebar's initial state: the full demo price band, in-stock
    /// frames only, no facet selected.
    ///
    /// This is also what "Clear filters" resets to - calling it twice is
    /// the same as calling it once.
    pub fn browse_default() -> Self {
        FilterOptions {
            price_range: Some(PriceRange::new(0, 5000)),
            in_stock_only: true,
            ..FilterOptions::default()
        }
    }

    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_empty()
            && self.frame_shape.is_empty()
            && self.price_range.is_none()
            && self.brand.is_empty()
            && !self.in_stock_only
    }

    /// The inclusion predicate chain, short-circuiting on the first
    /// failing field.
    fn accepts(&self, product: &Product) -> bool {
        if !self.category.is_empty() && !self.category.contains(&product.category) {
            return false;
        }

        if !self.frame_shape.is_empty() && !self.frame_shape.contains(&product.frame_shape) {
            return false;
        }

        if let Some(range) = &self.price_range {
            if !range.contains(product.price_rupees) {
                return false;
            }
        }

        if !self.brand.is_empty() && !self.brand.contains(&product.brand) {
            return false;
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        true
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// The grid's sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most-reviewed first (the grid's default).
    #[default]
    Popular,

    /// Cheapest first.
    PriceLow,

    /// Most expensive first.
    PriceHigh,

    /// Best-rated first.
    Rating,

    /// Most recently added first.
    Newest,
}

impl SortKey {
    pub const fn as_token(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "popular" => Ok(SortKey::Popular),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            "newest" => Ok(SortKey::Newest),
            other => Err(ValidationError::InvalidFormat {
                field: "sortBy".to_string(),
                reason: format!("unknown sort key '{}'", other),
            }),
        }
    }
}

// =============================================================================
// The Engine
// =============================================================================

/// Narrows `products` by `query` + `filters`, then stable-sorts by `sort`.
///
/// ## Guarantees
/// - Pure: no side effects, same inputs give the same output
/// - The output is a permutation of the filtered input
/// - Ties within a sort key keep catalog order (`sort_by` is stable)
///
/// ## Example
/// ```rust
/// use lensloft_core::catalog::Catalog;
/// use lensloft_core::filter::{filter_and_sort, FilterOptions, SortKey};
/// use lensloft_core::types::Category;
///
/// let catalog = Catalog::seeded();
/// let filters = FilterOptions {
///     category: vec![Category::Eyeglasses],
///     ..FilterOptions::default()
/// };
///
/// let hits = filter_and_sort(catalog.all(), "", &filters, SortKey::PriceLow);
/// let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
/// assert_eq!(ids, vec!["1", "5", "2", "6"]);
/// ```
pub fn filter_and_sort(
    products: &[Product],
    query: &str,
    filters: &FilterOptions,
    sort: SortKey,
) -> Vec<Product> {
    let query_lower = query.trim().to_lowercase();

    let mut hits: Vec<Product> = products
        .iter()
        .filter(|product| query_lower.is_empty() || product.matches_search(&query_lower))
        .filter(|product| filters.accepts(product))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which is what keeps equal-key products in
    // catalog order.
    match sort {
        SortKey::PriceLow => hits.sort_by(|a, b| a.price_rupees.cmp(&b.price_rupees)),
        SortKey::PriceHigh => hits.sort_by(|a, b| b.price_rupees.cmp(&a.price_rupees)),
        SortKey::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        // "Newest" compares ids lexicographically, newest (highest) first.
        // With the seeded ids this matches creation order; it is NOT a real
        // timestamp ordering and ids that don't sort by age would misorder.
        // TODO: replace with a created_at field if the catalog ever grows one.
        SortKey::Newest => hits.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::Popular => hits.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count)),
    }

    hits
}

// =============================================================================
// Unit Tests
// =============================================================================
