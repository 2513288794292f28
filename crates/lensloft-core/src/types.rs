//! # Domain Types
//!
//! Core domain types used throughout the LensLoft storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │   Preferences   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  frame_shape    │       │
//! │  │  price_rupees   │   │  email (unique) │   │  favorite_colors│       │
//! │  │  category       │   │  name           │   └─────────────────┘       │
//! │  │  frame_shape    │   │  avatar         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   FrameShape    │   │   FrameSize     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Eyeglasses     │   │  Rectangle      │   │  width_mm       │       │
//! │  │  Sunglasses     │   │  Round          │   │  height_mm      │       │
//! │  │  ComputerGlasses│   │  CatEye ...     │   │  bridge_mm      │       │
//! │  │  ...            │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Everything here crosses the IPC boundary to a TypeScript frontend, so
//! structs serialize camelCase and closed enums serialize as the kebab-case
//! tokens the routing layer already uses (`?category=computer-glasses`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category - the storefront's top-level navigation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Eyeglasses,
    Sunglasses,
    ComputerGlasses,
    KidsGlasses,
    ReadingGlasses,
}

impl Category {
    /// The kebab-case token used in routing (`/products?category=...`).
    pub const fn as_token(&self) -> &'static str {
        match self {
            Category::Eyeglasses => "eyeglasses",
            Category::Sunglasses => "sunglasses",
            Category::ComputerGlasses => "computer-glasses",
            Category::KidsGlasses => "kids-glasses",
            Category::ReadingGlasses => "reading-glasses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses the routing token. Unknown tokens are a validation failure,
    /// not a panic - navigation links can carry stale categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "eyeglasses" => Ok(Category::Eyeglasses),
            "sunglasses" => Ok(Category::Sunglasses),
            "computer-glasses" => Ok(Category::ComputerGlasses),
            "kids-glasses" => Ok(Category::KidsGlasses),
            "reading-glasses" => Ok(Category::ReadingGlasses),
            other => Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Frame Shape
// =============================================================================

/// The shape of a frame - the storefront's second browse axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FrameShape {
    Rectangle,
    Round,
    Wayfarer,
    CatEye,
    Hexagonal,
    Aviator,
}

impl FrameShape {
    pub const fn as_token(&self) -> &'static str {
        match self {
            FrameShape::Rectangle => "rectangle",
            FrameShape::Round => "round",
            FrameShape::Wayfarer => "wayfarer",
            FrameShape::CatEye => "cat-eye",
            FrameShape::Hexagonal => "hexagonal",
            FrameShape::Aviator => "aviator",
        }
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for FrameShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rectangle" => Ok(FrameShape::Rectangle),
            "round" => Ok(FrameShape::Round),
            "wayfarer" => Ok(FrameShape::Wayfarer),
            "cat-eye" => Ok(FrameShape::CatEye),
            "hexagonal" => Ok(FrameShape::Hexagonal),
            "aviator" => Ok(FrameShape::Aviator),
            other => Err(ValidationError::InvalidFormat {
                field: "frameShape".to_string(),
                reason: format!("unknown frame shape '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Frame Size
// =============================================================================

/// Frame dimensions in millimeters, as printed on the temple arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FrameSize {
    /// Lens width
    pub width_mm: u16,

    /// Lens height
    pub height_mm: u16,

    /// Bridge width
    pub bridge_mm: u16,
}

impl FrameSize {
    #[inline]
    pub const fn new(width_mm: u16, height_mm: u16, bridge_mm: u16) -> Self {
        FrameSize {
            width_mm,
            height_mm,
            bridge_mm,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A frame available in the storefront.
///
/// ## Lifecycle
/// Products are compiled in at process start from the catalog seed and are
/// never mutated or deleted during a session. Everything that looks like
/// state (cart membership, filter hits) lives elsewhere and references
/// products by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on cards and the detail page.
    pub name: String,

    /// Brand line (also a filter facet).
    pub brand: String,

    /// Selling price in whole rupees.
    pub price_rupees: i64,

    /// Pre-markdown price, when the product is on sale.
    /// Must be >= `price_rupees` when present; only used for the
    /// strikethrough + "% OFF" badge.
    pub original_price_rupees: Option<i64>,

    /// Image references, never empty (first entry is the card image).
    pub images: Vec<String>,

    /// Top-level category.
    pub category: Category,

    /// Frame shape.
    pub frame_shape: FrameShape,

    /// Frame color (free text, e.g. "Tortoise").
    pub frame_color: String,

    /// Lens tint, mostly for sunglasses.
    pub lens_color: Option<String>,

    /// Frame material (free text, e.g. "Premium Acetate").
    pub material: String,

    /// Physical dimensions.
    pub size: FrameSize,

    /// Feature tags ("Blue Light Protection", "Polarized", ...).
    /// Ordered; also searched by the free-text query.
    pub features: Vec<String>,

    /// Marketing description.
    pub description: String,

    /// Whether the product can currently be purchased.
    pub in_stock: bool,

    /// Average review rating, 0.0 - 5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews_count: u32,

    /// Named collection the product belongs to, if any.
    pub collection: Option<String>,
}

impl Product {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupees(self.price_rupees)
    }

    /// Returns the pre-markdown price, when present.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_rupees.map(Money::from_rupees)
    }

    /// Returns the "% OFF" badge value, when the product is marked down.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price()
            .and_then(|original| crate::money::discount_percent(original, self.price()))
    }

    /// Checks whether this product matches a free-text search query.
    ///
    /// Matches when the query is a substring of the name, brand,
    /// description, or any feature tag. Case-insensitive, OR across fields.
    ///
    /// ## Arguments
    /// * `query_lower` - the query, already lowercased and trimmed
    pub fn matches_search(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.brand.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .features
                .iter()
                .any(|feature| feature.to_lowercase().contains(query_lower))
    }
}

// =============================================================================
// User & Preferences
// =============================================================================

/// Frame preferences attached to a user profile.
///
/// Seeds the try-on and recommendation surfaces; entirely optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Preferred frame shape, if the user picked one.
    pub frame_shape: Option<FrameShape>,

    /// Favorite frame colors (free text).
    pub favorite_colors: Vec<String>,
}

impl Preferences {
    /// The defaults assigned to users minted by the demo directory.
    pub fn starter() -> Self {
        Preferences {
            frame_shape: Some(FrameShape::Rectangle),
            favorite_colors: vec!["black".to_string()],
        }
    }
}

/// A storefront account.
///
/// ## Identity
/// - `id`: UUID v4, immutable, minted when the account is created
/// - `email`: the unique business key the directory looks accounts up by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Email address - unique within the directory.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Avatar image reference.
    pub avatar: Option<String>,

    /// Frame preferences, if any.
    pub preferences: Option<Preferences>,

    /// When the account was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A partial profile update, applied field-by-field to the signed-in user.
///
/// `None` fields are left untouched; this is the typed equivalent of the
/// frontend's partial-object profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub preferences: Option<Preferences>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product {
            id: "42".to_string(),
            name: "Test Aviator".to_string(),
            brand: "Vincent Chase".to_string(),
            price_rupees: 1200,
            original_price_rupees: Some(1500),
            images: vec!["img-1".to_string()],
            category: Category::Sunglasses,
            frame_shape: FrameShape::Aviator,
            frame_color: "Gold".to_string(),
            lens_color: Some("Green".to_string()),
            material: "Metal".to_string(),
            size: FrameSize::new(58, 52, 16),
            features: vec!["UV Protection".to_string(), "Polarized".to_string()],
            description: "Classic teardrop aviator.".to_string(),
            in_stock: true,
            rating: 4.6,
            reviews_count: 210,
            collection: None,
        }
    }

    #[test]
    fn test_category_token_round_trip() {
        for category in [
            Category::Eyeglasses,
            Category::Sunglasses,
            Category::ComputerGlasses,
            Category::KidsGlasses,
            Category::ReadingGlasses,
        ] {
            assert_eq!(category.as_token().parse::<Category>().unwrap(), category);
        }

        assert!("new-arrivals".parse::<Category>().is_err());
    }

    #[test]
    fn test_frame_shape_token_round_trip() {
        assert_eq!("cat-eye".parse::<FrameShape>().unwrap(), FrameShape::CatEye);
        assert!("oval".parse::<FrameShape>().is_err());
    }

    #[test]
    fn test_matches_search_across_fields() {
        let product = test_product();

        // name
        assert!(product.matches_search("aviator"));
        // brand
        assert!(product.matches_search("vincent"));
        // description
        assert!(product.matches_search("teardrop"));
        // feature tag
        assert!(product.matches_search("polarized"));
        // no hit
        assert!(!product.matches_search("wayfarer"));
    }

    #[test]
    fn test_discount_percent_accessor() {
        let mut product = test_product();
        assert_eq!(product.discount_percent(), Some(20));

        product.original_price_rupees = None;
        assert_eq!(product.discount_percent(), None);
    }
}
