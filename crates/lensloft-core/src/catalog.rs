//! # Catalog Store
//!
//! The compiled-in product catalog and its read-only lookups.
//!
//! ## Why Compiled-In?
//! The storefront ships with a fixed demo catalog; there is no product
//! database or remote feed. Swapping the seed for a live source is outside
//! this crate's contract - anything that can hand over a sequence of
//! conforming [`Product`] records can replace [`Catalog::seeded`].
//!
//! ## Read Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lookups                                    │
//! │                                                                         │
//! │  get_by_id("3")            ──► Option<&Product>                        │
//! │  by_category(Sunglasses)   ──► Vec<&Product>   (stable source order)   │
//! │  by_collection("Prism")    ──► Vec<&Product>   (stable source order)   │
//! │  search("blue light")      ──► Vec<&Product>   (name | brand |         │
//! │                                                 description | feature) │
//! │                                                                         │
//! │  No side effects. Deterministic. Never mutated after construction.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreError;
use crate::types::{Category, FrameShape, FrameSize, Product};

/// The static set of purchasable products.
///
/// Created once at process start and shared read-only from then on.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an arbitrary product list.
    ///
    /// Source order is preserved and is the tiebreak order every lookup
    /// and the filter/sort engine fall back to.
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Creates the storefront's demo catalog.
    pub fn seeded() -> Self {
        Catalog {
            products: seed_products(),
        }
    }

    /// All products, in source order.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by id.
    ///
    /// Absence is normal control flow, not an error - stale links and
    /// removed demo ids simply render a not-found view.
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks a product up by id, erroring when absent.
    ///
    /// For call sites that go on to USE the product (adding to the cart,
    /// rendering a detail page) and want the not-found case as an error
    /// value rather than an `Option` branch.
    pub fn require(&self, id: &str) -> Result<&Product, CoreError> {
        self.get_by_id(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// All products in a category, in source order.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// All products in a named collection, in source order.
    pub fn by_collection(&self, collection: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.collection.as_deref() == Some(collection))
            .collect()
    }

    /// Free-text search over name, brand, description and feature tags.
    ///
    /// Case-insensitive substring match, OR across fields. An empty query
    /// matches everything (the grid treats "no query" as "no constraint").
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query_lower = query.trim().to_lowercase();

        if query_lower.is_empty() {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|product| product.matches_search(&query_lower))
            .collect()
    }

    /// Distinct brands, in first-seen source order.
    ///
    /// Feeds the filter sidebar's brand checkboxes.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands
    }

    /// Distinct frame shapes, in first-seen source order.
    pub fn frame_shapes(&self) -> Vec<FrameShape> {
        let mut shapes: Vec<FrameShape> = Vec::new();
        for product in &self.products {
            if !shapes.contains(&product.frame_shape) {
                shapes.push(product.frame_shape);
            }
        }
        shapes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seeded()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// The demo catalog: eight hand-authored frames across every category.
///
/// Ids are assigned in creation order ("1" oldest .. "8" newest), which is
/// what the grid's "newest" sort leans on.
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Vincent Chase Retro Rectangle".to_string(),
            brand: "Vincent Chase".to_string(),
            price_rupees: 1200,
            original_price_rupees: Some(1500),
            images: vec![
                "/images/products/retro-rectangle-front.jpg".to_string(),
                "/images/products/retro-rectangle-angle.jpg".to_string(),
            ],
            category: Category::Eyeglasses,
            frame_shape: FrameShape::Rectangle,
            frame_color: "Black".to_string(),
            lens_color: None,
            material: "Acetate".to_string(),
            size: FrameSize::new(54, 42, 18),
            features: vec![
                "Blue Light Protection".to_string(),
                "Anti-Glare".to_string(),
                "Lightweight".to_string(),
            ],
            description: "Classic rectangle frame with modern aesthetics. Perfect for \
                          professional and casual wear."
                .to_string(),
            in_stock: true,
            rating: 4.5,
            reviews_count: 324,
            collection: Some("Vincent Chase".to_string()),
        },
        Product {
            id: "2".to_string(),
            name: "John Jacobs Round Vintage".to_string(),
            brand: "John Jacobs".to_string(),
            price_rupees: 1800,
            original_price_rupees: Some(2200),
            images: vec![
                "/images/products/round-vintage-front.jpg".to_string(),
                "/images/products/round-vintage-angle.jpg".to_string(),
            ],
            category: Category::Eyeglasses,
            frame_shape: FrameShape::Round,
            frame_color: "Tortoise".to_string(),
            lens_color: None,
            material: "Metal".to_string(),
            size: FrameSize::new(50, 48, 20),
            features: vec![
                "Vintage Style".to_string(),
                "Premium Metal".to_string(),
                "Adjustable Nose Pads".to_string(),
            ],
            description: "Timeless round frame with vintage appeal. Handcrafted with \
                          premium materials."
                .to_string(),
            in_stock: true,
            rating: 4.7,
            reviews_count: 198,
            collection: Some("John Jacobs".to_string()),
        },
        Product {
            id: "3".to_string(),
            name: "LensLoft Air Wrap Sports".to_string(),
            brand: "LensLoft".to_string(),
            price_rupees: 2500,
            original_price_rupees: None,
            images: vec![
                "/images/products/air-wrap-front.jpg".to_string(),
                "/images/products/air-wrap-angle.jpg".to_string(),
            ],
            category: Category::Sunglasses,
            frame_shape: FrameShape::Aviator,
            frame_color: "Silver".to_string(),
            lens_color: Some("Mirror Blue".to_string()),
            material: "Titanium".to_string(),
            size: FrameSize::new(58, 52, 16),
            features: vec![
                "UV Protection".to_string(),
                "Polarized".to_string(),
                "Unbreakable".to_string(),
                "Snug Fit".to_string(),
            ],
            description: "High-performance sports sunglasses with advanced wrap \
                          technology for active lifestyles."
                .to_string(),
            in_stock: true,
            rating: 4.8,
            reviews_count: 456,
            collection: Some("Air Wrap".to_string()),
        },
        Product {
            id: "4".to_string(),
            name: "Hustlr Blue Light Blockers".to_string(),
            brand: "Hustlr".to_string(),
            price_rupees: 999,
            original_price_rupees: Some(1299),
            images: vec![
                "/images/products/blue-light-front.png".to_string(),
                "/images/products/blue-light-angle.png".to_string(),
            ],
            category: Category::ComputerGlasses,
            frame_shape: FrameShape::Wayfarer,
            frame_color: "Clear Blue".to_string(),
            lens_color: None,
            material: "TR90".to_string(),
            size: FrameSize::new(52, 44, 19),
            features: vec![
                "Blue Light Filter".to_string(),
                "Anti-Fatigue".to_string(),
                "Lightweight".to_string(),
                "Flexible".to_string(),
            ],
            description: "Essential computer glasses for digital professionals. Reduces \
                          eye strain and improves focus."
                .to_string(),
            in_stock: true,
            rating: 4.6,
            reviews_count: 891,
            collection: Some("Hustlr".to_string()),
        },
        Product {
            id: "5".to_string(),
            name: "Roman Holiday Cat-Eye".to_string(),
            brand: "Vincent Chase".to_string(),
            price_rupees: 1650,
            original_price_rupees: Some(1950),
            images: vec![
                "/images/products/roman-holiday-front.jpg".to_string(),
                "/images/products/roman-holiday-angle.jpg".to_string(),
            ],
            category: Category::Eyeglasses,
            frame_shape: FrameShape::CatEye,
            frame_color: "Rose Gold".to_string(),
            lens_color: None,
            material: "Metal Acetate Combo".to_string(),
            size: FrameSize::new(53, 46, 17),
            features: vec![
                "Premium Design".to_string(),
                "Lightweight".to_string(),
                "Comfortable Fit".to_string(),
                "Stylish".to_string(),
            ],
            description: "Elegant cat-eye frame inspired by Roman holiday fashion. \
                          Perfect for making a statement."
                .to_string(),
            in_stock: true,
            rating: 4.4,
            reviews_count: 267,
            collection: Some("Roman Holiday".to_string()),
        },
        Product {
            id: "6".to_string(),
            name: "Surrealist Hexagonal".to_string(),
            brand: "LensLoft".to_string(),
            price_rupees: 2100,
            original_price_rupees: None,
            images: vec![
                "/images/products/surrealist-front.jpg".to_string(),
                "/images/products/surrealist-angle.jpg".to_string(),
            ],
            category: Category::Eyeglasses,
            frame_shape: FrameShape::Hexagonal,
            frame_color: "Gradient Purple".to_string(),
            lens_color: None,
            material: "Premium Acetate".to_string(),
            size: FrameSize::new(55, 47, 18),
            features: vec![
                "Unique Shape".to_string(),
                "Gradient Colors".to_string(),
                "Premium Material".to_string(),
                "Artist Inspired".to_string(),
            ],
            description: "Enter a virtual dream with these surrealist-inspired hexagonal \
                          frames."
                .to_string(),
            in_stock: true,
            rating: 4.9,
            reviews_count: 123,
            collection: Some("Surrealist".to_string()),
        },
        Product {
            id: "7".to_string(),
            name: "Kids Explorer Frames".to_string(),
            brand: "LensLoft Kids".to_string(),
            price_rupees: 800,
            original_price_rupees: Some(1000),
            images: vec![
                "/images/products/kids-explorer-front.jpg".to_string(),
                "/images/products/kids-explorer-angle.png".to_string(),
            ],
            category: Category::KidsGlasses,
            frame_shape: FrameShape::Round,
            frame_color: "Blue".to_string(),
            lens_color: None,
            material: "Flexible TR90".to_string(),
            size: FrameSize::new(46, 40, 16),
            features: vec![
                "Kid Safe".to_string(),
                "Flexible".to_string(),
                "Durable".to_string(),
                "Fun Colors".to_string(),
            ],
            description: "Safe and durable glasses designed specifically for children \
                          with active lifestyles."
                .to_string(),
            in_stock: true,
            rating: 4.7,
            reviews_count: 445,
            collection: Some("Kids Collection".to_string()),
        },
        Product {
            id: "8".to_string(),
            name: "Prism Light Reader".to_string(),
            brand: "LensLoft".to_string(),
            price_rupees: 699,
            original_price_rupees: None,
            images: vec![
                "/images/products/prism-reader-front.jpg".to_string(),
                "/images/products/prism-reader-angle.jpg".to_string(),
            ],
            category: Category::ReadingGlasses,
            frame_shape: FrameShape::Rectangle,
            frame_color: "Crystal Clear".to_string(),
            lens_color: None,
            material: "Lightweight Plastic".to_string(),
            size: FrameSize::new(52, 41, 19),
            features: vec![
                "Reading Optimized".to_string(),
                "Sharp Vision".to_string(),
                "Edgy Design".to_string(),
                "Light Weight".to_string(),
            ],
            description: "Sharp, edgy, and light reading glasses with prism technology \
                          for enhanced clarity."
                .to_string(),
            in_stock: true,
            rating: 4.5,
            reviews_count: 678,
            collection: Some("Prism".to_string()),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
