//! # Cart State Machine
//!
//! The session-scoped shopping cart: an ordered collection of
//! (product, quantity) lines with derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Operation               Cart State Change     │
//! │  ───────────────          ─────────               ─────────────────     │
//! │                                                                         │
//! │  "Add to Cart" click ────► add() ───────────────► merge or append line │
//! │                                                                         │
//! │  Quantity stepper ───────► update_quantity() ───► line.qty = n         │
//! │                            (n <= 0 removes the line)                    │
//! │                                                                         │
//! │  Remove link ────────────► remove() ────────────► drop line (no-op     │
//! │                                                    when absent)         │
//! │                                                                         │
//! │  "Clear cart" ───────────► clear() ─────────────► no lines             │
//! │                                                                         │
//! │  Totals and counts are ALWAYS recomputed from the lines - they are      │
//! │  never stored, so they can never drift.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart.
///
/// ## Design Notes
/// - Holds a full product snapshot: the catalog is immutable for the life
///   of the session, so the snapshot can never go stale - but the cart
///   drawer renders entirely from its own lines, without catalog lookups.
/// - `selected_color` freezes the color picked on the detail page when the
///   line was first added.
/// - `quantity` is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line holds.
    pub product: Product,

    /// Units of the product, always >= 1.
    pub quantity: i64,

    /// Color chosen on the detail page, if any.
    pub selected_color: Option<String>,
}

impl CartItem {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product again merges
///   into the existing line)
/// - Every line's quantity is >= 1 (updates to 0 or below remove the line)
/// - `total()` and `item_count()` are derived, never stored
///
/// ## Lifecycle
/// Created empty at session start, mutated by UI events, gone when the
/// session ends. Nothing here touches disk.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: the quantities add up; the line keeps its
    ///   original `selected_color`
    /// - Product not in cart: a new line is appended
    /// - `quantity` is clamped to a floor of 1: the stepper UI can't go
    ///   below 1, and a zero/negative add from any other path must still
    ///   leave the cart consistent
    pub fn add(&mut self, product: &Product, quantity: i64, selected_color: Option<String>) {
        let quantity = quantity.max(1);

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
            selected_color,
        });
    }

    /// Sets a line's quantity directly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves as [`Cart::remove`]
    /// - Product not in cart: no-op (absence is normal control flow)
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line by product id. No-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Total units across all lines (what the cart badge shows).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Cart total: sum of line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks whether a product has a line in the cart.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map_or(0, |i| i.quantity)
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, FrameShape, FrameSize};

    fn test_product(id: &str, price_rupees: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Frame {}", id),
            brand: "Test Brand".to_string(),
            price_rupees,
            original_price_rupees: None,
            images: vec![format!("/images/{}.jpg", id)],
            category: Category::Eyeglasses,
            frame_shape: FrameShape::Rectangle,
            frame_color: "Black".to_string(),
            lens_color: None,
            material: "Acetate".to_string(),
            size: FrameSize::new(52, 42, 18),
            features: vec![],
            description: String::new(),
            in_stock: true,
            rating: 4.0,
            reviews_count: 10,
            collection: None,
        }
    }

    /// The invariant every mutation must preserve.
    fn assert_derived_fields(cart: &Cart) {
        let expected_count: i64 = cart.items.iter().map(|i| i.quantity).sum();
        let expected_total: i64 = cart
            .items
            .iter()
            .map(|i| i.product.price_rupees * i.quantity)
            .sum();

        assert_eq!(cart.item_count(), expected_count);
        assert_eq!(cart.total().rupees(), expected_total);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 2, None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().rupees(), 2400);
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 2, None);
        cart.add(&product, 3, None);

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.quantity_of("1"), 5);
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_add_clamps_quantity_floor() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 0, None);
        assert_eq!(cart.quantity_of("1"), 1);

        cart.add(&product, -5, None);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_merge_keeps_first_selected_color() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 1, Some("Black".to_string()));
        cart.add(&product, 1, Some("Tortoise".to_string()));

        assert_eq!(cart.items[0].selected_color.as_deref(), Some("Black"));
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 2, None);
        cart.update_quantity("1", 7);

        assert_eq!(cart.quantity_of("1"), 7);
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 2, None);
        cart.update_quantity("1", 0);

        assert!(!cart.is_in_cart("1"));
        assert_eq!(cart.quantity_of("1"), 0);
        assert!(cart.is_empty());
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 2, None);
        cart.update_quantity("1", -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 1200);

        cart.add(&product, 1, None);
        cart.remove("no-such-product");

        assert_eq!(cart.line_count(), 1);
        assert_derived_fields(&cart);
    }

    #[test]
    fn test_update_absent_is_noop() {
        let mut cart = Cart::new();
        cart.update_quantity("ghost", 4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 1200), 2, None);
        cart.add(&test_product("2", 999), 1, None);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_derived_fields_after_mixed_sequence() {
        let mut cart = Cart::new();
        let a = test_product("1", 1200);
        let b = test_product("2", 999);
        let c = test_product("3", 2500);

        cart.add(&a, 2, None);
        assert_derived_fields(&cart);

        cart.add(&b, 1, None);
        assert_derived_fields(&cart);

        cart.update_quantity("1", 4);
        assert_derived_fields(&cart);

        cart.add(&c, 1, None);
        assert_derived_fields(&cart);

        cart.remove("2");
        assert_derived_fields(&cart);

        cart.update_quantity("3", 0);
        assert_derived_fields(&cart);

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total().rupees(), 4800);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&test_product("2", 999), 1, None);
        cart.add(&test_product("1", 1200), 1, None);
        cart.add(&test_product("3", 2500), 1, None);

        let order: Vec<&str> = cart.items.iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
    }
}
