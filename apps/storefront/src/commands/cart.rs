//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ Has      │────►│ Checkout │  (external collaborator│
//! │  │  Cart    │     │ Lines    │     │ hand-off │   outside this core)   │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►  (back to empty)  │
//! │                                                                         │
//! │  Every mutation returns the FULL updated cart so the drawer and the    │
//! │  header badge re-render from one response.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use lensloft_core::cart::{Cart, CartItem};

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Total units across all lines (the header badge number).
    pub item_count: i64,

    /// Number of distinct lines.
    pub line_count: usize,

    /// Cart total in whole rupees.
    pub total_rupees: i64,

    /// Formatted cart total, e.g. "₹4,050".
    pub total_display: String,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        let total = cart.total();
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            total_rupees: total.rupees(),
            total_display: total.to_string(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases (one line per product)
/// - Product not in cart: added as a new line
/// - Missing quantity defaults to 1; anything below 1 is clamped up to 1
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Units to add (default: 1)
/// * `selected_color` - Color picked on the detail page, if any
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
    selected_color: Option<String>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog.catalog().require(product_id)?.clone();

    Ok(cart.with_cart_mut(|c| {
        c.add(&product, quantity, selected_color);
        CartResponse::from(&*c)
    }))
}

/// Sets a line's quantity directly.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Product not in cart: no-op (the drawer may race a removal; absence
///   is normal control flow, not an error)
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart. No-op when absent.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove(product_id);
        CartResponse::from(&*c)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
