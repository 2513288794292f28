//! # Storefront Dev Harness
//!
//! Headless stand-in for the webview shell: builds a [`Storefront`] and
//! walks a representative browse → filter → cart → login flow, logging
//! each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p lensloft-storefront --bin storefront
//!
//! # Faster auth, custom session file
//! LENSLOFT_AUTH_LATENCY_MS=0 \
//! LENSLOFT_SESSION_PATH=/tmp/lensloft-session.json \
//! cargo run -p lensloft-storefront --bin storefront
//! ```

use tracing::info;

use lensloft_core::filter::SortKey;
use lensloft_storefront::commands::{auth, browse, cart, product};
use lensloft_storefront::config::AppConfig;
use lensloft_storefront::{init_tracing, Storefront};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();
    info!(store = %config.store_name, "Starting storefront dev harness");

    let app = Storefront::new(config);

    // The products page, as the grid would drive it
    let facets = product::filter_sidebar(&app.catalog);
    info!(brands = facets.brands.len(), shapes = facets.frame_shapes.len(), "Sidebar facets");

    browse::set_category(&app.browse, "eyeglasses")?;
    browse::set_sort(&app.browse, SortKey::PriceLow);
    let grid = browse::browse_products(&app.catalog, &app.browse);
    for hit in &grid {
        info!(id = %hit.id, name = %hit.name, price = %hit.price_display, "Grid row");
    }

    // Add the two cheapest eyeglasses to the cart, then bump one
    if let [first, second, ..] = grid.as_slice() {
        cart::add_to_cart(&app.catalog, &app.cart, &first.id, Some(1), None)?;
        cart::add_to_cart(&app.catalog, &app.cart, &second.id, Some(1), None)?;
        let response = cart::update_cart_item(&app.cart, &first.id, 2);
        info!(
            items = response.totals.item_count,
            total = %response.totals.total_display,
            "Cart after updates"
        );
    }

    // Sign in as the demo account (simulated latency applies)
    let signed_in = auth::login(&app.session, &app.config, "demo@lensloft.dev", "demo").await?;
    info!(user = %signed_in.user.name, "Signed in");

    let state = auth::logout(&app.session);
    info!(?state, "Signed out");

    Ok(())
}
