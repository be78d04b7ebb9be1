// hamper/examples/multi_view_sync.rs

//! Several independent consumers (a nav badge, a cart page, a product tile)
//! each hold their own `CartView`. A mutation through any one of them is
//! reflected in all of the others by the time the call returns — none of
//! them reference each other; they only share the store-and-bus pair.

use hamper::{Cart, ProductSnapshot};
use tracing::info;
use uuid::Uuid;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Multi-View Sync Example ---");

  let cart = Cart::in_memory();

  // Three independent consumers, as three separate views.
  let nav_badge = cart.view();
  let cart_page = cart.view();
  let product_tile = cart.view();

  let oat_milk = ProductSnapshot {
    id: Uuid::new_v4(),
    name: "oat milk".to_string(),
    description: Some("1L carton".to_string()),
    price_cents: 289,
    image: Some("/images/oat-milk.jpg".to_string()),
    category: Some("dairy-alternatives".to_string()),
    stock_quantity: 12,
  };

  // The product tile adds to the cart...
  product_tile.add(&oat_milk, 2);

  // ...and every other consumer already sees it.
  info!("nav badge count: {}", nav_badge.item_count());
  info!("cart page total: {} cents", cart_page.total_cents());
  info!("tile shows in-cart: {}", product_tile.is_in_cart(oat_milk.id));

  // The cart page changes the quantity; the tile's per-product accessor follows.
  let line_id = cart_page.items()[0].id;
  cart_page.update_quantity(line_id, 6);
  info!("tile quantity for product: {}", product_tile.item_quantity(oat_milk.id));

  // Dropping a view deregisters it; the rest keep syncing.
  drop(product_tile);
  cart_page.clear();
  info!("nav badge after clear: {}", nav_badge.item_count());
}
