// hamper/examples/basic_cart.rs

use hamper::{Cart, ProductSnapshot};
use tracing::info;
use uuid::Uuid;

fn snapshot(name: &str, price_cents: i64) -> ProductSnapshot {
  ProductSnapshot {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price_cents,
    image: None,
    category: Some("groceries".to_string()),
    stock_quantity: 20,
  }
}

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Build a cart over an in-memory backend.
  let cart = Cart::in_memory();

  // 2. Add products. A second add of the same product accumulates quantity
  //    and keeps the originally pinned price.
  let apples = snapshot("apples", 79);
  cart.add(&apples, 1);
  cart.add(&apples, 2);
  cart.add(&snapshot("rye bread", 349), 1);

  info!("lines: {}, units: {}, total: {} cents", cart.items().len(), cart.count(), cart.total_cents());

  // 3. Absolute quantity update, then removal via quantity zero.
  let apple_line = cart.items().into_iter().find(|i| i.product_id == apples.id).unwrap();
  cart.update_quantity(apple_line.id, 5);
  info!("after update: {} units", cart.count());

  cart.update_quantity(apple_line.id, 0);
  info!("after zero-quantity update: {} lines", cart.items().len());

  // 4. Clear everything.
  cart.clear();
  info!("after clear: empty = {}", cart.is_empty());
}
