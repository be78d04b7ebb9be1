// hamper/examples/checkout_flow.rs

//! The handoff at the end of the cart's life: build an `OrderDraft` from the
//! current snapshot, pretend to submit it, and clear the cart on success.
//! Uses a file backend so the cart also survives re-running the example
//! up until the point it checks out.

use hamper::{Cart, FileBackend, ProductSnapshot};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  let store_dir = std::env::temp_dir().join("hamper_checkout_example");
  let cart = Cart::new(Arc::new(FileBackend::new(&store_dir)));

  if cart.is_empty() {
    info!("cart empty; filling it");
    for (name, price_cents, qty) in [("bananas", 119, 6), ("espresso beans", 1249, 1), ("butter", 340, 2)] {
      cart.add(
        &ProductSnapshot {
          id: Uuid::new_v4(),
          name: name.to_string(),
          description: None,
          price_cents,
          image: None,
          category: Some("groceries".to_string()),
          stock_quantity: 30,
        },
        qty,
      );
    }
  } else {
    info!("cart restored from disk with {} units", cart.count());
  }

  // Build the payload a checkout page would submit to the order API.
  let draft = cart.checkout_draft("221B Baker Street", "card");
  info!(
    "order draft: {} lines, {} cents total",
    draft.items.len(),
    draft.total_amount_cents
  );
  println!("{}", serde_json::to_string_pretty(&draft).expect("draft serializes"));

  // "Submission" succeeded: the cart's life ends here.
  cart.clear();
  info!("cart cleared after successful checkout");
}
