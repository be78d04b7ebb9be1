// demos/storefront_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod state;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::models::seed_catalog;
use crate::state::AppState;

use hamper::{Cart, CartView, FileBackend, MemoryBackend, OrderDraft, StorageBackend};
use std::sync::Arc;
use tracing::Level;

fn main() -> AppResult<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .init();

  tracing::info!("Starting storefront demo...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e);
    }
  };

  // Pick the storage backend: file-backed (cart survives re-runs) or memory.
  let backend: Arc<dyn StorageBackend> = if app_config.persist_cart {
    tracing::info!(dir = %app_config.cart_store_dir.display(), "Using file-backed cart store.");
    Arc::new(FileBackend::new(&app_config.cart_store_dir))
  } else {
    tracing::info!("Using in-memory cart store.");
    Arc::new(MemoryBackend::new())
  };

  let app_state = AppState {
    cart: Cart::new(backend),
    config: app_config,
  };

  run_storefront(&app_state)
}

/// Walks the storefront consumers through a shopping session: catalog adds,
/// cross-view sync, a quantity edit on the cart page, checkout handoff, and
/// the post-checkout clear.
fn run_storefront(state: &AppState) -> AppResult<()> {
  let catalog = seed_catalog();

  // Two independent "mounted components": the nav badge and the cart page.
  // Neither knows about the other; both follow the store through the bus.
  let nav_badge = state.cart.view();
  let cart_page = state.cart.view();

  if !state.cart.is_empty() {
    tracing::info!(units = state.cart.count(), "Cart restored from a previous run.");
  }

  // --- Catalog page: add a few products ---
  for (name, qty) in [("bananas", 6), ("oat milk", 2), ("espresso beans", 1)] {
    let entry = catalog
      .iter()
      .find(|e| e.snapshot.name == name)
      .ok_or_else(|| AppError::Config(format!("Seed catalog is missing '{name}'")))?;
    state.cart.add(&entry.snapshot, qty);
    tracing::info!(product = name, qty = qty, badge = nav_badge.item_count(), "Added to cart; nav badge updated.");
  }

  render_nav_badge(&nav_badge);
  render_cart_page(&cart_page);

  // --- Cart page: bump a quantity, drop a line ---
  if let Some(line) = cart_page.items().first() {
    cart_page.update_quantity(line.id, line.quantity + 1);
    tracing::info!(product = %line.product.name, "Quantity bumped from the cart page.");
  }
  render_nav_badge(&nav_badge); // the badge saw the change without being told

  // --- Checkout page: hand off the payload, then clear on success ---
  let draft = state
    .cart
    .checkout_draft(&state.config.delivery_address, &state.config.payment_method);
  submit_order(&draft)?;
  state.cart.clear();

  tracing::info!(
    badge = nav_badge.item_count(),
    cart_page_empty = cart_page.is_empty(),
    "Checkout complete; every view is empty again."
  );
  Ok(())
}

fn render_nav_badge(view: &CartView) {
  tracing::info!(count = view.item_count(), "[nav badge]");
}

fn render_cart_page(view: &CartView) {
  for item in view.items() {
    tracing::info!(
      product = %item.product.name,
      qty = item.quantity,
      line_total_cents = item.line_total_cents(),
      "[cart page] line"
    );
  }
  tracing::info!(total_cents = view.total_cents(), "[cart page] total");
}

/// Stand-in for the POST to the orders API. The cart core never does this
/// itself; it only produced the payload.
fn submit_order(draft: &OrderDraft) -> AppResult<()> {
  if draft.items.is_empty() {
    return Err(AppError::OrderSubmission("cannot submit an empty order".to_string()));
  }
  let body = serde_json::to_string_pretty(draft).map_err(|e| AppError::OrderSubmission(e.to_string()))?;
  tracing::info!(total_cents = draft.total_amount_cents, "Submitting order payload:\n{body}");
  Ok(())
}
