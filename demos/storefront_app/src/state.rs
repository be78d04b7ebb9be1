// demos/storefront_app/src/state.rs

use crate::config::AppConfig;
use hamper::Cart;
use std::sync::Arc;

/// Shared application state: one cart handle for the whole "page". Every
/// consumer clones the handle or takes a view from it; no consumer owns the
/// cart.
#[derive(Clone)]
pub struct AppState {
  pub cart: Cart,
  pub config: Arc<AppConfig>, // Share loaded config
}
