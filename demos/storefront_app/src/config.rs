// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Directory the file-backed cart store lives in. The cart survives
  /// re-runs of the app, playing the part of a page reload.
  pub cart_store_dir: PathBuf,

  /// Whether to run with persistence at all. `false` uses an in-memory
  /// backend (every run starts with an empty cart).
  pub persist_cart: bool,

  pub delivery_address: String,
  pub payment_method: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let cart_store_dir = env::var("CART_STORE_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| std::env::temp_dir().join("storefront_app_cart"));

    let persist_cart = env::var("PERSIST_CART")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid PERSIST_CART value: {}", e)))?;

    let delivery_address = env::var("DELIVERY_ADDRESS").unwrap_or_else(|_| "1 Demo Lane".to_string());
    let payment_method = env::var("PAYMENT_METHOD").unwrap_or_else(|_| "cash-on-delivery".to_string());

    Ok(Self {
      cart_store_dir,
      persist_cart,
      delivery_address,
      payment_method,
    })
  }
}
