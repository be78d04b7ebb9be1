// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use hamper::ProductSnapshot;
use std::path::PathBuf;
use tracing::Level;
use uuid::Uuid;

// --- Product Fixtures ---

/// A product snapshot with the given name and price, fresh id.
pub fn product(name: &str, price_cents: i64) -> ProductSnapshot {
  ProductSnapshot {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price_cents,
    image: Some(format!("/images/{name}.jpg")),
    category: Some("groceries".to_string()),
    stock_quantity: 50,
  }
}

/// Same product identity, different price — for price-pinning checks.
pub fn repriced(original: &ProductSnapshot, price_cents: i64) -> ProductSnapshot {
  ProductSnapshot {
    price_cents,
    ..original.clone()
  }
}

/// A unique temp directory path for file-backend tests. Each test gets its
/// own directory, so no cross-test serialization is needed.
pub fn unique_temp_dir(label: &str) -> PathBuf {
  std::env::temp_dir().join(format!("hamper_test_{label}_{}", Uuid::new_v4()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
