// hamper/src/model/line_item.rs

use crate::model::product::ProductSnapshot;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the cart: a single product plus its quantity and pinned
/// unit price.
///
/// `price_cents` is copied from `product.price_cents` when the line is first
/// created and is never updated by later `add` calls for the same product —
/// the price at the time of first add wins for the life of the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
  /// Identity of the line itself, assigned at creation.
  pub id: Uuid,
  /// Foreign reference into the external catalog.
  pub product_id: Uuid,
  /// Snapshot captured at first add; see the struct-level note on pinning.
  pub product: ProductSnapshot,
  /// Always >= 1 while the line is present; a quantity of zero is expressed
  /// by removing the line, never by storing zero.
  pub quantity: u32,
  /// Pinned unit price in cents.
  pub price_cents: i64,
  pub added_at: DateTime<Utc>,
}

impl LineItem {
  /// Creates a fresh line for a product not yet present in the cart.
  pub fn new(product: ProductSnapshot, quantity: u32) -> Self {
    Self {
      id: Uuid::new_v4(),
      product_id: product.id,
      price_cents: product.price_cents,
      product,
      quantity,
      added_at: Utc::now(),
    }
  }

  pub fn line_total_cents(&self) -> i64 {
    self.price_cents * i64::from(self.quantity)
  }
}
