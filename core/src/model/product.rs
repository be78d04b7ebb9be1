// hamper/src/model/product.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A denormalized capture of a catalog product, taken at the moment it is
/// handed to the cart. The catalog is authoritative and external; this copy
/// is NOT refreshed automatically and may drift from the live catalog (e.g.
/// a price change) until the line is removed and re-added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price_cents: i64,
  pub image: Option<String>,
  pub category: Option<String>,
  pub stock_quantity: i32,
}
