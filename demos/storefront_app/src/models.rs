// demos/storefront_app/src/models.rs

//! The demo's stand-in for the external product catalog. In the real
//! storefront this data arrives over the products API; the cart core only
//! ever sees the snapshots page code hands to it.

use hamper::ProductSnapshot;
use uuid::Uuid;

pub struct CatalogEntry {
  pub snapshot: ProductSnapshot,
}

/// A fixed seed catalog. Product ids are derived from the name so they stay
/// stable across runs — a re-run must recognize lines persisted by the
/// previous run as the same products.
pub fn seed_catalog() -> Vec<CatalogEntry> {
  [
    ("bananas", "1kg bunch", 119, "fruit", 40),
    ("oat milk", "1L carton", 289, "dairy-alternatives", 18),
    ("sourdough loaf", "800g", 449, "bakery", 7),
    ("free-range eggs", "box of 12", 389, "dairy", 25),
    ("espresso beans", "500g dark roast", 1249, "pantry", 11),
  ]
  .into_iter()
  .map(|(name, description, price_cents, category, stock_quantity)| CatalogEntry {
    snapshot: ProductSnapshot {
      id: stable_product_id(name),
      name: name.to_string(),
      description: Some(description.to_string()),
      price_cents,
      image: Some(format!("/images/{}.jpg", name.replace(' ', "-"))),
      category: Some(category.to_string()),
      stock_quantity,
    },
  })
  .collect()
}

fn stable_product_id(name: &str) -> Uuid {
  Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}
