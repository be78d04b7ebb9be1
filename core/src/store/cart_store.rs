// hamper/src/store/cart_store.rs

//! Durable storage of the serialized cart: the sole source of truth for cart
//! contents. Every write replaces the whole serialized sequence; there is no
//! per-item patching. Read failures of any kind degrade to an empty cart —
//! the surrounding UI is written assuming these calls never fail, and a lost
//! cart is locally recoverable by the user re-adding items.

use crate::error::{HamperError, HamperResult};
use crate::model::LineItem;
use crate::store::backend::StorageBackend;

use std::sync::Arc;
use tracing::{event, Level};

/// The well-known key the serialized cart lives under. All readers and
/// writers of one logical cart must agree on it.
pub const CART_STORAGE_KEY: &str = "hamper.cart.v1";

/// Reads and writes the full line-item sequence under a single key of an
/// injected [`StorageBackend`].
pub struct CartStore {
  backend: Arc<dyn StorageBackend>,
  key: String,
}

impl CartStore {
  /// Creates a store over `backend` using [`CART_STORAGE_KEY`].
  pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
    Self::with_key(backend, CART_STORAGE_KEY)
  }

  /// Creates a store over `backend` with a custom key, for applications that
  /// keep several independent carts (or namespace per deployment).
  pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
    Self {
      backend,
      key: key.into(),
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  /// Returns the current cart contents.
  ///
  /// Never raises: a missing value, an unparseable value, or an unavailable
  /// backend all read as an empty cart.
  pub fn read(&self) -> Vec<LineItem> {
    let Some(raw) = self.backend.get(&self.key) else {
      return Vec::new();
    };
    match serde_json::from_str::<Vec<LineItem>>(&raw) {
      Ok(items) => items,
      Err(e) => {
        event!(Level::WARN, key = %self.key, error = %e, "Stored cart failed to parse; treating as empty.");
        Vec::new()
      }
    }
  }

  /// Serializes and persists `items`, replacing any prior value wholesale.
  ///
  /// Failures are logged at WARN and swallowed: the persisted value simply
  /// stays stale, matching the non-raising contract of the whole core. Use
  /// [`try_write`](Self::try_write) to observe the failure instead.
  pub fn write(&self, items: &[LineItem]) {
    if let Err(e) = self.try_write(items) {
      event!(Level::WARN, key = %self.key, error = %e, "Cart write failed; persisted value is stale.");
    }
  }

  /// The fallible form of [`write`](Self::write).
  pub fn try_write(&self, items: &[LineItem]) -> HamperResult<()> {
    let raw = serde_json::to_string(items).map_err(|source| HamperError::Serialization { source })?;
    self.backend.set(&self.key, &raw)?;
    Ok(())
  }

  /// Removes the stored value entirely. Equivalent to writing an empty
  /// sequence, except the key itself disappears. Failures are logged and
  /// swallowed like [`write`](Self::write).
  pub fn erase(&self) {
    if let Err(e) = self.backend.remove(&self.key) {
      event!(Level::WARN, key = %self.key, error = %e, "Cart erase failed; persisted value is stale.");
    }
  }
}
