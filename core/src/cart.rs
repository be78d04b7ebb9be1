// hamper/src/cart.rs

//! The cart mutation API: the only code path permitted to transform the
//! cart. Every mutation is one complete, synchronous
//! read-modify-write-notify cycle against the persisted store — no batching,
//! no partial patches. Consumers must never mutate a snapshot and write it
//! back themselves; going through this API is what guarantees that every
//! change ends in a notification and every observer re-converges.

use crate::bus::ChangeBus;
use crate::model::{LineItem, OrderDraft, ProductSnapshot};
use crate::store::{CartStore, StorageBackend};
use crate::view::CartView;

use std::sync::Arc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// Whether a mutation changed the cart or quietly did nothing.
///
/// Mutations on unknown ids (and adds of quantity zero) are deliberate
/// no-ops rather than errors; this distinction exists so tests can tell the
/// two apart while callers remain free to ignore it. Either way the store is
/// re-written and a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
  /// The cart contents changed.
  Applied,
  /// The call completed without changing the cart (unknown id, zero-quantity
  /// add). Subscribers were still notified.
  Noop,
}

/// A cheaply cloneable handle bundling the injectable store-and-bus pair.
///
/// All clones share the same store and bus, so any clone's mutation is
/// observed by every view created from any other clone. There is no ambient
/// global: two `Cart`s built from different backends are fully isolated,
/// which is what test code should do.
#[derive(Clone)]
pub struct Cart {
  store: Arc<CartStore>,
  bus: Arc<ChangeBus>,
}

impl Cart {
  /// Creates a cart over `backend` with the default storage key and a fresh
  /// bus.
  pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
    Self::from_parts(Arc::new(CartStore::new(backend)), Arc::new(ChangeBus::new()))
  }

  /// Convenience constructor for a fully in-process cart (tests, previews).
  pub fn in_memory() -> Self {
    Self::new(Arc::new(crate::store::MemoryBackend::new()))
  }

  /// Assembles a cart from an explicitly constructed store-and-bus pair,
  /// for callers that need a custom key or want to share a bus.
  pub fn from_parts(store: Arc<CartStore>, bus: Arc<ChangeBus>) -> Self {
    Self { store, bus }
  }

  pub fn store(&self) -> &Arc<CartStore> {
    &self.store
  }

  pub fn bus(&self) -> &Arc<ChangeBus> {
    &self.bus
  }

  /// Creates a [`CartView`] subscribed to this cart's bus.
  pub fn view(&self) -> CartView {
    CartView::new(self)
  }

  // --- Mutations (read-modify-write-notify) ---

  /// Adds `quantity` units of `product` to the cart.
  ///
  /// If a line for this `product.id` already exists, only its quantity is
  /// incremented: the stored product snapshot and unit price are left
  /// untouched, so the price at the time of first add wins even when the
  /// caller passes a re-fetched snapshot with a newer price. Otherwise a
  /// fresh line is appended with a newly generated id and
  /// `price_cents = product.price_cents`.
  ///
  /// `quantity == 0` is a no-op that still rewrites the store and notifies.
  #[instrument(name = "Cart::add", skip_all, fields(product_id = %product.id, quantity = quantity))]
  pub fn add(&self, product: &ProductSnapshot, quantity: u32) -> MutationOutcome {
    let mut items = self.store.read();

    let outcome = if quantity == 0 {
      event!(Level::DEBUG, "Add with zero quantity; no-op.");
      MutationOutcome::Noop
    } else if let Some(existing) = items.iter_mut().find(|item| item.product_id == product.id) {
      existing.quantity += quantity;
      event!(Level::DEBUG, line_id = %existing.id, new_quantity = existing.quantity, "Incremented existing line.");
      MutationOutcome::Applied
    } else {
      let line = LineItem::new(product.clone(), quantity);
      event!(Level::DEBUG, line_id = %line.id, "Appended new line.");
      items.push(line);
      MutationOutcome::Applied
    };

    self.store.write(&items);
    self.bus.notify();
    outcome
  }

  /// Sets the quantity of the line with id `item_id` to `quantity`
  /// (absolute set, not increment).
  ///
  /// A `quantity` of zero delegates to [`remove`](Self::remove) — an item is
  /// never stored with quantity zero. An unknown `item_id` is a silent
  /// no-op; the unchanged list is still written and subscribers notified.
  #[instrument(name = "Cart::update_quantity", skip_all, fields(item_id = %item_id, quantity = quantity))]
  pub fn update_quantity(&self, item_id: Uuid, quantity: u32) -> MutationOutcome {
    if quantity == 0 {
      return self.remove(item_id);
    }

    let mut items = self.store.read();
    let outcome = match items.iter_mut().find(|item| item.id == item_id) {
      Some(item) => {
        item.quantity = quantity;
        event!(Level::DEBUG, "Set line quantity.");
        MutationOutcome::Applied
      }
      None => {
        event!(Level::DEBUG, "Unknown line id; no-op.");
        MutationOutcome::Noop
      }
    };

    self.store.write(&items);
    self.bus.notify();
    outcome
  }

  /// Removes the line with id `item_id`. Unknown ids are a silent no-op;
  /// the store is rewritten and subscribers are notified either way.
  #[instrument(name = "Cart::remove", skip_all, fields(item_id = %item_id))]
  pub fn remove(&self, item_id: Uuid) -> MutationOutcome {
    let mut items = self.store.read();
    let before = items.len();
    items.retain(|item| item.id != item_id);
    let outcome = if items.len() < before {
      event!(Level::DEBUG, "Removed line.");
      MutationOutcome::Applied
    } else {
      event!(Level::DEBUG, "Unknown line id; no-op.");
      MutationOutcome::Noop
    };

    self.store.write(&items);
    self.bus.notify();
    outcome
  }

  /// Empties the cart by erasing the stored value entirely, then notifies.
  #[instrument(name = "Cart::clear", skip_all)]
  pub fn clear(&self) -> MutationOutcome {
    self.store.erase();
    self.bus.notify();
    MutationOutcome::Applied
  }

  // --- Read-only derived queries (no write, no notify) ---

  /// A fresh snapshot straight from the persisted store.
  pub fn items(&self) -> Vec<LineItem> {
    self.store.read()
  }

  /// Sum of quantities across all lines.
  pub fn count(&self) -> u32 {
    self.store.read().iter().map(|item| item.quantity).sum()
  }

  /// Sum of `price_cents * quantity` across all lines.
  pub fn total_cents(&self) -> i64 {
    self.store.read().iter().map(LineItem::line_total_cents).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.store.read().is_empty()
  }

  /// Builds the checkout handoff payload from the current snapshot. Reading
  /// only — submitting the order and clearing the cart afterwards are the
  /// checkout page's job.
  pub fn checkout_draft(&self, delivery_address: impl Into<String>, payment_method: impl Into<String>) -> OrderDraft {
    OrderDraft::from_items(&self.store.read(), delivery_address, payment_method)
  }
}
