// hamper/src/view.rs

//! The per-consumer adapter that makes cart state observable to rendering
//! code. Each view holds its own snapshot of the cart: one synchronous read
//! at construction, then an unconditional re-read on every bus notification
//! (no diffing against the previous snapshot). Dropping the view releases
//! its subscription, so no re-reads happen after a consumer goes away.

use crate::cart::{Cart, MutationOutcome};
use crate::bus::Subscription;
use crate::model::{LineItem, ProductSnapshot};

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// A live, self-updating snapshot of one cart.
///
/// Accessors answer from the snapshot taken at the last notification, not
/// from the live store — between notifications a view's answers are stable.
/// After a mutation-and-notify cycle completes, every mounted view's
/// snapshot equals the persisted contents. There is no error state: a
/// failed store read surfaces as an empty snapshot.
pub struct CartView {
  snapshot: Arc<RwLock<Vec<LineItem>>>,
  cart: Cart,
  _subscription: Subscription,
}

impl CartView {
  /// Reads the initial snapshot and subscribes to the cart's bus.
  pub fn new(cart: &Cart) -> Self {
    let snapshot = Arc::new(RwLock::new(cart.items()));

    // The listener owns only the snapshot cell and the store handle, never
    // the view itself, so dropping the view is the sole way it unmounts.
    let cell = Arc::clone(&snapshot);
    let store = Arc::clone(cart.store());
    let subscription = cart.bus().subscribe(move || {
      *cell.write() = store.read();
    });

    Self {
      snapshot,
      cart: cart.clone(),
      _subscription: subscription,
    }
  }

  /// The underlying cart handle, for mutations through this view.
  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  // --- Snapshot accessors ---

  pub fn items(&self) -> Vec<LineItem> {
    self.snapshot.read().clone()
  }

  /// Sum of quantities across the snapshot.
  pub fn item_count(&self) -> u32 {
    self.snapshot.read().iter().map(|item| item.quantity).sum()
  }

  /// Sum of `price_cents * quantity` across the snapshot.
  pub fn total_cents(&self) -> i64 {
    self.snapshot.read().iter().map(LineItem::line_total_cents).sum()
  }

  pub fn is_in_cart(&self, product_id: Uuid) -> bool {
    self.snapshot.read().iter().any(|item| item.product_id == product_id)
  }

  /// Quantity of the line for `product_id`, or 0 when absent.
  pub fn item_quantity(&self, product_id: Uuid) -> u32 {
    self
      .snapshot
      .read()
      .iter()
      .find(|item| item.product_id == product_id)
      .map_or(0, |item| item.quantity)
  }

  pub fn is_empty(&self) -> bool {
    self.snapshot.read().is_empty()
  }

  // --- Mutation delegates ---
  // Thin passthroughs so a consumer holding only the view can mutate; the
  // resulting notification updates this view's snapshot along with all
  // others before the call returns.

  pub fn add(&self, product: &ProductSnapshot, quantity: u32) -> MutationOutcome {
    self.cart.add(product, quantity)
  }

  pub fn update_quantity(&self, item_id: Uuid, quantity: u32) -> MutationOutcome {
    self.cart.update_quantity(item_id, quantity)
  }

  pub fn remove(&self, item_id: Uuid) -> MutationOutcome {
    self.cart.remove(item_id)
  }

  pub fn clear(&self) -> MutationOutcome {
    self.cart.clear()
  }
}
