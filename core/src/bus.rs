// hamper/src/bus.rs

//! The change notification bus: a payload-free broadcast scoped to the
//! current process, decoupling the cart's single writer from its many
//! readers without either side holding references to the other.
//!
//! A notification carries no state on purpose — listeners re-read the
//! persisted store themselves, so every observer converges on the store's
//! contents rather than on whatever a payload happened to capture. The bus
//! is process-wide only: two processes sharing one persisted store diverge
//! until each independently re-reads, exactly like two browser tabs.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{event, Level};

type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

#[derive(Default)]
struct BusInner {
  next_id: u64,
  /// Registration order is preserved for dispatch. Listeners must not
  /// depend on relative ordering; it is an artifact, not a contract.
  listeners: Vec<(u64, Listener)>,
}

/// A payload-free broadcast primitive.
#[derive(Default)]
pub struct ChangeBus {
  inner: Mutex<BusInner>,
}

impl ChangeBus {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `listener` for all future notifications and returns the
  /// capability to deregister it. The listener is held until the returned
  /// [`Subscription`] is dropped (or explicitly unsubscribed).
  ///
  /// Takes `&Arc<Self>` so the subscription can deregister itself without
  /// keeping the bus alive on its own.
  pub fn subscribe(self: &Arc<Self>, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
    let id = {
      let mut inner = self.inner.lock();
      let id = inner.next_id;
      inner.next_id += 1;
      inner.listeners.push((id, Arc::new(listener)));
      id
    };
    event!(Level::DEBUG, listener_id = id, "Listener subscribed.");
    Subscription {
      bus: Arc::downgrade(self),
      id,
    }
  }

  /// Synchronously invokes every currently registered listener, in
  /// registration order. Fire-and-forget: there is no payload and no
  /// result; listeners re-read the store themselves.
  ///
  /// The listener list is snapshotted before dispatch and the lock is not
  /// held while listeners run, so a listener may subscribe, unsubscribe, or
  /// even notify again without deadlocking. Listeners added during a
  /// dispatch see only subsequent notifications.
  pub fn notify(&self) {
    let snapshot: Vec<Listener> = self.inner.lock().listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
    event!(Level::TRACE, listener_count = snapshot.len(), "Dispatching change notification.");
    for listener in snapshot {
      listener();
    }
  }

  /// Number of currently registered listeners.
  pub fn listener_count(&self) -> usize {
    self.inner.lock().listeners.len()
  }

  fn remove_listener(&self, id: u64) {
    let mut inner = self.inner.lock();
    if let Some(idx) = inner.listeners.iter().position(|(lid, _)| *lid == id) {
      inner.listeners.remove(idx);
      event!(Level::DEBUG, listener_id = id, "Listener unsubscribed.");
    }
  }
}

/// RAII deregistration capability returned by [`ChangeBus::subscribe`].
///
/// Dropping it removes the listener; after that the listener is never
/// invoked again and the bus holds no reference to it. Holds only a weak
/// reference to the bus, so an outliving subscription does not keep a
/// discarded bus alive.
#[must_use = "dropping a Subscription immediately unsubscribes its listener"]
pub struct Subscription {
  bus: Weak<ChangeBus>,
  id: u64,
}

impl Subscription {
  /// Explicit, consuming form of the `Drop` behavior.
  pub fn unsubscribe(self) {
    // Drop does the work.
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(bus) = self.bus.upgrade() {
      bus.remove_listener(self.id);
    }
  }
}
