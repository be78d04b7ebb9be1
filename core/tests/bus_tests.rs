// tests/bus_tests.rs
mod common;

use common::setup_tracing;
use hamper::ChangeBus;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_notify_reaches_all_listeners() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let hits = Arc::new(AtomicUsize::new(0));

  let h1 = hits.clone();
  let _s1 = bus.subscribe(move || {
    h1.fetch_add(1, Ordering::SeqCst);
  });
  let h2 = hits.clone();
  let _s2 = bus.subscribe(move || {
    h2.fetch_add(1, Ordering::SeqCst);
  });

  bus.notify();
  assert_eq!(hits.load(Ordering::SeqCst), 2);

  bus.notify();
  assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[test]
fn test_dispatch_in_registration_order() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let order = Arc::new(Mutex::new(Vec::new()));

  let o1 = order.clone();
  let _s1 = bus.subscribe(move || o1.lock().push("first"));
  let o2 = order.clone();
  let _s2 = bus.subscribe(move || o2.lock().push("second"));
  let o3 = order.clone();
  let _s3 = bus.subscribe(move || o3.lock().push("third"));

  bus.notify();
  assert_eq!(*order.lock(), vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribe_via_drop_and_explicitly() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let hits = Arc::new(AtomicUsize::new(0));

  let h = hits.clone();
  let sub_dropped = bus.subscribe(move || {
    h.fetch_add(1, Ordering::SeqCst);
  });
  let h = hits.clone();
  let sub_explicit = bus.subscribe(move || {
    h.fetch_add(1, Ordering::SeqCst);
  });
  assert_eq!(bus.listener_count(), 2);

  drop(sub_dropped);
  assert_eq!(bus.listener_count(), 1);

  sub_explicit.unsubscribe();
  assert_eq!(bus.listener_count(), 0);

  bus.notify();
  assert_eq!(hits.load(Ordering::SeqCst), 0, "deregistered listeners must never be invoked");
}

#[test]
fn test_listener_may_subscribe_during_dispatch() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let late_hits = Arc::new(AtomicUsize::new(0));

  // Re-entrant subscription from inside a notification must not deadlock.
  // The late listener only sees notifications after the one that added it.
  let bus_for_listener = bus.clone();
  let late = late_hits.clone();
  let extra_sub = Arc::new(Mutex::new(None));
  let slot = extra_sub.clone();
  let _s = bus.subscribe(move || {
    let mut slot = slot.lock();
    if slot.is_none() {
      let late = late.clone();
      *slot = Some(bus_for_listener.subscribe(move || {
        late.fetch_add(1, Ordering::SeqCst);
      }));
    }
  });

  bus.notify();
  assert_eq!(late_hits.load(Ordering::SeqCst), 0);

  bus.notify();
  assert_eq!(late_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_may_unsubscribe_itself_during_dispatch() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let hits = Arc::new(AtomicUsize::new(0));

  let slot: Arc<Mutex<Option<hamper::Subscription>>> = Arc::new(Mutex::new(None));
  let slot_for_listener = slot.clone();
  let h = hits.clone();
  let sub = bus.subscribe(move || {
    h.fetch_add(1, Ordering::SeqCst);
    // One-shot: drop our own subscription on first delivery.
    slot_for_listener.lock().take();
  });
  *slot.lock() = Some(sub);

  bus.notify();
  bus.notify();

  assert_eq!(hits.load(Ordering::SeqCst), 1);
  assert_eq!(bus.listener_count(), 0);
}

#[test]
fn test_notify_with_no_listeners_is_harmless() {
  setup_tracing();
  let bus = ChangeBus::new();
  bus.notify();
  assert_eq!(bus.listener_count(), 0);
}

#[test]
fn test_subscription_outliving_bus_is_harmless() {
  setup_tracing();
  let bus = Arc::new(ChangeBus::new());
  let sub = bus.subscribe(|| {});
  drop(bus);
  // Dropping the subscription after the bus is gone must not panic.
  drop(sub);
}
