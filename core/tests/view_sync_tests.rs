// tests/view_sync_tests.rs
mod common;

use common::*;
use hamper::Cart;

#[test]
fn test_view_initial_snapshot_reflects_store() {
  setup_tracing();
  let cart = Cart::in_memory();
  let pasta = product("pasta", 189);
  cart.add(&pasta, 2);

  // View created after the mutation still sees it: construction reads once.
  let view = cart.view();
  assert_eq!(view.item_count(), 2);
  assert_eq!(view.total_cents(), 378);
  assert!(view.is_in_cart(pasta.id));
  assert_eq!(view.item_quantity(pasta.id), 2);
}

#[test]
fn test_two_views_stay_in_sync_through_the_bus() {
  setup_tracing();
  let cart = Cart::in_memory();
  let nav_badge = cart.view();
  let cart_page = cart.view();
  let lemons = product("lemons", 60);

  // Mutation through one view's exposed API...
  cart_page.add(&lemons, 3);

  // ...is visible in the other view's snapshot by the time the call returns,
  // without the views referencing each other.
  assert_eq!(nav_badge.item_count(), 3);
  assert_eq!(nav_badge.total_cents(), 180);
  assert!(nav_badge.is_in_cart(lemons.id));
  assert_eq!(cart_page.item_count(), 3);
}

#[test]
fn test_view_snapshot_replaced_unconditionally() {
  setup_tracing();
  let cart = Cart::in_memory();
  let view = cart.view();
  let honey = product("honey", 720);

  cart.add(&honey, 1);
  let line_id = view.items()[0].id;

  cart.update_quantity(line_id, 4);
  assert_eq!(view.item_quantity(honey.id), 4);

  cart.remove(line_id);
  assert!(view.is_empty());
  assert_eq!(view.item_quantity(honey.id), 0);
}

#[test]
fn test_dropped_view_stops_receiving_and_unsubscribes() {
  setup_tracing();
  let cart = Cart::in_memory();

  let keeper = cart.view();
  assert_eq!(cart.bus().listener_count(), 1);

  {
    let transient = cart.view();
    assert_eq!(cart.bus().listener_count(), 2);
    cart.add(&product("dates", 540), 1);
    assert_eq!(transient.item_count(), 1);
  } // transient dropped here

  assert_eq!(cart.bus().listener_count(), 1, "drop must deregister the view's listener");

  // Later mutations still reach the surviving view.
  cart.add(&product("walnuts", 880), 2);
  assert_eq!(keeper.item_count(), 3);
}

#[test]
fn test_view_over_clear() {
  setup_tracing();
  let cart = Cart::in_memory();
  let view = cart.view();
  cart.add(&product("butter", 340), 2);
  assert_eq!(view.item_count(), 2);

  view.clear();
  assert!(view.is_empty());
  assert_eq!(view.item_count(), 0);
  assert_eq!(view.total_cents(), 0);
}

#[test]
fn test_clones_of_cart_share_one_bus_and_store() {
  setup_tracing();
  let cart = Cart::in_memory();
  let cart_in_other_component = cart.clone();
  let view = cart.view();

  cart_in_other_component.add(&product("cheese", 625), 1);

  assert_eq!(view.item_count(), 1);
  assert_eq!(cart.count(), 1);
}

#[test]
fn test_independent_carts_do_not_cross_talk() {
  setup_tracing();
  let cart_a = Cart::in_memory();
  let cart_b = Cart::in_memory();
  let view_b = cart_b.view();

  cart_a.add(&product("olives", 410), 5);

  assert!(view_b.is_empty(), "separately constructed store-and-bus pairs must be isolated");
  assert_eq!(cart_b.count(), 0);
}
