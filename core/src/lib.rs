// src/lib.rs

//! Hamper: a synchronous, pluggable guest-cart state core for Rust.
//!
//! Hamper models a browser-style guest cart as four cooperating pieces:
//!  - A persisted cart store over an injectable string key/value backend
//!    (memory, file-per-key, or deliberately unavailable).
//!  - A mutation API (`Cart`) — the only writer — where every operation is
//!    one complete read-modify-write-notify cycle.
//!  - A payload-free change notification bus: listeners are told *that* the
//!    cart changed and re-read the store themselves.
//!  - Per-consumer views (`CartView`) that snapshot the cart on creation,
//!    re-read on every notification, and unsubscribe on drop.
//!
//! The error posture is silent degradation: unreadable stored values read as
//! an empty cart, mutations on unknown ids are no-ops that still notify, and
//! backend write failures are logged and swallowed. Surrounding UI code is
//! written assuming these calls never fail.

// Declare modules according to the planned structure
pub mod model;
pub mod store;
pub mod bus;
pub mod cart;
pub mod view;
pub mod error;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::model::{LineItem, OrderDraft, OrderLine, ProductSnapshot};

pub use crate::store::{CartStore, FileBackend, MemoryBackend, StorageBackend, UnavailableBackend, CART_STORAGE_KEY};

pub use crate::bus::{ChangeBus, Subscription};

// The single-writer mutation API and its applied/no-op distinction
pub use crate::cart::{Cart, MutationOutcome};

pub use crate::view::CartView;

pub use crate::error::{HamperError, HamperResult, StoreError};

/*
    Core Workflow:
    1. Pick a backend: `MemoryBackend`, `FileBackend::new(dir)`, or
       `UnavailableBackend` for contexts with no storage.
    2. Build the handle: `let cart = Cart::new(Arc::new(backend));`
       (or `Cart::from_parts` for a custom key / shared bus).
    3. Each consumer creates its own view: `let view = cart.view();`
    4. Mutate only through `Cart`/`CartView`: `add`, `update_quantity`,
       `remove`, `clear`. Every call writes the store and notifies; by the
       time it returns, every live view's snapshot reflects the change.
    5. Render from the view: `item_count()`, `total_cents()`,
       `is_in_cart(id)`, `item_quantity(id)`, `items()`.
    6. At checkout, hand off `cart.checkout_draft(address, method)` to the
       order API, then `cart.clear()` on success.
*/
