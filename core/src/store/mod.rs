// hamper/src/store/mod.rs

pub mod backend;
pub mod cart_store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, UnavailableBackend};
pub use cart_store::{CartStore, CART_STORAGE_KEY};
