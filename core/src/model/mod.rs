// hamper/src/model/mod.rs

pub mod line_item;
pub mod order;
pub mod product;

// Re-export key types for easier access from other hamper modules (and lib.rs)
pub use line_item::LineItem;
pub use order::{OrderDraft, OrderLine};
pub use product::ProductSnapshot;
