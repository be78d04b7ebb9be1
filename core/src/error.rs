// hamper/src/error.rs

//! Internal error taxonomy. By design, none of these types escape the public
//! mutation or view surface: store read failures degrade to an empty cart and
//! write failures are logged and swallowed at the `CartStore` boundary. They
//! exist so the storage seam has a typed contract and so tests can exercise
//! the degraded paths directly.

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised by a [`StorageBackend`](crate::store::StorageBackend)
/// implementation. Reads never raise; a backend signals an unreadable value
/// by returning `None` from `get`.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Backend rejected write for key '{key}'. Source: {source}")]
  WriteFailed {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Backend rejected removal of key '{key}'. Source: {source}")]
  RemoveFailed {
    key: String,
    #[source]
    source: AnyhowError,
  },

  /// The backing store does not exist in this execution context (the
  /// equivalent of running without origin-scoped storage). Persisting is
  /// impossible; reads over such a backend yield an empty cart.
  #[error("Storage backend is unavailable in this execution context")]
  Unavailable,
}

#[derive(Debug, Error)]
pub enum HamperError {
  #[error("Store operation failed. Source: {source}")]
  Store {
    #[from]
    source: StoreError,
  },

  #[error("Cart serialization failed. Source: {source}")]
  Serialization {
    #[source]
    source: serde_json::Error,
  },
}

pub type HamperResult<T, E = HamperError> = std::result::Result<T, E>;
