// hamper/src/store/backend.rs

//! The pluggable persistence seam. A [`StorageBackend`] is a string-keyed,
//! string-valued store with last-write-wins overwrite semantics — the shape
//! of origin-scoped browser storage, which this crate's store layer was
//! designed around. Backends are injected into [`CartStore`](crate::store::CartStore)
//! so tests and consumers can choose persistence per instance rather than
//! sharing an ambient global.

use crate::error::StoreError;

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{event, Level};

/// A string key/value store with whole-value overwrite semantics.
///
/// `get` never raises: a backend signals a missing or unreadable value by
/// returning `None`. Write-side failures are typed so the caller can decide
/// how loudly to degrade.
pub trait StorageBackend: Send + Sync {
  /// Returns the stored value for `key`, or `None` when absent or unreadable.
  fn get(&self, key: &str) -> Option<String>;

  /// Stores `value` under `key`, replacing any prior value wholesale.
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

  /// Removes `key` entirely. Removing an absent key is not an error.
  fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend. Nothing survives the process; the default choice for
/// tests and for contexts that do not want persistence.
#[derive(Debug, Default)]
pub struct MemoryBackend {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryBackend {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    self.entries.write().remove(key);
    Ok(())
  }
}

/// File-per-key backend rooted at a directory: the closest stand-in for
/// origin-scoped persistent storage. Values survive process restarts (the
/// page-reload analogue).
///
/// Keys are used directly as file names, so they must be valid file names on
/// the host platform. Reads degrade to `None` on any failure (missing file,
/// bad UTF-8, I/O error); writes go through a sibling temp file and a rename
/// so a torn write never leaves a half-serialized value behind.
#[derive(Debug)]
pub struct FileBackend {
  root: PathBuf,
}

impl FileBackend {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &PathBuf {
    &self.root
  }

  fn value_path(&self, key: &str) -> PathBuf {
    self.root.join(key)
  }
}

impl StorageBackend for FileBackend {
  fn get(&self, key: &str) -> Option<String> {
    match fs::read_to_string(self.value_path(key)) {
      Ok(raw) => Some(raw),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
      Err(e) => {
        event!(Level::WARN, key = %key, error = %e, "Stored value unreadable; treating as absent.");
        None
      }
    }
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    let wrap = |source: std::io::Error| StoreError::WriteFailed {
      key: key.to_string(),
      source: source.into(),
    };

    fs::create_dir_all(&self.root).map_err(wrap)?;

    // Temp-then-rename keeps the stored value whole even if this process
    // dies mid-write.
    let final_path = self.value_path(key);
    let tmp_path = self.root.join(format!("{key}.tmp"));
    fs::write(&tmp_path, value).map_err(wrap)?;
    fs::rename(&tmp_path, &final_path).map_err(wrap)?;
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    match fs::remove_file(self.value_path(key)) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(StoreError::RemoveFailed {
        key: key.to_string(),
        source: e.into(),
      }),
    }
  }
}

/// Backend modelling an execution context with no storage at all (the
/// server-rendering case). Reads yield nothing, writes are rejected; a cart
/// over this backend behaves as permanently empty without ever raising to
/// its callers.
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl UnavailableBackend {
  pub fn new() -> Self {
    Self
  }
}

impl StorageBackend for UnavailableBackend {
  fn get(&self, _key: &str) -> Option<String> {
    None
  }

  fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
    Err(StoreError::Unavailable)
  }

  fn remove(&self, _key: &str) -> Result<(), StoreError> {
    Err(StoreError::Unavailable)
  }
}
