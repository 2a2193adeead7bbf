//! Persistent keyed store: synchronous get/set of JSON values by string key.
//!
//! Backends implement the raw string contract; the JSON and typed layers
//! (`read`, `write`, [`load_or`], [`save`]) are shared.

mod file;
mod memory;

pub use file::FileKeyedStore;
pub use memory::MemoryKeyedStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A synchronous, single-writer key-value store of JSON documents.
pub trait KeyedStore {
    /// Raw stored text. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be read.
    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the stored text under `key`. Must be all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be written.
    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the JSON value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the stored text is not JSON.
    fn read(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        self.read_raw(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Write a JSON value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    fn write(&mut self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.write_raw(key, &raw)
    }
}

/// Load a typed value, falling back to `default` when the key is absent or
/// unreadable. Failures are logged, never returned.
pub fn load_or<T, S, F>(store: &S, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    S: KeyedStore + ?Sized,
    F: FnOnce() -> T,
{
    let value = match store.read(key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(key, "no stored value, using default");
            return default();
        }
        Err(error) => {
            tracing::error!(key, %error, "failed to read stored value, using default");
            return default();
        }
    };

    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(source) => {
            let error = StoreError::Parse {
                key: key.to_string(),
                source,
            };
            tracing::error!(key, %error, "stored value has unexpected shape, using default");
            default()
        }
    }
}

/// Serialize and store a typed value under `key`.
///
/// # Errors
///
/// Returns `StoreError` if serialization or the write fails.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyedStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.write_raw(key, &raw)
}
