use std::collections::HashMap;

use crate::error::StoreError;

use super::KeyedStore;

/// In-process keyed store. Holds raw text so tests can plant corrupt values.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyedStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryKeyedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw text under `key`.
    #[must_use]
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.values.insert(key.to_string(), raw.to_string());
        self
    }

    /// The raw text under `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Make every subsequent write fail (simulates a full or read-only medium).
    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyedStore for MemoryKeyedStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::other("writes disabled"),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
