//! Persistent preference store capability.
//!
//! The browser implementation lives in [`crate::web::LocalStorage`];
//! [`MemoryStore`] stands in for it in tests.

use std::collections::HashMap;

use crate::error::ToggleError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// String key-value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read the value under `key`, or `None` if nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Storage`] if the backing store rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Storage`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ToggleError>;
}

/// In-memory store that also records every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`, with no recorded writes.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Every `(key, value)` passed to [`PreferenceStore::set`], oldest first.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToggleError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ToggleError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes.push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}
