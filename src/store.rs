//! Durable keyed store abstraction.
//!
//! The hosting environment supplies the real store (workspace state,
//! a settings database, ...). The crate only needs a narrow map from
//! string keys to string arrays, so that is all the trait asks for.
//! [`MemoryStore`] is the in-process implementation used in tests and
//! by embedders without a durable backend.

use std::collections::HashMap;

use crate::error::Error;

/// Keyed map from string to string-array, read/write/delete by exact key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<String>>, Error>;

    /// Store `values` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, values: Vec<String>) -> Result<(), Error>;

    /// Delete the value stored under `key`. Deleting an absent key is
    /// a no-op.
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// `HashMap`-backed store with no durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, values: Vec<String>) -> Result<(), Error> {
        self.entries.insert(key.to_owned(), values);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.entries.remove(key);
        Ok(())
    }
}
