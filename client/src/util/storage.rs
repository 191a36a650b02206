//! Durable key-value storage behind the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate is the only writer of persisted identity and theme. It
//! talks to storage through `DurableStorage` so the same state machine runs
//! against `localStorage` in the browser and an in-memory map in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Failure writing to or removing from durable storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
    #[error("storage removal rejected for key {key}: {reason}")]
    RemoveRejected { key: String, reason: String },
}

/// String-valued key/value store that survives page reloads.
pub trait DurableStorage {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store refuses the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Off-browser builds see an empty, read-only store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DurableStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StorageError::WriteRejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|e| StorageError::RemoveRejected {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store used by tests and non-browser embedding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any codec.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
