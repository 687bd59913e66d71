//! Contains the trait for the key-value store that backs the application and
//! the store implementations that ship with the crate.
//!
//! Each logical entity is persisted as a serialized text blob under its own
//! key (see [crate::keys]), so implementations only need to provide atomic
//! get/set/remove per key. No multi-key transactions are required.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading from or writing to a store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The store backend failed to read a key, or returned data that could
    /// not be decoded.
    #[error("could not read from the store: {0}")]
    Read(String),

    /// The store backend failed to persist a key.
    #[error("could not write to the store: {0}")]
    Write(String),
}

/// Handles the persistence of serialized application state.
///
/// Implementations must be internally synchronized: each call is independent
/// and atomic with respect to its key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op, not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
