//! Implements an in-memory backed key-value store.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::stores::{KeyValueStore, StoreError};

/// Keeps application state in a shared in-memory map.
///
/// Cloning the store clones the handle, not the data, so a session manager
/// and the aggregation functions can share one underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod memory_store_tests {
    use crate::stores::KeyValueStore;

    use super::MemoryStore;

    #[tokio::test]
    async fn get_returns_none_for_absent_key() {
        let store = MemoryStore::new();

        assert_eq!(store.get("no-such-key").await, Ok(None));
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = MemoryStore::new();

        store.set("greeting", "hello").await.unwrap();

        assert_eq!(store.get("greeting").await, Ok(Some("hello".to_owned())));
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let store = MemoryStore::new();

        store.set("greeting", "hello").await.unwrap();
        store.set("greeting", "goodbye").await.unwrap();

        assert_eq!(store.get("greeting").await, Ok(Some("goodbye".to_owned())));
    }

    #[tokio::test]
    async fn remove_clears_value_and_is_idempotent() {
        let store = MemoryStore::new();

        store.set("greeting", "hello").await.unwrap();
        store.remove("greeting").await.unwrap();

        assert_eq!(store.get("greeting").await, Ok(None));
        assert_eq!(store.remove("greeting").await, Ok(()));
    }

    #[tokio::test]
    async fn clones_share_underlying_data() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("greeting", "hello").await.unwrap();

        assert_eq!(clone.get("greeting").await, Ok(Some("hello".to_owned())));
    }
}
