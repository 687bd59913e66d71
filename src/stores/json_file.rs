//! Implements a key-value store persisted as a single JSON file.
//!
//! This is the on-device analogue of the mobile client's local storage: one
//! flat object mapping keys to serialized text blobs. Writes go through a
//! temporary file and a rename so a crash mid-write cannot corrupt the store.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::fs;

use crate::stores::{KeyValueStore, StoreError};

/// Persists application state as a JSON object in a single file.
///
/// The full map is kept in memory and flushed to disk on every mutation.
/// Cloning the store clones the handle, not the data.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any previously persisted entries.
    ///
    /// A missing file is treated as an empty store.
    ///
    /// # Errors
    /// Returns [StoreError::Read] if the file exists but cannot be read or
    /// does not contain a valid JSON object.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text).map_err(|error| {
                StoreError::Read(format!(
                    "malformed store file {}: {error}",
                    path.display()
                ))
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(StoreError::Read(error.to_string())),
        };

        Ok(Self {
            path: Arc::new(path),
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    async fn flush(&self) -> Result<(), StoreError> {
        // Serialize under the lock, write outside of it.
        let snapshot = {
            let entries = self.entries.lock().unwrap();
            serde_json::to_string_pretty(&*entries)
                .map_err(|error| StoreError::Write(error.to_string()))?
        };

        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, snapshot)
            .await
            .map_err(|error| StoreError::Write(error.to_string()))?;
        fs::rename(&temp_path, &*self.path)
            .await
            .map_err(|error| StoreError::Write(error.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());

        self.flush().await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = self.entries.lock().unwrap().remove(key);

        if removed.is_none() {
            return Ok(());
        }

        self.flush().await
    }
}
