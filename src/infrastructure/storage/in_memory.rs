//! In-memory key/value storage

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::storage::{KeyValueStorage, StorageError};

/// Non-durable storage backend
///
/// Useful for tests and for embedding hosts that do not want anything
/// written to disk. An optional per-value byte quota mimics the capacity
/// limits of browser local storage.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values larger than `bytes` with `QuotaExceeded`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(StorageError::quota_exceeded(format!(
                    "value of {} bytes exceeds quota of {} bytes",
                    value.len(),
                    quota
                )));
            }
        }

        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let storage = InMemoryStorage::new();

        storage.set("key", "value").await.unwrap();
        assert_eq!(
            storage.get("key").await.unwrap(),
            Some("value".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_missing() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let storage = InMemoryStorage::new();

        storage.set("key", "one").await.unwrap();
        storage.set("key", "two").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap(), Some("two".to_string()));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = InMemoryStorage::new();

        storage.set("key", "value").await.unwrap();
        storage.remove("key").await.unwrap();
        storage.remove("key").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_rejects_oversized_value() {
        let storage = InMemoryStorage::new().with_quota(8);

        storage.set("key", "12345678").await.unwrap();

        let err = storage.set("key", "123456789").await.unwrap_err();
        assert!(err.is_quota_exceeded());

        // The previous value is untouched by the failed write.
        assert_eq!(
            storage.get("key").await.unwrap(),
            Some("12345678".to_string())
        );
    }
}
