//! Key/value storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

/// Storage layer failures
///
/// `QuotaExceeded` is distinguished because the cache reacts to it with a
/// full clear rather than a logged warning.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

impl StorageError {
    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::QuotaExceeded {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

/// String-to-string key/value store that survives application restarts
///
/// The cache persists its entire serialized store under one fixed key, so
/// implementations only need atomicity at the granularity of a single get or
/// set call.
#[async_trait]
pub trait KeyValueStorage: Send + Sync + Debug {
    /// Reads the value for a key, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes the value for a key, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scriptable storage for cache tests
    ///
    /// Can simulate a byte quota and unconditional backend failures.
    #[derive(Debug, Default)]
    pub struct MockStorage {
        entries: Mutex<HashMap<String, String>>,
        quota_bytes: Option<usize>,
        fail_writes: Mutex<bool>,
    }

    impl MockStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Rejects writes whose value exceeds `bytes` with `QuotaExceeded`
        pub fn with_quota(mut self, bytes: usize) -> Self {
            self.quota_bytes = Some(bytes);
            self
        }

        pub fn with_entry(self, key: &str, value: &str) -> Self {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            self
        }

        pub fn set_fail_writes(&self, fail: bool) {
            *self.fail_writes.lock().unwrap() = fail;
        }

        pub fn contains(&self, key: &str) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }

        pub fn raw_value(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl KeyValueStorage for MockStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if *self.fail_writes.lock().unwrap() {
                return Err(StorageError::backend("write failure injected"));
            }

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
        async fn test_mock_storage_set_get_remove() {
            let storage = MockStorage::new();

            storage.set("k", "v").await.unwrap();
            assert_eq!(storage.get("k").await.unwrap(), Some("v".to_string()));

            storage.remove("k").await.unwrap();
            assert_eq!(storage.get("k").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_mock_storage_quota() {
            let storage = MockStorage::new().with_quota(4);

            storage.set("k", "abcd").await.unwrap();

            let err = storage.set("k", "abcde").await.unwrap_err();
            assert!(err.is_quota_exceeded());
        }

        #[tokio::test]
        async fn test_mock_storage_injected_failure() {
            let storage = MockStorage::new();
            storage.set_fail_writes(true);

            let err = storage.set("k", "v").await.unwrap_err();
            assert!(!err.is_quota_exceeded());
        }
    }
}
