//! File-backed key/value storage

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::storage::{KeyValueStorage, StorageError};

/// Durable storage backend writing one file per key under a root directory
///
/// The durable analog of browser local storage: values survive process
/// restarts within the same profile directory. Keys map to file names, so
/// they are sanitized to a conservative character set.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", sanitized))
    }

    async fn ensure_root(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            StorageError::backend(format!(
                "failed to create storage directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    fn map_write_error(path: &Path, e: std::io::Error) -> StorageError {
        // A full disk is the file-system equivalent of a storage quota.
        if e.kind() == std::io::ErrorKind::StorageFull {
            StorageError::quota_exceeded(format!("no space left writing {}", path.display()))
        } else {
            StorageError::backend(format!("failed to write {}: {}", path.display(), e))
        }
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::backend(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_root().await?;
        let path = self.path_for(key);

        tokio::fs::write(&path, value)
            .await
            .map_err(|e| Self::map_write_error(&path, e))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::backend(format!(
                "failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("app_data_cache", r#"{"a":1}"#).await.unwrap();
        assert_eq!(
            storage.get("app_data_cache").await.unwrap(),
            Some(r#"{"a":1}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reinstantiation() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStorage::new(dir.path());
            storage.set("cache", "persisted").await.unwrap();
        }

        let reopened = FileStorage::new(dir.path());
        assert_eq!(
            reopened.get("cache").await.unwrap(),
            Some("persisted".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.remove("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_are_sanitized_to_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("cache/with:odd chars", "v").await.unwrap();
        assert_eq!(
            storage.get("cache/with:odd chars").await.unwrap(),
            Some("v".to_string())
        );
    }
}
