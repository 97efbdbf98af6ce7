//! Keyed expiring cache with size-bounded eviction and durable persistence

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::config::CacheConfig;
use crate::domain::cache::{CacheEntry, CacheParams, build_key, expiry_for};
use crate::domain::storage::KeyValueStorage;
use crate::domain::{Clock, DomainError};

/// Read-through cache shared by all UI components
///
/// Entries live in memory and the whole store is re-serialized to durable
/// storage after every mutation, so a reload starts from the last persisted
/// state. Callers fetch on miss and write the result back; the cache never
/// fetches on its own behalf.
///
/// Storage failures degrade rather than propagate: a corrupt persisted blob
/// hydrates as an empty store, a quota-exceeded write clears the cache
/// entirely, and any other persistence failure is logged and swallowed.
/// Overlapping writes to the same key are last-write-wins; each individual
/// operation is atomic but there is no cross-operation coordination.
#[derive(Debug)]
pub struct DataCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
}

impl DataCache {
    /// Builds the cache from the persisted blob in durable storage
    ///
    /// Any read or parse failure yields an empty, fully functional store.
    pub async fn hydrate(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
        config: CacheConfig,
    ) -> Self {
        let entries = match storage.get(&config.storage_key).await {
            Ok(Some(blob)) => match serde_json::from_str::<HashMap<String, CacheEntry>>(&blob) {
                Ok(entries) => {
                    debug!(entries = entries.len(), "Cache hydrated from storage");
                    entries
                }
                Err(e) => {
                    warn!("Discarding corrupt persisted cache: {}", e);
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("Failed to read persisted cache, starting empty: {}", e);
                HashMap::new()
            }
        };

        Self {
            entries: RwLock::new(entries),
            storage,
            clock,
            config,
        }
    }

    /// True when an entry exists for the key and its freshness invariant
    /// still holds
    pub fn is_valid(&self, namespace: &str, params: &CacheParams) -> bool {
        let key = build_key(namespace, params);
        let now = self.clock.now_millis();

        self.entries
            .read()
            .map(|entries| {
                entries
                    .get(&key)
                    .map(|entry| entry.is_valid(now))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// Returns the cached value only while it is valid; never a stale value
    pub fn read_value(&self, namespace: &str, params: &CacheParams) -> Option<serde_json::Value> {
        let key = build_key(namespace, params);
        let now = self.clock.now_millis();

        let entries = self.entries.read().ok()?;
        entries
            .get(&key)
            .filter(|entry| entry.is_valid(now))
            .map(|entry| entry.value().clone())
    }

    /// Typed read; a value that no longer deserializes is treated as a miss
    pub fn read<T: DeserializeOwned>(&self, namespace: &str, params: &CacheParams) -> Option<T> {
        let value = self.read_value(namespace, params)?;

        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!(namespace, "Cached value no longer deserializes: {}", e);
                None
            }
        }
    }

    /// Inserts or overwrites the entry for the built key
    ///
    /// Expiry is `custom_expiry` when given, else the namespace default. If
    /// the serialized store exceeds the byte cap afterwards, one eviction
    /// pass runs before the store is persisted. A quota failure from the
    /// backing store clears the cache instead of surfacing an error.
    pub async fn write<V: Serialize + ?Sized>(
        &self,
        namespace: &str,
        value: &V,
        params: &CacheParams,
        custom_expiry: Option<Duration>,
    ) -> Result<(), DomainError> {
        let value = serde_json::to_value(value).map_err(|e| {
            DomainError::serialization(format!("failed to serialize cache value: {}", e))
        })?;

        let key = build_key(namespace, params);
        let expiry_ms = custom_expiry
            .unwrap_or_else(|| expiry_for(namespace))
            .as_millis() as u64;
        let entry = CacheEntry::new(value, self.clock.now_millis(), expiry_ms);

        let blob = {
            let mut entries = self
                .entries
                .write()
                .map_err(|e| DomainError::internal(format!("cache lock poisoned: {}", e)))?;

            entries.insert(key.clone(), entry);

            let mut blob = Self::serialize_store(&entries)?;
            if blob.len() > self.config.max_bytes {
                let evicted = Self::evict(&mut entries, &key, self.config.evict_fraction);
                debug!(
                    evicted,
                    remaining = entries.len(),
                    "Cache over byte cap, evicted oldest entries"
                );
                blob = Self::serialize_store(&entries)?;
            }
            blob
        };

        self.persist(&blob).await;
        Ok(())
    }

    /// Removes exactly the one built key, persisting the reduced store
    pub async fn invalidate(
        &self,
        namespace: &str,
        params: &CacheParams,
    ) -> Result<(), DomainError> {
        let key = build_key(namespace, params);

        let blob = {
            let mut entries = self
                .entries
                .write()
                .map_err(|e| DomainError::internal(format!("cache lock poisoned: {}", e)))?;

            if entries.remove(&key).is_none() {
                return Ok(());
            }
            Self::serialize_store(&entries)?
        };

        self.persist(&blob).await;
        Ok(())
    }

    /// Empties the store in memory and removes the durable copy
    pub async fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }

        if let Err(e) = self.storage.remove(&self.config.storage_key).await {
            warn!("Failed to remove persisted cache: {}", e);
        }
    }

    /// Number of entries currently held, valid or not
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialized byte size of the whole store
    pub fn serialized_size(&self) -> Result<usize, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::internal(format!("cache lock poisoned: {}", e)))?;
        Ok(Self::serialize_store(&entries)?.len())
    }

    fn serialize_store(entries: &HashMap<String, CacheEntry>) -> Result<String, DomainError> {
        serde_json::to_string(entries).map_err(|e| {
            DomainError::serialization(format!("failed to serialize cache store: {}", e))
        })
    }

    /// Single-pass, age-based eviction
    ///
    /// The just-written key is never a candidate in its own pass. Candidates
    /// are sorted oldest-first with the key as deterministic tie-break, and
    /// the oldest `ceil(candidates * fraction)` are removed. The pass is not
    /// re-checked against the cap, so the store may stay transiently
    /// oversized until the next write.
    fn evict(
        entries: &mut HashMap<String, CacheEntry>,
        just_written: &str,
        fraction: f64,
    ) -> usize {
        let mut candidates: Vec<(String, u64)> = entries
            .iter()
            .filter(|(key, _)| key.as_str() != just_written)
            .map(|(key, entry)| (key.clone(), entry.written_at()))
            .collect();

        candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let count = (candidates.len() as f64 * fraction).ceil() as usize;
        for (key, _) in candidates.into_iter().take(count) {
            entries.remove(&key);
        }

        count
    }

    /// Persists the serialized store, degrading on failure
    async fn persist(&self, blob: &str) {
        match self.storage.set(&self.config.storage_key, blob).await {
            Ok(()) => {}
            Err(e) if e.is_quota_exceeded() => {
                warn!("Storage quota exceeded, clearing cache: {}", e);
                self.clear().await;
            }
            Err(e) => {
                warn!("Failed to persist cache, keeping in-memory state: {}", e);
            }
        }
    }
}
