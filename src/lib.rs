//! ResourceBase client core
//!
//! The data layer of the ResourceBase single-page application:
//! - A keyed expiring cache persisted through durable key/value storage,
//!   with size-bounded oldest-first eviction
//! - Tag similarity matching for autocomplete and duplicate-tag detection
//! - Read-through catalog services between UI components and the remote
//!   JSON API

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use domain::SystemClock;
use domain::auth::{StaticTokenProvider, TokenProvider};
use infrastructure::api::HttpApiClient;
use infrastructure::cache::DataCache;
use infrastructure::services::{CatalogService, TagSuggestionService};
use infrastructure::storage::FileStorage;

/// One shared client core per running application
///
/// Built explicitly and handed to the UI-binding layer; there is no hidden
/// global store. All components share the same cache through this struct.
#[derive(Debug)]
pub struct ClientCore {
    pub cache: Arc<DataCache>,
    pub catalog: Arc<CatalogService>,
    pub tag_suggestions: Arc<TagSuggestionService>,
}

impl ClientCore {
    /// Initializes logging and the core from layered configuration files
    /// and environment variables
    pub async fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::load()?;
        infrastructure::logging::init_logging(&config.logging);
        Self::init(&config).await
    }

    /// Initializes the core for an anonymous session
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        Self::init_with_token_provider(config, Arc::new(StaticTokenProvider::anonymous())).await
    }

    /// Initializes the core with a caller-supplied token source
    pub async fn init_with_token_provider(
        config: &AppConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> anyhow::Result<Self> {
        let storage = Arc::new(FileStorage::new(&config.storage.root));
        let clock = Arc::new(SystemClock::new());

        let cache = Arc::new(DataCache::hydrate(storage, clock, config.cache.clone()).await);
        info!(
            entries = cache.len(),
            storage_root = %config.storage.root,
            "Client core initialized"
        );

        let api = Arc::new(HttpApiClient::new(&config.api.base_url, token_provider));
        let catalog = Arc::new(CatalogService::new(cache.clone(), api));
        let tag_suggestions = Arc::new(TagSuggestionService::new(catalog.clone()));

        Ok(Self {
            cache,
            catalog,
            tag_suggestions,
        })
    }

    /// Drops all cached data, e.g. on sign-out
    pub async fn clear_cached_data(&self) {
        self.cache.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::domain::cache::{CacheParams, NS_TAGS};

    fn config_in(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                root: dir.to_string_lossy().into_owned(),
            },
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_init_starts_with_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let core = ClientCore::init(&config_in(dir.path())).await.unwrap();

        assert!(core.cache.is_empty());
    }

    #[tokio::test]
    async fn test_cache_survives_reinitialization() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        {
            let core = ClientCore::init(&config).await.unwrap();
            core.cache
                .write(NS_TAGS, &serde_json::json!(["rust"]), &CacheParams::new(), None)
                .await
                .unwrap();
        }

        let reopened = ClientCore::init(&config).await.unwrap();
        assert_eq!(reopened.cache.len(), 1);
        assert!(reopened.cache.is_valid(NS_TAGS, &CacheParams::new()));
    }

    #[tokio::test]
    async fn test_clear_cached_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let core = ClientCore::init(&config).await.unwrap();

        core.cache
            .write(NS_TAGS, &serde_json::json!(1), &CacheParams::new(), None)
            .await
            .unwrap();
        core.clear_cached_data().await;

        assert!(core.cache.is_empty());

        let reopened = ClientCore::init(&config).await.unwrap();
        assert!(reopened.cache.is_empty());
    }
}
