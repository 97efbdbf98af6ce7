//! Read-through access to the remote catalog

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::domain::DomainError;
use crate::domain::cache::{
    CacheParams, NS_BOOKMARKS, NS_CATEGORIES, NS_PROFILE, NS_RESOURCES, NS_TAGS, NS_USERS,
};
use crate::domain::catalog::{Bookmark, Category, Resource, Tag, UserProfile};
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::cache::DataCache;

/// Filter set for resource listings
///
/// Doubles as the cache parameter source so the same filters always map to
/// the same cache entry.
#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    pub category_id: Option<u64>,
    pub tag: Option<String>,
    pub page: Option<u32>,
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into().to_lowercase());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn cache_params(&self) -> CacheParams {
        let mut params = CacheParams::new();
        if let Some(category_id) = self.category_id {
            params = params.with("category", category_id.to_string());
        }
        if let Some(tag) = &self.tag {
            params = params.with("tag", tag.clone());
        }
        if let Some(page) = self.page {
            params = params.with("page", page.to_string());
        }
        params
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category_id) = self.category_id {
            pairs.push(("category".to_string(), category_id.to_string()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag".to_string(), tag.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }
}

/// Read-through composition of the data cache and the catalog API
///
/// Every accessor checks the cache first and only fetches on a miss; a
/// failed fetch propagates to the caller and never poisons the cache.
/// Retrying is the caller's concern.
#[derive(Debug)]
pub struct CatalogService {
    cache: Arc<DataCache>,
    api: Arc<dyn ApiClient>,
}

impl CatalogService {
    pub fn new(cache: Arc<DataCache>, api: Arc<dyn ApiClient>) -> Self {
        Self { cache, api }
    }

    pub async fn categories(&self) -> Result<Vec<Category>, DomainError> {
        self.fetch_cached(NS_CATEGORIES, "/api/categories", &CacheParams::new(), &[])
            .await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, DomainError> {
        self.fetch_cached(NS_TAGS, "/api/tags", &CacheParams::new(), &[])
            .await
    }

    pub async fn users(&self) -> Result<Vec<UserProfile>, DomainError> {
        self.fetch_cached(NS_USERS, "/api/users", &CacheParams::new(), &[])
            .await
    }

    pub async fn resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>, DomainError> {
        self.fetch_cached(
            NS_RESOURCES,
            "/api/resources",
            &query.cache_params(),
            &query.query_pairs(),
        )
        .await
    }

    pub async fn bookmarks(&self) -> Result<Vec<Bookmark>, DomainError> {
        self.fetch_cached(NS_BOOKMARKS, "/api/bookmarks", &CacheParams::new(), &[])
            .await
    }

    pub async fn profile(&self) -> Result<UserProfile, DomainError> {
        self.fetch_cached(NS_PROFILE, "/api/users/me", &CacheParams::new(), &[])
            .await
    }

    /// Drops the cached listing for one filter set, e.g. after posting a
    /// resource into it
    pub async fn invalidate_resources(&self, query: &ResourceQuery) -> Result<(), DomainError> {
        self.cache.invalidate(NS_RESOURCES, &query.cache_params()).await
    }

    pub async fn invalidate_bookmarks(&self) -> Result<(), DomainError> {
        self.cache.invalidate(NS_BOOKMARKS, &CacheParams::new()).await
    }

    pub async fn invalidate_tags(&self) -> Result<(), DomainError> {
        self.cache.invalidate(NS_TAGS, &CacheParams::new()).await
    }

    /// Drops everything, e.g. on logout
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    async fn fetch_cached<T>(
        &self,
        namespace: &str,
        path: &str,
        params: &CacheParams,
        query: &[(String, String)],
    ) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(cached) = self.cache.read::<T>(namespace, params) {
            debug!(namespace, "Serving from cache");
            return Ok(cached);
        }

        debug!(namespace, path, "Cache miss, fetching");
        let value = self.api.get_json(path, query).await?;
        let typed: T = serde_json::from_value(value).map_err(|e| {
            DomainError::serialization(format!("unexpected response shape from {}: {}", path, e))
        })?;

        self.cache.write(namespace, &typed, params, None).await?;
        Ok(typed)
    }
}
