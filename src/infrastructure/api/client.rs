//! HTTP client for the remote catalog API

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::auth::TokenProvider;

/// Trait for catalog API operations (for mocking)
#[async_trait]
pub trait ApiClient: Send + Sync + Debug {
    /// GET a JSON document, attaching the bearer token when one is available
    async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real API client using reqwest
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_provider,
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        token_provider: Arc<dyn TokenProvider>,
        timeout: std::time::Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_provider,
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.get(&url).query(query);

        if let Some(token) = self.token_provider.bearer_token().await? {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::api(path, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::api(path, format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::api(path, format!("failed to parse response: {}", e)))
    }
}
