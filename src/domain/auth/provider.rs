//! Opaque bearer-token source

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Supplies the bearer token for user-scoped API calls
///
/// Token acquisition, storage and refresh live outside this crate; the
/// client core only asks for the current token. `None` means the user is
/// anonymous and the request goes out unauthenticated.
#[async_trait]
pub trait TokenProvider: Send + Sync + Debug {
    /// Returns the current bearer token, if any
    async fn bearer_token(&self) -> Result<Option<String>, DomainError>;
}

/// Fixed-token provider for anonymous sessions or embedding hosts that
/// manage the token themselves
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Provider for anonymous access
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Provider returning a fixed token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<Option<String>, DomainError> {
        Ok(self.token.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_anonymous_provider_has_no_token() {
        let provider = StaticTokenProvider::anonymous();
        assert_eq!(provider.bearer_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_provider_returns_token() {
        let provider = StaticTokenProvider::with_token("abc123");
        assert_eq!(
            provider.bearer_token().await.unwrap(),
            Some("abc123".to_string())
        );
    }
}
