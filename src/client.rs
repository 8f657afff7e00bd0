//! High-level client — `KimolaClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::preset::client::Presets;
use crate::domain::query::client::Queries;
use crate::domain::subscription::client::Subscription;
use crate::error::SdkError;
use crate::http::KimolaHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::preset::client::Presets as PresetsClient;
pub use crate::domain::query::client::Queries as QueriesClient;
pub use crate::domain::subscription::client::Subscription as SubscriptionClient;

/// The primary entry point for the Kimola SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.presets()`, `client.queries()`, `client.subscription()`.
///
/// No mutable state is written after construction, so a client (and the
/// transport inside it) is safe to share across concurrent calls. Each
/// instance is fully self-contained; dropping it releases an internally
/// created transport, while a caller-supplied one is left alone.
#[derive(Clone, Debug)]
pub struct KimolaClient {
    pub(crate) http: KimolaHttp,
}

impl KimolaClient {
    /// Client with the default base URL and an internally managed transport.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> KimolaClientBuilder {
        KimolaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn presets(&self) -> Presets<'_> {
        Presets { client: self }
    }

    pub fn queries(&self) -> Queries<'_> {
        Queries { client: self }
    }

    pub fn subscription(&self) -> Subscription<'_> {
        Subscription { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct KimolaClientBuilder {
    api_key: String,
    base_url: String,
    http_client: Option<reqwest::Client>,
}

impl Default for KimolaClientBuilder {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            http_client: None,
        }
    }
}

impl KimolaClientBuilder {
    /// API key sent as `Authorization: Bearer <apiKey>` on every request.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = key.to_string();
        self
    }

    /// Override the base URL. Trailing slashes are normalized away.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use a caller-supplied transport (e.g. a shared connection pool).
    /// The SDK never closes a supplied client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Fails with a validation error when the API key is empty or
    /// whitespace. No network activity happens here.
    pub fn build(self) -> Result<KimolaClient, SdkError> {
        if self.api_key.trim().is_empty() {
            return Err(SdkError::Validation("an API key is required".into()));
        }

        let http = KimolaHttp::new(&self.base_url, &self.api_key, self.http_client)?;
        Ok(KimolaClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_empty_api_key() {
        let err = KimolaClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_build_rejects_whitespace_api_key() {
        let err = KimolaClient::builder().api_key("   ").build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_new_accepts_nonempty_key() {
        assert!(KimolaClient::new("test-api-key").is_ok());
    }
}
