//! # Catalog Client
//!
//! [`CatalogSearch`] over the catalog's HTTP API.

use async_trait::async_trait;
use reqwest::Client;
use shared::Section;

use crate::core::error::Result;
use crate::core::service::CatalogSearch;

/// Request timeout for catalog calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the token catalog.
///
/// Holds a pooled `reqwest::Client`; wrap in `Arc` and share across sessions.
pub struct CatalogClient {
    pub(crate) client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the catalog at `base_url`, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSearch for CatalogClient {
    async fn search(&self, query: &str, chain_id: u64) -> Result<Vec<Section>> {
        super::search::search_tokens(self, query, chain_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://127.0.0.1:3001/");
        assert_eq!(client.base_url(), "http://127.0.0.1:3001");
    }
}
