//! # Token Search Endpoint

use serde::{Deserialize, Serialize};
use shared::Section;

use super::client::CatalogClient;
use crate::core::error::{AppError, Result};

/// Body of `GET /api/tokens/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Search the catalog for `query` on `chain_id`.
#[tracing::instrument(skip(client), fields(query = %query, chain_id = chain_id))]
pub async fn search_tokens(client: &CatalogClient, query: &str, chain_id: u64) -> Result<Vec<Section>> {
    let start = std::time::Instant::now();
    let url = format!("{}/api/tokens/search", client.base_url());
    let chain_param = chain_id.to_string();

    tracing::debug!("Searching catalog");

    let response = client
        .client
        .get(&url)
        .query(&[("query", query), ("chain_id", chain_param.as_str())])
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Catalog search network error");
            AppError::Api(format!("Network error: {}", e))
        })?;

    let duration = start.elapsed();

    if response.status().is_success() {
        let body = response.json::<SearchResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Catalog response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!(
            duration_ms = duration.as_millis(),
            section_count = body.sections.len(),
            "Catalog search completed"
        );
        Ok(body.sections)
    } else {
        let status = response.status();
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Catalog search failed"
        );
        Err(AppError::Api(format!("Catalog search failed: {}", status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decoding() {
        let body = r#"{
            "sections": [
                {
                    "title": "Favorites",
                    "data": [
                        {"id": "usdc", "address": "0xa0b8", "symbol": "USDC", "name": "USD Coin", "network": "mainnet"}
                    ]
                },
                {"data": []}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.sections.len(), 2);
        assert_eq!(response.sections[0].title, "Favorites");
        assert_eq!(response.sections[0].data[0].symbol, "USDC");
        assert_eq!(response.sections[1].title, "");
    }

    #[test]
    fn test_unknown_implementation_network_keeps_section() {
        let body = r#"{
            "sections": [
                {
                    "title": "Tokens",
                    "data": [
                        {
                            "uniqueId": "usdc",
                            "address": "0xa0b8",
                            "symbol": "USDC",
                            "name": "USD Coin",
                            "network": "mainnet",
                            "implementations": {
                                "mainnet": {"address": "0xa0b8", "decimals": 6},
                                "gnosis": {"address": "0xddaf"}
                            }
                        },
                        {"uniqueId": "dai", "address": "0x6b17", "symbol": "DAI", "name": "Dai", "network": "mainnet"}
                    ]
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let data = &response.sections[0].data;
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].id, "usdc");
        assert_eq!(data[0].implementation_networks(), Some(vec![shared::Network::Mainnet]));
        assert_eq!(data[1].id, "dai");
    }

    #[test]
    fn test_missing_sections_decodes_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.sections.is_empty());
    }
}
