//! # Asset DTOs
//!
//! Swappable assets as reported by the wallet and by the token catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::network::Network;

/// Per-network deployment of a multichain asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// Wallet balance of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Raw amount in display units
    pub amount: String,
    /// Formatted amount, e.g. "1.25 ETH"
    pub display: String,
}

/// A tradable asset.
///
/// `id` is the stable unique key used for deduplication (`uniqueId` in catalog
/// payloads); `address` is the token contract address on `network`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(alias = "uniqueId")]
    pub id: String,
    pub address: String,
    /// Mainnet address of a bridged asset, used to key chart/detail requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mainnet_address: Option<String>,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub network: Network,
    /// Asset type tag (e.g. "token")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Deployments keyed by network wire name. Keys are kept as sent, including
    /// networks this wallet does not support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementations: Option<BTreeMap<String, Implementation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Balance>,
}

impl Asset {
    /// Address used to key chart and asset detail lookups.
    pub fn lookup_address(&self) -> &str {
        self.mainnet_address.as_deref().unwrap_or(&self.address)
    }

    /// Copy of this asset tagged with the given type.
    pub fn with_type(&self, asset_type: &str) -> Asset {
        Asset {
            asset_type: Some(asset_type.to_string()),
            ..self.clone()
        }
    }

    /// Supported networks this asset declares implementations on, if any.
    ///
    /// Unknown network keys are skipped.
    pub fn implementation_networks(&self) -> Option<Vec<Network>> {
        self.implementations
            .as_ref()
            .map(|map| map.keys().filter_map(|key| Network::from_name(key)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> Asset {
        Asset {
            id: "usdc_polygon".to_string(),
            address: "0x2791bca1f2de4661ed88a30c99a7a9449aa84174".to_string(),
            mainnet_address: Some("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string()),
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            network: Network::Polygon,
            asset_type: Some("polygon".to_string()),
            implementations: None,
            balance: None,
        }
    }

    #[test]
    fn test_lookup_address_prefers_mainnet() {
        let mut asset = usdc();
        assert_eq!(asset.lookup_address(), "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        asset.mainnet_address = None;
        assert_eq!(asset.lookup_address(), "0x2791bca1f2de4661ed88a30c99a7a9449aa84174");
    }

    #[test]
    fn test_with_type_overlays_only_type() {
        let asset = usdc();
        let tagged = asset.with_type("token");
        assert_eq!(tagged.asset_type.as_deref(), Some("token"));
        assert_eq!(tagged.id, asset.id);
        assert_eq!(tagged.network, asset.network);
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": "dai",
            "address": "0x6b175474e89094c44da98b954eedeac495271d0f",
            "symbol": "DAI",
            "name": "Dai",
            "type": "token",
            "implementations": {
                "mainnet": { "address": "0x6b175474e89094c44da98b954eedeac495271d0f", "decimals": 18 },
                "optimism": { "address": "0xda10009cbd5d07dd0cecc66161fc93d7c9000da1" }
            }
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.network, Network::Mainnet);
        assert_eq!(asset.asset_type.as_deref(), Some("token"));
        assert_eq!(
            asset.implementation_networks(),
            Some(vec![Network::Mainnet, Network::Optimism])
        );
    }

    #[test]
    fn test_deserialize_unique_id_and_unknown_implementation_network() {
        let json = r#"{
            "uniqueId": "usdc",
            "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "symbol": "USDC",
            "name": "USD Coin",
            "network": "mainnet",
            "implementations": {
                "gnosis": { "address": "0xddafbb505ad214d7b80b1f830fccc89b60fb7a83" },
                "polygon": { "address": "0x2791bca1f2de4661ed88a30c99a7a9449aa84174" }
            }
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "usdc");
        assert_eq!(asset.implementations.as_ref().map(|map| map.len()), Some(2));
        assert_eq!(asset.implementation_networks(), Some(vec![Network::Polygon]));
    }
}
