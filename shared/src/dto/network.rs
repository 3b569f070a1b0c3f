//! # Networks
//!
//! EVM networks an asset can live on, with chain id mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain id of the primary (mainnet) network.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Network an asset is deployed on.
///
/// Serializes to its lowercase wire name (`"mainnet"`, `"polygon"`, ...), which is
/// also the key format of [`crate::Asset::implementations`] (see [`Network::from_name`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Optimism,
    Bsc,
    Polygon,
    Arbitrum,
}

impl Network {
    /// All supported networks, primary first.
    pub fn all() -> &'static [Network] {
        &[
            Network::Mainnet,
            Network::Optimism,
            Network::Bsc,
            Network::Polygon,
            Network::Arbitrum,
        ]
    }

    /// EIP-155 chain id
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => MAINNET_CHAIN_ID,
            Network::Optimism => 10,
            Network::Bsc => 56,
            Network::Polygon => 137,
            Network::Arbitrum => 42161,
        }
    }

    /// Resolve a chain id, `None` for chains this wallet does not support.
    pub fn from_chain_id(chain_id: u64) -> Option<Network> {
        Network::all()
            .iter()
            .copied()
            .find(|network| network.chain_id() == chain_id)
    }

    /// Resolve a lowercase wire name, `None` for networks this wallet does not support.
    pub fn from_name(name: &str) -> Option<Network> {
        Network::all()
            .iter()
            .copied()
            .find(|network| network.name() == name)
    }

    /// Lowercase wire name, as wallet assets report it.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Optimism => "optimism",
            Network::Bsc => "bsc",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
        }
    }

    /// Human readable name for explainer sheets.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum",
            Network::Optimism => "Optimism",
            Network::Bsc => "BSC",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
