//! # Local Wallet Filter
//!
//! Filters the user's wallet holdings for the input leg. No network calls.
//!
//! Two matching modes:
//!
//! - **Address**: a query of exactly 40 hex characters (optional `0x`) matches
//!   only assets whose normalized address equals the normalized query.
//! - **Text**: anything else, including malformed address-like input, is matched
//!   case-insensitively as a substring of `symbol` or `name` and ranked by match
//!   quality. Equal ranks keep wallet order.

use shared::{is_address_like, normalize_address, Asset, Network};

/// Match quality, best last so `Ord` sorts worst-to-best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    Contains,
    WordStartsWith,
    StartsWith,
    Equal,
    CaseSensitiveEqual,
}

/// Rank `value` against `query`, `None` if it does not contain the query at all.
pub fn rank_value(value: &str, query: &str) -> Option<MatchRank> {
    if value == query {
        return Some(MatchRank::CaseSensitiveEqual);
    }

    let value = value.to_lowercase();
    let query = query.to_lowercase();

    if value == query {
        Some(MatchRank::Equal)
    } else if value.starts_with(&query) {
        Some(MatchRank::StartsWith)
    } else if value
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .any(|word| word.starts_with(&query))
    {
        Some(MatchRank::WordStartsWith)
    } else if value.contains(&query) {
        Some(MatchRank::Contains)
    } else {
        None
    }
}

/// Best rank of an asset across its symbol and name.
fn rank_asset(asset: &Asset, query: &str) -> Option<MatchRank> {
    rank_value(&asset.symbol, query).max(rank_value(&asset.name, query))
}

/// Filter wallet assets by `query`.
///
/// An empty query returns the assets unchanged.
pub fn filter_wallet_assets(assets: &[Asset], query: &str) -> Vec<Asset> {
    let query = query.trim();
    if query.is_empty() {
        return assets.to_vec();
    }

    if is_address_like(query) {
        let wanted = normalize_address(query);
        return assets
            .iter()
            .filter(|asset| normalize_address(&asset.address) == wanted)
            .cloned()
            .collect();
    }

    let mut ranked: Vec<(MatchRank, &Asset)> = assets
        .iter()
        .filter_map(|asset| rank_asset(asset, query).map(|rank| (rank, asset)))
        .collect();

    // Stable sort: ties keep wallet order
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, asset)| asset.clone()).collect()
}

/// Wallet assets eligible for the input leg.
///
/// Hidden assets are dropped. When the session was entered from discovery and
/// the desired output asset declares per-network implementations, only assets
/// on one of those networks remain, so the input can settle where the output lives.
pub fn eligible_wallet_assets(
    assets: Vec<Asset>,
    is_hidden: impl Fn(&str) -> bool,
    from_discover: bool,
    default_output: Option<&Asset>,
) -> Vec<Asset> {
    let output_networks: Option<Vec<Network>> = if from_discover {
        default_output.and_then(Asset::implementation_networks)
    } else {
        None
    };

    assets
        .into_iter()
        .filter(|asset| !is_hidden(&asset.id))
        .filter(|asset| match &output_networks {
            Some(networks) => networks.contains(&asset.network),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Implementation;
    use std::collections::BTreeMap;

    fn asset(id: &str, symbol: &str, name: &str, address: &str, network: Network) -> Asset {
        Asset {
            id: id.to_string(),
            address: address.to_string(),
            mainnet_address: None,
            symbol: symbol.to_string(),
            name: name.to_string(),
            network,
            asset_type: None,
            implementations: None,
            balance: None,
        }
    }

    const DEAD: &str = "0x1234567890abcdef1234567890abcdefdeadbeef";

    fn wallet() -> Vec<Asset> {
        vec![
            asset("usdt", "USDT", "Tether USD", "0xdac17f958d2ee523a2206206994597c13d831ec7", Network::Mainnet),
            asset("usdc", "USDC", "USD Coin", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", Network::Mainnet),
            asset("dead", "DEAD", "Dead Beef 0x1234567890abcdef1234567890abcdefdeadbeef", DEAD, Network::Mainnet),
            asset("susd", "sUSD", "Synth sUSD", "0x57ab1ec28d129707052df4df418d58a2d46d5f51", Network::Optimism),
            asset("busd", "BUSD", "Binance USD", "0x4fabb145d64652a948d72533023f6e7a623c7c53", Network::Bsc),
        ]
    }

    fn ids(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_rank_order() {
        assert_eq!(rank_value("USDC", "USDC"), Some(MatchRank::CaseSensitiveEqual));
        assert_eq!(rank_value("USDC", "usdc"), Some(MatchRank::Equal));
        assert_eq!(rank_value("USDC", "us"), Some(MatchRank::StartsWith));
        assert_eq!(rank_value("USD Coin", "coin"), Some(MatchRank::WordStartsWith));
        assert_eq!(rank_value("Tether USD", "sd"), Some(MatchRank::Contains));
        assert_eq!(rank_value("Dai", "eth"), None);
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_wallet_assets(&wallet(), "").len(), 5);
        assert_eq!(filter_wallet_assets(&wallet(), "   ").len(), 5);
    }

    #[test]
    fn test_text_query_ranks_then_keeps_wallet_order() {
        let result = filter_wallet_assets(&wallet(), "usd");
        // USDT/USDC start with the query (wallet order kept), "Binance USD" has a
        // word starting with it, "sUSD" merely contains it
        assert_eq!(ids(&result), vec!["usdt", "usdc", "busd", "susd"]);
    }

    #[test]
    fn test_address_query_matches_exact_address_only() {
        // The "dead" asset's name also contains the address, which must not matter:
        // only the address field is compared.
        let upper = "0x1234567890ABCDEF1234567890ABCDEFDEADBEEF";
        let result = filter_wallet_assets(&wallet(), upper);
        assert_eq!(ids(&result), vec!["dead"]);

        let unprefixed = &DEAD[2..];
        assert_eq!(ids(&filter_wallet_assets(&wallet(), unprefixed)), vec!["dead"]);
    }

    #[test]
    fn test_address_query_never_substring_matches_symbol_or_name() {
        let mut assets = wallet();
        assets.push(asset(
            "imposter",
            "0x1234567890abcdef1234567890abcdefdeadbeef",
            "0x1234567890abcdef1234567890abcdefdeadbeef",
            "0x0000000000000000000000000000000000000001",
            Network::Mainnet,
        ));
        let result = filter_wallet_assets(&assets, DEAD);
        assert_eq!(ids(&result), vec!["dead"]);
    }

    #[test]
    fn test_malformed_address_falls_through_to_text() {
        // Too short for an address: substring match on the name
        let result = filter_wallet_assets(&wallet(), "0x1234");
        assert_eq!(ids(&result), vec!["dead"]);

        let result = filter_wallet_assets(&wallet(), "0xzz");
        assert!(result.is_empty());
    }

    #[test]
    fn test_eligible_wallet_assets_drops_hidden() {
        let result = eligible_wallet_assets(wallet(), |id| id == "busd", false, None);
        assert_eq!(ids(&result), vec!["usdt", "usdc", "dead", "susd"]);
    }

    #[test]
    fn test_eligible_wallet_assets_discovery_restricts_networks() {
        let mut implementations = BTreeMap::new();
        implementations.insert(
            Network::Optimism.name().to_string(),
            Implementation { address: "0x1".to_string(), decimals: None },
        );
        implementations.insert(
            Network::Bsc.name().to_string(),
            Implementation { address: "0x2".to_string(), decimals: None },
        );
        let mut output = asset("out", "OUT", "Output", "0x3", Network::Mainnet);
        output.implementations = Some(implementations);

        let result = eligible_wallet_assets(wallet(), |_| false, true, Some(&output));
        assert_eq!(ids(&result), vec!["susd", "busd"]);

        // Not a discovery session: no restriction
        let result = eligible_wallet_assets(wallet(), |_| false, false, Some(&output));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_eligible_wallet_assets_discovery_without_implementations() {
        let output = asset("out", "OUT", "Output", "0x3", Network::Mainnet);
        let result = eligible_wallet_assets(wallet(), |_| false, true, Some(&output));
        assert_eq!(result.len(), 5);
    }
}
