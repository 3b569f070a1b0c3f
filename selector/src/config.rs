//! Engine configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

use shared::MAINNET_CHAIN_ID;

/// Quiet interval before a typed query is searched.
pub const DEFAULT_DEBOUNCE_MS: u64 = 350;

/// How long the list stays visible after the screen loses focus.
pub const DEFAULT_SETTLE_MS: u64 = 750;

/// Bridge offered when the wallet holds nothing on the target network.
pub const DEFAULT_BRIDGE_URL: &str = "https://app.hop.exchange/#/send";

/// Base URL for the token catalog API
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:3001";

/// Selection engine configuration
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Trailing debounce applied to the search query
    pub debounce: Duration,
    /// Delay after focus loss before the list may hide
    pub settle_delay: Duration,
    /// Chain treated as mainnet for liquidity and type-tagging rules
    pub primary_chain_id: u64,
    /// Second dedup pass keyed by symbol (test/diagnostic environments only)
    pub dedup_by_symbol: bool,
    /// Call-to-action link of the missing-liquidity explainer
    pub bridge_url: String,
    /// Token catalog API base URL
    pub catalog_base_url: String,
    /// File backing the cross-network warning flag
    pub warning_flag_path: PathBuf,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_MS),
            primary_chain_id: MAINNET_CHAIN_ID,
            dedup_by_symbol: false,
            bridge_url: DEFAULT_BRIDGE_URL.to_string(),
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            warning_flag_path: PathBuf::from("data/shown_swap_reset_warning.json"),
        }
    }
}

impl SelectConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            debounce: env_millis("SELECTOR_DEBOUNCE_MS").unwrap_or(defaults.debounce),
            settle_delay: env_millis("SELECTOR_SETTLE_MS").unwrap_or(defaults.settle_delay),
            primary_chain_id: defaults.primary_chain_id,
            dedup_by_symbol: std::env::var("SELECTOR_TESTING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            bridge_url: std::env::var("SELECTOR_BRIDGE_URL").unwrap_or(defaults.bridge_url),
            catalog_base_url: std::env::var("SELECTOR_CATALOG_URL")
                .unwrap_or(defaults.catalog_base_url),
            warning_flag_path: std::env::var("SELECTOR_WARNING_FLAG")
                .map(PathBuf::from)
                .unwrap_or(defaults.warning_flag_path),
        }
    }

    pub fn is_primary_chain(&self, chain_id: u64) -> bool {
        chain_id == self.primary_chain_id
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(350));
        assert_eq!(config.settle_delay, Duration::from_millis(750));
        assert!(config.is_primary_chain(1));
        assert!(!config.is_primary_chain(137));
        assert!(!config.dedup_by_symbol);
    }
}
