//! # Session State Types
//!
//! State of one currency selection session: role, chain context, search,
//! catalog results, favorite queue, visibility and the pending guard chain.

use serde::Serialize;
use serde_json::{Map, Value};
use shared::{Asset, Section};

use crate::config::SelectConfig;
use crate::favorites::FavoriteQueue;
use crate::guard::GuardChain;
use crate::search::{CatalogRequests, Debouncer};
use crate::visibility::Visibility;

/// Which leg of the trade is being chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Asset being sold, picked from wallet holdings
    Input,
    /// Asset being bought, picked from the catalog
    Output,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Input => "input",
            Role::Output => "output",
        }
    }

    /// The other leg
    pub fn counterpart(&self) -> Role {
        match self {
            Role::Input => Role::Output,
            Role::Output => Role::Input,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Role::Input),
            "output" => Ok(Role::Output),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Entry parameters of a selection session
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub role: Role,
    /// Input leg to keep when entering from discovery
    pub default_input_asset: Option<Asset>,
    /// Output leg to keep when entering from discovery
    pub default_output_asset: Option<Asset>,
    /// Chain the session opens on
    pub chain_id: u64,
    /// Opened from a content-discovery context rather than the swap composer
    pub from_discover: bool,
    /// Opaque parameters forwarded to the exchange on discovery navigation
    pub params: Map<String, Value>,
}

impl SessionParams {
    pub fn new(role: Role, chain_id: u64) -> Self {
        Self {
            role,
            default_input_asset: None,
            default_output_asset: None,
            chain_id,
            from_discover: false,
            params: Map::new(),
        }
    }
}

/// Per-item rendering hints for the list widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemProps {
    pub show_balance: bool,
    pub show_favorite_button: bool,
}

/// Computed list handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyList {
    pub sections: Vec<Section>,
    pub loading: bool,
    /// Query the sections were computed for
    pub query: String,
}

impl CurrencyList {
    pub fn asset_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.data.iter().map(|asset| asset.id.as_str()))
            .collect()
    }
}

/// Mutable state of one session.
#[derive(Debug)]
pub struct SessionState {
    pub params: SessionParams,
    /// Chain the session was opened on
    pub original_chain_id: u64,
    /// Chain currently browsed (network switcher)
    pub active_chain_id: u64,
    pub search: Debouncer,
    /// Bumped every time the debounced query settles
    pub search_generation: u64,
    pub catalog: CatalogRequests,
    pub favorites: FavoriteQueue,
    pub visibility: Visibility,
    /// Guard chain waiting on the user, if any
    pub guard: Option<GuardChain>,
}

impl SessionState {
    pub fn new(params: SessionParams, config: &SelectConfig) -> Self {
        let settle_delay = (!params.from_discover).then_some(config.settle_delay);
        Self {
            original_chain_id: params.chain_id,
            active_chain_id: params.chain_id,
            params,
            search: Debouncer::new(config.debounce),
            search_generation: 0,
            catalog: CatalogRequests::new(),
            favorites: FavoriteQueue::new(),
            visibility: Visibility::new(settle_delay),
            guard: None,
        }
    }

    pub fn role(&self) -> Role {
        self.params.role
    }

    pub fn raw_query(&self) -> &str {
        self.search.value()
    }

    pub fn debounced_query(&self) -> &str {
        self.search.settled()
    }

    /// A non-empty query is typed
    pub fn is_searching(&self) -> bool {
        !self.search.value().is_empty()
    }

    pub fn has_pending_guard(&self) -> bool {
        self.guard
            .as_ref()
            .map(|chain| chain.state().is_interrupted())
            .unwrap_or(false)
    }
}
