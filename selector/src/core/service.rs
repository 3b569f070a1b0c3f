//! # Service Traits
//!
//! Traits for dependency injection. Every external collaborator of the
//! selection engine sits behind one of these, so sessions can run against the
//! real wallet, catalog and navigator, or against the in-memory doubles in
//! [`crate::services::memory`].

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use shared::{Asset, Section};

use crate::app::NavigateContinuation;
use crate::core::error::Result;
use crate::core::navigation::{ExplainSheet, NavigationParams, Route};

/// Wallet holdings snapshot.
pub trait WalletSource: Send + Sync {
    /// Assets currently held, in display order
    fn assets(&self) -> Vec<Asset>;

    /// Whether the user hid this asset from lists
    fn is_hidden(&self, id: &str) -> bool;
}

/// Remote token catalog search.
///
/// Ranking and section layout are the catalog's business; the engine only
/// deduplicates what comes back.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    async fn search(&self, query: &str, chain_id: u64) -> Result<Vec<Section>>;
}

/// Favorite list persistence.
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// Mark every address in `addresses` as favorite (`true`) or not (`false`).
    async fn update_favorites(&self, addresses: &[String], is_favorite: bool) -> Result<()>;
}

/// Chart and detail prefetching for a selected asset.
#[async_trait]
pub trait ExplorerService: Send + Sync {
    async fn request_charts(&self, address: &str) -> Result<()>;
    async fn request_asset(&self, address: &str) -> Result<()>;
}

/// Navigation layer.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route, params: NavigationParams);
    fn go_back(&self);
    /// Present an explainer/confirmation sheet on top of the current screen.
    fn present_sheet(&self, sheet: ExplainSheet);
    fn active_route(&self) -> Option<Route>;
}

/// One-shot persisted flag: "cross-network selection already acknowledged".
pub trait WarningStore: Send + Sync {
    fn get(&self) -> bool;
    fn set(&self) -> Result<()>;
}

/// Opens external links (bridge call-to-action).
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Fire-and-forget analytics record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// The swap composer that opened the selection session.
pub trait SwapHost: Send + Sync {
    /// Currently selected input leg
    fn input_currency(&self) -> Option<Asset>;

    /// Currently selected output leg
    fn output_currency(&self) -> Option<Asset>;

    /// Apply the selection, then run `then` to leave the selection screen.
    fn on_select_currency(&self, asset: Asset, then: NavigateContinuation);

    /// Optional hook invoked right before `on_select_currency`.
    fn selection_callback(&self) {}

    /// Hand keyboard focus back to the swap composer.
    fn restore_focus(&self) {}

    /// Gesture lock on the composer beneath the selection screen.
    fn set_gesture_enabled(&self, enabled: bool);
}
