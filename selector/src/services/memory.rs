//! # In-Memory Services
//!
//! Service implementations that keep everything in process. The demo binary
//! runs on them, and tests use the recording variants to observe what a
//! session did.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared::{Asset, Section};

use crate::app::{NavigateContinuation, Role};
use crate::core::error::{AppError, Result};
use crate::core::navigation::{ExplainSheet, NavigationParams, Route};
use crate::core::service::{
    AnalyticsEvent, AnalyticsSink, CatalogSearch, ExplorerService, FavoritesService, Navigator,
    SwapHost, UrlOpener, WalletSource, WarningStore,
};

/// Wallet holdings held in memory.
#[derive(Debug, Default)]
pub struct MemoryWallet {
    assets: RwLock<Vec<Asset>>,
    hidden: RwLock<HashSet<String>>,
}

impl MemoryWallet {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets: RwLock::new(assets),
            hidden: RwLock::new(HashSet::new()),
        }
    }

    pub fn hide(&self, id: &str) {
        self.hidden.write().insert(id.to_string());
    }

    pub fn set_assets(&self, assets: Vec<Asset>) {
        *self.assets.write() = assets;
    }
}

impl WalletSource for MemoryWallet {
    fn assets(&self) -> Vec<Asset> {
        self.assets.read().clone()
    }

    fn is_hidden(&self, id: &str) -> bool {
        self.hidden.read().contains(id)
    }
}

/// Catalog over a fixed set of sections.
///
/// A search keeps the assets whose symbol or name contains the query
/// (case-insensitive) and whose network matches the chain. Per-query delays
/// let tests resolve requests out of order.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    sections: RwLock<Vec<Section>>,
    delays: RwLock<HashMap<String, Duration>>,
    failing: AtomicBool,
    requests: Mutex<Vec<(String, u64)>>,
}

impl MemoryCatalog {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections: RwLock::new(sections),
            ..Default::default()
        }
    }

    /// Delay responses to `query` by `delay`.
    pub fn delay_query(&self, query: &str, delay: Duration) {
        self.delays.write().insert(query.to_string(), delay);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// `(query, chain_id)` of every search received, in order.
    pub fn requests(&self) -> Vec<(String, u64)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CatalogSearch for MemoryCatalog {
    async fn search(&self, query: &str, chain_id: u64) -> Result<Vec<Section>> {
        self.requests.lock().push((query.to_string(), chain_id));

        let delay = self.delays.read().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Api("catalog unavailable".to_string()));
        }

        let needle = query.to_lowercase();
        let sections = self
            .sections
            .read()
            .iter()
            .map(|section| Section {
                title: section.title.clone(),
                data: section
                    .data
                    .iter()
                    .filter(|asset| asset.network.chain_id() == chain_id)
                    .filter(|asset| {
                        needle.is_empty()
                            || asset.symbol.to_lowercase().contains(&needle)
                            || asset.name.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect(),
            })
            .collect();
        Ok(sections)
    }
}

/// Phase of a favorite commit, recorded in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitPhase {
    Started { addresses: Vec<String>, is_favorite: bool },
    Completed { is_favorite: bool },
}

/// Favorite list held in memory.
#[derive(Debug, Default)]
pub struct MemoryFavorites {
    favorites: RwLock<HashSet<String>>,
    log: Mutex<Vec<CommitPhase>>,
    commit_delay: RwLock<Option<Duration>>,
    fail_adds: AtomicBool,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every commit take `delay`.
    pub fn set_commit_delay(&self, delay: Duration) {
        *self.commit_delay.write() = Some(delay);
    }

    pub fn set_fail_adds(&self, fail: bool) {
        self.fail_adds.store(fail, Ordering::SeqCst);
    }

    pub fn is_favorite(&self, address: &str) -> bool {
        self.favorites.read().contains(address)
    }

    pub fn log(&self) -> Vec<CommitPhase> {
        self.log.lock().clone()
    }

    /// Number of `update_favorites` calls received
    pub fn commit_count(&self) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|phase| matches!(phase, CommitPhase::Started { .. }))
            .count()
    }
}

#[async_trait]
impl FavoritesService for MemoryFavorites {
    async fn update_favorites(&self, addresses: &[String], is_favorite: bool) -> Result<()> {
        self.log.lock().push(CommitPhase::Started {
            addresses: addresses.to_vec(),
            is_favorite,
        });

        let delay = *self.commit_delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = if is_favorite && self.fail_adds.load(Ordering::SeqCst) {
            Err(AppError::Api("favorites unavailable".to_string()))
        } else {
            let mut favorites = self.favorites.write();
            for address in addresses {
                if is_favorite {
                    favorites.insert(address.clone());
                } else {
                    favorites.remove(address);
                }
            }
            Ok(())
        };

        self.log.lock().push(CommitPhase::Completed { is_favorite });
        result
    }
}

/// Warning flag held in memory.
#[derive(Debug, Default)]
pub struct MemoryWarningStore {
    shown: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryWarningStore {
    pub fn new(shown: bool) -> Self {
        Self {
            shown: AtomicBool::new(shown),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl WarningStore for MemoryWarningStore {
    fn get(&self) -> bool {
        self.shown.load(Ordering::SeqCst)
    }

    fn set(&self) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.shown.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Navigation call recorded by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationCall {
    Navigate(Route, NavigationParams),
    GoBack,
    PresentSheet(ExplainSheet),
}

/// Navigator that records calls and tracks the active route.
#[derive(Debug)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<NavigationCall>>,
    active: RwLock<Option<Route>>,
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            active: RwLock::new(Some(Route::CurrencySelectScreen)),
        }
    }
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NavigationCall> {
        self.calls.lock().clone()
    }

    pub fn sheets(&self) -> Vec<ExplainSheet> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                NavigationCall::PresentSheet(sheet) => Some(sheet.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn set_active_route(&self, route: Option<Route>) {
        *self.active.write() = route;
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route, params: NavigationParams) {
        *self.active.write() = Some(route);
        self.calls.lock().push(NavigationCall::Navigate(route, params));
    }

    fn go_back(&self) {
        self.calls.lock().push(NavigationCall::GoBack);
    }

    fn present_sheet(&self, sheet: ExplainSheet) {
        *self.active.write() = Some(Route::ExplainSheet);
        self.calls.lock().push(NavigationCall::PresentSheet(sheet));
    }

    fn active_route(&self) -> Option<Route> {
        *self.active.read()
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    pub fn named(&self, name: &str) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.name == name)
            .cloned()
            .collect()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        self.events.lock().push(event);
    }
}

/// Explorer that accepts every prefetch and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExplorer;

#[async_trait]
impl ExplorerService for NoopExplorer {
    async fn request_charts(&self, _address: &str) -> Result<()> {
        Ok(())
    }

    async fn request_asset(&self, _address: &str) -> Result<()> {
        Ok(())
    }
}

/// Explorer that records the addresses it was asked to prefetch.
#[derive(Debug, Default)]
pub struct RecordingExplorer {
    charts: Mutex<Vec<String>>,
    details: Mutex<Vec<String>>,
}

impl RecordingExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart_requests(&self) -> Vec<String> {
        self.charts.lock().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.details.lock().clone()
    }
}

#[async_trait]
impl ExplorerService for RecordingExplorer {
    async fn request_charts(&self, address: &str) -> Result<()> {
        self.charts.lock().push(address.to_string());
        Ok(())
    }

    async fn request_asset(&self, address: &str) -> Result<()> {
        self.details.lock().push(address.to_string());
        Ok(())
    }
}

/// Link opener that records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingUrlOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl UrlOpener for RecordingUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

/// Swap composer stand-in.
///
/// Applies each selection to the matching leg and runs the navigation
/// continuation immediately.
#[derive(Debug, Default)]
pub struct RecordingHost {
    input: RwLock<Option<Asset>>,
    output: RwLock<Option<Asset>>,
    selections: Mutex<Vec<(Role, Asset)>>,
    gestures: Mutex<Vec<bool>>,
    focus_restores: AtomicUsize,
    selection_callbacks: AtomicUsize,
}

impl RecordingHost {
    pub fn new(input: Option<Asset>, output: Option<Asset>) -> Self {
        Self {
            input: RwLock::new(input),
            output: RwLock::new(output),
            ..Default::default()
        }
    }

    pub fn selections(&self) -> Vec<(Role, Asset)> {
        self.selections.lock().clone()
    }

    /// Every `set_gesture_enabled` argument, in order
    pub fn gesture_changes(&self) -> Vec<bool> {
        self.gestures.lock().clone()
    }

    pub fn focus_restores(&self) -> usize {
        self.focus_restores.load(Ordering::SeqCst)
    }

    pub fn selection_callbacks(&self) -> usize {
        self.selection_callbacks.load(Ordering::SeqCst)
    }
}

impl SwapHost for RecordingHost {
    fn input_currency(&self) -> Option<Asset> {
        self.input.read().clone()
    }

    fn output_currency(&self) -> Option<Asset> {
        self.output.read().clone()
    }

    fn on_select_currency(&self, asset: Asset, then: NavigateContinuation) {
        let role = then.role();
        match role {
            Role::Input => *self.input.write() = Some(asset.clone()),
            Role::Output => *self.output.write() = Some(asset.clone()),
        }
        self.selections.lock().push((role, asset));
        then.run();
    }

    fn selection_callback(&self) {
        self.selection_callbacks.fetch_add(1, Ordering::SeqCst);
    }

    fn restore_focus(&self) {
        self.focus_restores.fetch_add(1, Ordering::SeqCst);
    }

    fn set_gesture_enabled(&self, enabled: bool) {
        self.gestures.lock().push(enabled);
    }
}
