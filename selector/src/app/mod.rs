//! # Selection Session Orchestrator
//!
//! [`CurrencySelect`] drives one currency selection session, coordinating the
//! search pipeline, the favorite queue, the guard chain and visibility state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Driving task (host)                     │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  CurrencySelect                                    │  │
//! │  │  - on_tick() / process_next_event()                │  │
//! │  │  - set_search_query(), toggle_favorite()           │  │
//! │  │  - select_asset(), acknowledge/dismiss             │  │
//! │  └─────────────┬──────────────────────────────────────┘  │
//! │                │                                         │
//! │  ┌─────────────▼──────────────────────────────────────┐  │
//! │  │  State: Arc<RwLock<SessionState>>                  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └────────────────────────┬─────────────────────────────────┘
//!                          │ async_channel (unbounded)
//! ┌────────────────────────▼─────────────────────────────────┐
//! │                 Spawned tasks (Tokio)                    │
//! │  - catalog search          -> SelectEvent::CatalogResult │
//! │  - favorite flush          -> SelectEvent::FavoritesFlushed
//! │  - chart/detail prefetch   (fire-and-forget)             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Time-based transitions (debounce, settle delay) are applied by `on_tick()`,
//! so a host either ticks periodically or sleeps until [`CurrencySelect::next_deadline`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use selector::app::{CurrencySelect, Role, SessionParams};
//! # fn services() -> selector::app::SelectServices { unimplemented!() }
//!
//! # async fn run() {
//! let params = SessionParams::new(Role::Output, 1);
//! let session = CurrencySelect::new(params, services(), Default::default());
//!
//! session.set_search_query("usdc");
//! tokio::time::sleep(std::time::Duration::from_millis(350)).await;
//! session.on_tick();
//!
//! let list = session.currency_list();
//! # }
//! ```

mod events;
mod handlers;
mod state;
mod tasks;


pub use events::SelectEvent;
pub use handlers::selection::NavigateContinuation;
pub use state::*;
pub use tasks::favorites::{run_flush, FlushReport};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::Asset;
use tokio::time::Instant;

use crate::config::SelectConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{
    AnalyticsSink, CatalogSearch, ExplorerService, FavoritesService, Navigator, SwapHost,
    UrlOpener, WalletSource, WarningStore,
};
use crate::guard::GuardStep;
use crate::merge::merge_sections;
use crate::search::{eligible_wallet_assets, filter_wallet_assets};

/// External collaborators of a session.
#[derive(Clone)]
pub struct SelectServices {
    pub wallet: Arc<dyn WalletSource>,
    pub catalog: Arc<dyn CatalogSearch>,
    pub favorites: Arc<dyn FavoritesService>,
    pub explorer: Arc<dyn ExplorerService>,
    pub navigator: Arc<dyn Navigator>,
    pub warnings: Arc<dyn WarningStore>,
    pub analytics: Arc<dyn AnalyticsSink>,
    pub url_opener: Arc<dyn UrlOpener>,
    pub host: Arc<dyn SwapHost>,
}

/// One currency selection session.
///
/// Created when the selection screen opens and dropped when it closes.
/// All methods are meant to be called from the single task driving the session.
pub struct CurrencySelect {
    /// Session state. Hold locks briefly.
    pub state: Arc<RwLock<SessionState>>,
    pub(crate) services: SelectServices,
    pub(crate) config: SelectConfig,
    pub(crate) event_tx: Sender<SelectEvent>,
    event_rx: Receiver<SelectEvent>,
}

impl CurrencySelect {
    /// Open a session.
    ///
    /// Output sessions issue their first catalog search right away, so this must
    /// be called within a Tokio runtime.
    pub fn new(params: SessionParams, services: SelectServices, config: SelectConfig) -> Self {
        tracing::info!(
            role = params.role.as_str(),
            chain_id = params.chain_id,
            from_discover = params.from_discover,
            "Opening currency selection"
        );

        let state = SessionState::new(params, &config);
        let (event_tx, event_rx) = unbounded();

        let session = Self {
            state: Arc::new(RwLock::new(state)),
            services,
            config,
            event_tx,
            event_rx,
        };

        handlers::search::refresh_catalog(&session);
        session
    }

    pub fn role(&self) -> Role {
        self.state.read().role()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Raw query edit from the search field.
    pub fn set_search_query(&self, query: &str) {
        handlers::search::set_search_query(self, query);
    }

    /// Apply pending async results and elapsed timers.
    pub fn on_tick(&self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed session events");
        }

        let now = Instant::now();
        handlers::search::poll_debounce(self, now);
        handlers::focus::poll_settle(self, now);
    }

    /// Wait for the next async result and apply it.
    ///
    /// Returns `false` without waiting when no event is queued and neither a
    /// catalog search nor a favorite flush is in flight.
    pub async fn process_next_event(&self) -> bool {
        let event = match self.event_rx.try_recv() {
            Ok(event) => event,
            Err(_) if !self.has_outstanding_work() => return false,
            Err(_) => match self.event_rx.recv().await {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "Session event channel closed");
                    return false;
                }
            },
        };
        self.handle_event(event);
        true
    }

    fn has_outstanding_work(&self) -> bool {
        let state = self.state.read();
        state.catalog.is_loading() || state.favorites.is_flushing()
    }

    /// Earliest pending debounce or settle deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        let state = self.state.read();
        match (state.search.deadline(), state.visibility.settle_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn handle_event(&self, event: SelectEvent) {
        match event {
            SelectEvent::CatalogResult { seq, result } => {
                self.state.write().catalog.accept(seq, result.map_err(AppError::Api));
            }
            SelectEvent::FavoritesFlushed { added, removed } => {
                handlers::favorites::handle_flushed(self, added, removed);
            }
            SelectEvent::Navigated { chain_id } => {
                tracing::debug!(chain_id, "Selection screen left");
                handlers::search::set_search_query(self, "");
                handlers::search::set_active_chain(self, chain_id);
            }
        }
    }

    /// The list to render for the current debounced query.
    pub fn currency_list(&self) -> CurrencyList {
        let (role, query, from_discover, default_output, catalog_sections, loading) = {
            let state = self.state.read();
            (
                state.role(),
                state.debounced_query().to_string(),
                state.params.from_discover,
                state.params.default_output_asset.clone(),
                state.catalog.sections().to_vec(),
                state.catalog.is_loading(),
            )
        };

        let sections = match role {
            Role::Input => {
                let wallet = self.services.wallet.as_ref();
                let eligible = eligible_wallet_assets(
                    wallet.assets(),
                    |id| wallet.is_hidden(id),
                    from_discover,
                    default_output.as_ref(),
                );
                shared::Section::headerless(filter_wallet_assets(&eligible, &query))
            }
            Role::Output => catalog_sections,
        };

        let symbol_pass = role == Role::Output && self.config.dedup_by_symbol;
        CurrencyList {
            sections: merge_sections(sections, symbol_pass),
            loading: role == Role::Output && loading,
            query,
        }
    }

    pub fn item_props(&self) -> ItemProps {
        let state = self.state.read();
        let role = state.role();
        ItemProps {
            show_balance: role == Role::Input,
            show_favorite_button: role == Role::Output
                && self.config.is_primary_chain(state.active_chain_id),
        }
    }

    /// Queue a favorite toggle for `asset`.
    pub fn toggle_favorite(&self, asset: &Asset, is_favorited: bool) {
        handlers::favorites::toggle_favorite(self, asset, is_favorited);
    }

    /// Activate a list item. Runs the guard chain and finalizes if nothing interrupts.
    pub fn select_asset(&self, asset: Asset) -> Result<GuardStep> {
        handlers::selection::select_asset(self, asset)
    }

    pub fn acknowledge_interruption(&self) -> GuardStep {
        handlers::selection::acknowledge_interruption(self)
    }

    pub fn dismiss_interruption(&self) -> GuardStep {
        handlers::selection::dismiss_interruption(self)
    }

    pub fn set_focused(&self, focused: bool) {
        handlers::focus::set_focused(self, focused);
    }

    pub fn handle_back_button(&self) {
        handlers::focus::handle_back_button(self);
    }

    /// Network switcher.
    pub fn set_active_chain(&self, chain_id: u64) {
        handlers::search::set_active_chain(self, chain_id);
    }

    pub fn is_list_visible(&self) -> bool {
        handlers::focus::is_list_visible(self)
    }

    /// Number of times the debounced query has settled.
    pub fn search_generation(&self) -> u64 {
        self.state.read().search_generation
    }

    /// Close the session, flushing any favorite intents still queued.
    pub fn close(&self) {
        tracing::info!(pending_favorites = self.state.read().favorites.len(), "Closing currency selection");
        handlers::favorites::start_flush(self);
    }
}
