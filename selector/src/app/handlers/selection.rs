//! # Selection Handlers
//!
//! Item activation through the guard chain, interruption answers, and the
//! finalize step that hands the asset to the swap composer.

use std::fmt;
use std::sync::Arc;

use async_channel::Sender;
use serde_json::{Map, Value};
use shared::Asset;

use crate::app::events::SelectEvent;
use crate::app::{tasks, CurrencySelect, Role, SessionParams};
use crate::core::error::{AppError, Result};
use crate::core::navigation::{NavigationParams, Route};
use crate::core::service::{AnalyticsEvent, Navigator};
use crate::debug::TraceGuard;
use crate::guard::{GuardChain, GuardContext, GuardStep};
use crate::{trace_debug, trace_info, trace_warn};

/// Leaves the selection screen once the composer has applied the asset.
///
/// Handed to [`crate::core::service::SwapHost::on_select_currency`] together
/// with the fully resolved asset. Runs at most once.
pub struct NavigateContinuation {
    navigator: Arc<dyn Navigator>,
    event_tx: Sender<SelectEvent>,
    role: Role,
    from_discover: bool,
    default_input_asset: Option<Asset>,
    default_output_asset: Option<Asset>,
    params: Map<String, Value>,
    asset: Asset,
}

impl NavigateContinuation {
    pub(crate) fn new(
        navigator: Arc<dyn Navigator>,
        event_tx: Sender<SelectEvent>,
        params: &SessionParams,
        asset: Asset,
    ) -> Self {
        Self {
            navigator,
            event_tx,
            role: params.role,
            from_discover: params.from_discover,
            default_input_asset: params.default_input_asset.clone(),
            default_output_asset: params.default_output_asset.clone(),
            params: params.params.clone(),
            asset,
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn run(self) {
        if self.from_discover {
            let (input_asset, output_asset) = match self.role {
                Role::Input => (Some(self.asset.clone()), self.default_output_asset),
                Role::Output => (self.default_input_asset, Some(self.asset.clone())),
            };
            self.navigator.go_back();
            self.navigator.navigate(
                Route::ExchangeModal,
                NavigationParams::Exchange {
                    input_asset,
                    output_asset,
                    params: self.params,
                },
            );
        } else {
            self.navigator.navigate(Route::MainExchangeScreen, NavigationParams::None);
        }

        let chain_id = self.asset.network.chain_id();
        if let Err(e) = self.event_tx.try_send(SelectEvent::Navigated { chain_id }) {
            tracing::debug!(error = %e, "Session closed before navigation was reported");
        }
    }
}

impl fmt::Debug for NavigateContinuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateContinuation")
            .field("role", &self.role)
            .field("from_discover", &self.from_discover)
            .field("asset", &self.asset.id)
            .finish()
    }
}

/// Activate a list item.
pub(crate) fn select_asset(app: &CurrencySelect, asset: Asset) -> Result<GuardStep> {
    let (role, active_chain_id) = {
        let state = app.state.read();
        if state.has_pending_guard() {
            return Err(AppError::State(
                "a selection is already awaiting confirmation".to_string(),
            ));
        }
        (state.role(), state.active_chain_id)
    };

    let _trace = TraceGuard::new();
    trace_info!(
        asset = %asset.id,
        role = role.as_str(),
        chain_id = active_chain_id,
        "Asset activated"
    );

    let wallet_assets = app.services.wallet.assets();
    let counterpart = match role {
        Role::Input => app.services.host.output_currency(),
        Role::Output => app.services.host.input_currency(),
    };
    let ctx = GuardContext {
        role,
        active_chain_id,
        primary_chain_id: app.config.primary_chain_id,
        wallet_assets: &wallet_assets,
        counterpart: counterpart.as_ref(),
        warning_acknowledged: app.services.warnings.get(),
    };

    let mut chain = GuardChain::new(asset);
    let step = chain.start(&ctx);
    match &step {
        GuardStep::Interrupted(sheet) => {
            trace_info!(sheet = sheet.kind(), state = ?chain.state(), "Selection interrupted");
            app.state.write().guard = Some(chain);
            app.services.navigator.present_sheet(sheet.clone());
        }
        GuardStep::Finalize(resolved) => {
            finalize(app, resolved.clone());
            chain.complete();
        }
        _ => {}
    }

    Ok(step)
}

/// The user acknowledged the sheet of the pending chain.
pub(crate) fn acknowledge_interruption(app: &CurrencySelect) -> GuardStep {
    let Some(mut chain) = app.state.write().guard.take() else {
        return GuardStep::Ignored;
    };

    let step = chain.acknowledge();
    match &step {
        GuardStep::Escape => {
            trace_info!(url = %app.config.bridge_url, "Leaving selection for the bridge");
            if let Err(e) = app.services.url_opener.open(&app.config.bridge_url) {
                trace_warn!(error = %e, "Failed to open bridge link");
            }
        }
        GuardStep::Finalize(resolved) => {
            if let Err(e) = app.services.warnings.set() {
                trace_warn!(error = %e, "Failed to persist network warning flag");
            }
            finalize(app, resolved.clone());
            chain.complete();
        }
        GuardStep::Abandoned => {
            trace_debug!("Pending selection abandoned on acknowledgment");
        }
        _ => {}
    }

    step
}

/// The user closed the sheet of the pending chain without acknowledging.
pub(crate) fn dismiss_interruption(app: &CurrencySelect) -> GuardStep {
    let Some(mut chain) = app.state.write().guard.take() else {
        return GuardStep::Ignored;
    };

    let step = chain.dismiss();
    trace_info!(asset = %chain.candidate().id, "Pending selection dismissed");
    step
}

/// Hand the resolved asset to the composer and leave the screen.
fn finalize(app: &CurrencySelect, asset: Asset) {
    tasks::explorer::spawn_prefetch(app.services.explorer.clone(), asset.lookup_address().to_string());

    let (continuation, role, query) = {
        let mut state = app.state.write();
        state.visibility.begin_transition();
        let continuation = NavigateContinuation::new(
            app.services.navigator.clone(),
            app.event_tx.clone(),
            &state.params,
            asset.clone(),
        );
        (continuation, state.role(), state.debounced_query().to_string())
    };

    trace_info!(asset = %asset.id, role = role.as_str(), "Finalizing selection");
    app.services.host.selection_callback();
    app.services.host.on_select_currency(asset.clone(), continuation);

    if !query.is_empty() {
        app.services.analytics.track(
            AnalyticsEvent::new("Selected a search result in Swap")
                .with("name", asset.name.clone())
                .with("searchQueryForSearch", query)
                .with("symbol", asset.symbol.clone())
                .with("tokenAddress", asset.address.clone())
                .with("type", role.as_str()),
        );
    }
}
