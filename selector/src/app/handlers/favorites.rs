//! # Favorite Handlers

use shared::{truncate_address, Asset};

use crate::app::{tasks, CurrencySelect};
use crate::core::service::AnalyticsEvent;

/// Queue a favorite toggle and report it to analytics.
pub(crate) fn toggle_favorite(app: &CurrencySelect, asset: &Asset, is_favorited: bool) {
    let role = {
        let mut state = app.state.write();
        let searching = state.is_searching();
        state.favorites.record_intent(&asset.address, is_favorited, searching);
        tracing::debug!(
            address = %truncate_address(&asset.address),
            is_favorited,
            pending = state.favorites.len(),
            "Favorite intent recorded"
        );
        state.role()
    };

    app.services.analytics.track(
        AnalyticsEvent::new("Toggled an asset as Favorited")
            .with("isFavorited", is_favorited)
            .with("name", asset.name.clone())
            .with("symbol", asset.symbol.clone())
            .with("tokenAddress", asset.address.clone())
            .with("type", role.as_str()),
    );
}

/// Start a flush if nothing is in flight and there is something to commit.
pub(crate) fn start_flush(app: &CurrencySelect) {
    let batch = app.state.write().favorites.begin_flush();
    if let Some(batch) = batch {
        tracing::info!(add = batch.add.len(), remove = batch.remove.len(), "Flushing favorites");
        tasks::favorites::spawn_flush(app.services.favorites.clone(), batch, app.event_tx.clone());
    }
}

/// A flush completed; start the next one if it was requested meanwhile.
pub(crate) fn handle_flushed(app: &CurrencySelect, added: usize, removed: usize) {
    let next = app.state.write().favorites.finish_flush();
    tracing::debug!(added, removed, "Favorite flush finished");

    if let Some(batch) = next {
        tracing::info!(add = batch.add.len(), remove = batch.remove.len(), "Flushing deferred favorites");
        tasks::favorites::spawn_flush(app.services.favorites.clone(), batch, app.event_tx.clone());
    }
}
