//! # Search Handlers
//!
//! Query input, debounce settling, network context and catalog (re)issuance.

use tokio::time::Instant;

use crate::app::{handlers, tasks, CurrencySelect, Role};

/// Record a raw query edit.
///
/// Clearing the query after the favorite queue changed during the search
/// flushes the queue.
pub(crate) fn set_search_query(app: &CurrencySelect, query: &str) {
    let flush = {
        let mut state = app.state.write();
        let was_searching = state.is_searching();
        state.search.input(query, Instant::now());
        was_searching && query.is_empty() && state.favorites.take_search_deferred()
    };

    if flush {
        tracing::debug!("Query cleared after favorites changed during search");
        handlers::favorites::start_flush(app);
    }
}

/// Apply the debounced query once the quiet interval has passed.
pub(crate) fn poll_debounce(app: &CurrencySelect, now: Instant) {
    let request = {
        let mut state = app.state.write();
        let Some(query) = state.search.poll(now) else {
            return;
        };
        state.search_generation += 1;
        tracing::debug!(
            query = %query,
            generation = state.search_generation,
            role = state.role().as_str(),
            "Search query settled"
        );

        if state.role() == Role::Output {
            let chain_id = state.active_chain_id;
            Some(state.catalog.issue(&query, chain_id))
        } else {
            None
        }
    };

    if let Some(request) = request {
        tasks::search::spawn_catalog_search(app.services.catalog.clone(), request, app.event_tx.clone());
    }
}

/// Issue a catalog search for the current debounced query and chain.
///
/// No-op for the input role.
pub(crate) fn refresh_catalog(app: &CurrencySelect) {
    let request = {
        let mut state = app.state.write();
        if state.role() != Role::Output {
            return;
        }
        let query = state.debounced_query().to_string();
        let chain_id = state.active_chain_id;
        state.catalog.issue(&query, chain_id)
    };

    tasks::search::spawn_catalog_search(app.services.catalog.clone(), request, app.event_tx.clone());
}

/// Switch the browsed network.
pub(crate) fn set_active_chain(app: &CurrencySelect, chain_id: u64) {
    {
        let mut state = app.state.write();
        if state.active_chain_id == chain_id {
            return;
        }
        tracing::info!(from = state.active_chain_id, to = chain_id, "Active chain changed");
        state.active_chain_id = chain_id;
    }

    refresh_catalog(app);
}
