//! # Catalog Search Task

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::SelectEvent;
use crate::core::service::CatalogSearch;
use crate::debug::spawn_tracked;
use crate::search::CatalogRequest;

/// Run one catalog search and report it tagged with its sequence number.
///
/// Staleness is decided when the result is applied, not here.
pub(crate) fn spawn_catalog_search(
    catalog: Arc<dyn CatalogSearch>,
    request: CatalogRequest,
    event_tx: Sender<SelectEvent>,
) {
    tracing::debug!(
        seq = request.seq,
        query = %request.query,
        chain_id = request.chain_id,
        "Issuing catalog search"
    );

    spawn_tracked("catalog_search", async move {
        let result = catalog
            .search(&request.query, request.chain_id)
            .await
            .map_err(|e| e.to_string());

        let event = SelectEvent::CatalogResult {
            seq: request.seq,
            result,
        };
        if let Err(e) = event_tx.send(event).await {
            tracing::debug!(seq = request.seq, error = %e, "Session closed before catalog result arrived");
        }
    });
}
