//! # Enrichment Prefetch Task

use std::sync::Arc;

use shared::truncate_address;

use crate::core::service::ExplorerService;
use crate::debug::spawn_tracked;

/// Fire-and-forget chart and detail prefetch for a selected asset.
pub(crate) fn spawn_prefetch(explorer: Arc<dyn ExplorerService>, address: String) {
    spawn_tracked("asset_prefetch", async move {
        let (charts, detail) = futures::join!(
            explorer.request_charts(&address),
            explorer.request_asset(&address)
        );

        if let Err(e) = charts {
            tracing::warn!(address = %truncate_address(&address), error = %e, "Chart prefetch failed");
        }
        if let Err(e) = detail {
            tracing::warn!(address = %truncate_address(&address), error = %e, "Asset detail prefetch failed");
        }
    });
}
