//! # Favorite Flush Task
//!
//! Commits one [`FlushBatch`]: adds first, removes only once the add-commit
//! has completed.

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::SelectEvent;
use crate::core::service::FavoritesService;
use crate::debug::spawn_tracked;
use crate::favorites::FlushBatch;

/// Commit results of one flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub added: usize,
    pub removed: usize,
}

/// Commit `batch` against the favorites service.
///
/// Failures are logged and not retried. A failed add-commit does not hold back
/// the remove-commit.
pub async fn run_flush(favorites: &dyn FavoritesService, batch: FlushBatch) -> FlushReport {
    let mut report = FlushReport::default();

    if !batch.add.is_empty() {
        match favorites.update_favorites(&batch.add, true).await {
            Ok(()) => report.added = batch.add.len(),
            Err(e) => tracing::warn!(count = batch.add.len(), error = %e, "Favorite add-commit failed"),
        }
    }

    if !batch.remove.is_empty() {
        match favorites.update_favorites(&batch.remove, false).await {
            Ok(()) => report.removed = batch.remove.len(),
            Err(e) => tracing::warn!(count = batch.remove.len(), error = %e, "Favorite remove-commit failed"),
        }
    }

    tracing::info!(added = report.added, removed = report.removed, "Favorites flushed");
    report
}

pub(crate) fn spawn_flush(
    favorites: Arc<dyn FavoritesService>,
    batch: FlushBatch,
    event_tx: Sender<SelectEvent>,
) {
    spawn_tracked("favorites_flush", async move {
        let report = run_flush(favorites.as_ref(), batch).await;
        let event = SelectEvent::FavoritesFlushed {
            added: report.added,
            removed: report.removed,
        };
        if let Err(e) = event_tx.send(event).await {
            tracing::debug!(error = %e, "Session closed before flush completed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(Vec<String>, bool)>>,
        fail_adds: bool,
    }

    #[async_trait]
    impl FavoritesService for Recorder {
        async fn update_favorites(&self, addresses: &[String], is_favorite: bool) -> Result<()> {
            tokio::task::yield_now().await;
            self.calls.lock().push((addresses.to_vec(), is_favorite));
            if is_favorite && self.fail_adds {
                return Err(AppError::Api("boom".to_string()));
            }
            Ok(())
        }
    }

    fn batch(add: &[&str], remove: &[&str]) -> FlushBatch {
        FlushBatch {
            add: add.iter().map(|s| s.to_string()).collect(),
            remove: remove.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_adds_commit_before_removes() {
        let recorder = Recorder::default();
        let report = run_flush(&recorder, batch(&["0xa", "0xb"], &["0xc"])).await;

        let calls = recorder.calls.lock().clone();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].1);
        assert_eq!(calls[0].0, vec!["0xa", "0xb"]);
        assert!(!calls[1].1);
        assert_eq!(calls[1].0, vec!["0xc"]);
        assert_eq!(report, FlushReport { added: 2, removed: 1 });
    }

    #[tokio::test]
    async fn test_empty_sets_are_skipped() {
        let recorder = Recorder::default();
        run_flush(&recorder, batch(&[], &["0xc"])).await;

        let calls = recorder.calls.lock().clone();
        assert_eq!(calls, vec![(vec!["0xc".to_string()], false)]);
    }

    #[tokio::test]
    async fn test_failed_add_still_commits_removes() {
        let recorder = Recorder {
            fail_adds: true,
            ..Default::default()
        };
        let report = run_flush(&recorder, batch(&["0xa"], &["0xc"])).await;

        assert_eq!(recorder.calls.lock().len(), 2);
        assert_eq!(report, FlushReport { added: 0, removed: 1 });
    }
}
