//! Spawned task lifecycle tracking

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Tasks spawned so far; doubles as the task id source
static TASK_IDS: AtomicU64 = AtomicU64::new(0);

/// Tasks currently running
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Threshold past which a completed task is reported as slow
const SLOW_TASK_SECS: u64 = 10;

/// Number of tracked tasks still running
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Spawn an instrumented task with lifecycle logging
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "catalog_search", "favorites_flush")
/// * `future` - The async task to execute
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("catalog_search", async move {
///     catalog.search(&query, chain_id).await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = TASK_IDS.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id, "Task spawned");

    tokio::spawn(async move {
        let result = future.await;
        let duration = start.elapsed();
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);

        if duration.as_secs() >= SLOW_TASK_SECS {
            tracing::warn!(
                task = %name,
                task_id,
                duration_ms = duration.as_millis(),
                "Task took very long"
            );
        } else {
            tracing::debug!(
                task = %name,
                task_id,
                duration_ms = duration.as_millis(),
                "Task completed"
            );
        }

        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawned_task_returns_output() {
        let handle = spawn_tracked("test_task", async { 21 * 2 });
        assert_eq!(handle.await.unwrap(), 42);
    }
}
