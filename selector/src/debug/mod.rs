//! # Logging and Tracing Infrastructure
//!
//! File-based structured logging, trace ids per selection and spawned task tracking.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/selector-debug.log` (daily rotation)
//! - **Trace ids**: Every item activation logs under its own id (`trace_info!` and friends)
//! - **Task tracking**: Spawned tasks log their lifecycle and are counted
//!
//! ## Usage
//!
//! ```rust,ignore
//! // At startup; keep the guard alive
//! let _log_guard = debug::init();
//!
//! spawn_tracked("catalog_search", async move {
//!     catalog.search(&query, chain_id).await
//! });
//!
//! info!(role = "output", chain_id = 137, "Opening currency selection");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `selector=info,warn`)
//! - `SELECTOR_LOG_DIR`: Log directory (default `logs`)
//! - `SELECTOR_DEBUG_REALTIME`: Also write a pretty, per-run `selector-realtime.log` (1=on)

pub mod config;
pub mod logger;
pub mod task_tracker;
pub mod trace_context;

pub use config::DebugConfig;
pub use logger::{init as init_logger, LogGuard};
pub use task_tracker::{active_task_count, spawn_tracked};
pub use trace_context::{clear_trace_id, get_trace_id, new_trace_id, set_trace_id, TraceGuard};

/// Initialize the logging system. Call once at startup, before anything else.
pub fn init() -> Option<LogGuard> {
    init_logger()
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
