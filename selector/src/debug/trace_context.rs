//! Trace IDs for correlating the log lines of one selection.
//!
//! Each item activation runs under a fresh trace id; the guard chain, the
//! finalize step and any interruption answer log with it attached.

use std::cell::RefCell;

use uuid::Uuid;

thread_local! {
    static TRACE_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Generate a new trace ID and set it for the current thread
pub fn new_trace_id() -> String {
    let trace_id = Uuid::new_v4().to_string();
    set_trace_id(Some(trace_id.clone()));
    trace_id
}

/// Set the trace ID for the current thread
pub fn set_trace_id(id: Option<String>) {
    TRACE_ID.with(|cell| {
        *cell.borrow_mut() = id;
    });
}

/// Get the current trace ID, if one is set
pub fn get_trace_id() -> Option<String> {
    TRACE_ID.with(|cell| cell.borrow().clone())
}

pub fn clear_trace_id() {
    set_trace_id(None);
}

/// Log at info level with the current trace id attached
#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        if let Some(trace_id) = $crate::debug::trace_context::get_trace_id() {
            tracing::info!(trace_id = %trace_id, $($arg)*);
        } else {
            tracing::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        if let Some(trace_id) = $crate::debug::trace_context::get_trace_id() {
            tracing::warn!(trace_id = %trace_id, $($arg)*);
        } else {
            tracing::warn!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        if let Some(trace_id) = $crate::debug::trace_context::get_trace_id() {
            tracing::debug!(trace_id = %trace_id, $($arg)*);
        } else {
            tracing::debug!($($arg)*);
        }
    };
}

/// Scoped trace id. Restores the previous id on drop.
pub struct TraceGuard {
    trace_id: String,
    previous: Option<String>,
}

impl TraceGuard {
    /// Enter a scope with a fresh trace ID
    pub fn new() -> Self {
        let previous = get_trace_id();
        let trace_id = new_trace_id();
        Self { trace_id, previous }
    }

    pub fn id(&self) -> &str {
        &self.trace_id
    }
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        set_trace_id(self.previous.take());
    }
}

impl Default for TraceGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_scopes_trace_id() {
        clear_trace_id();
        {
            let outer = TraceGuard::new();
            assert_eq!(get_trace_id().as_deref(), Some(outer.id()));
            {
                let inner = TraceGuard::new();
                assert_ne!(inner.id(), outer.id());
                assert_eq!(get_trace_id().as_deref(), Some(inner.id()));
            }
            assert_eq!(get_trace_id().as_deref(), Some(outer.id()));
        }
        assert_eq!(get_trace_id(), None);
    }
}
