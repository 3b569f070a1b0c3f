//! # Session Events
//!
//! Results sent from spawned tasks (and the navigation continuation) back to
//! the task driving the session.

/// Async results applied on the next `on_tick` / `process_next_event`
#[derive(Debug, Clone)]
pub enum SelectEvent {
    /// Catalog search completed
    CatalogResult {
        seq: u64,
        result: Result<Vec<shared::Section>, String>,
    },
    /// A favorite flush finished (both commits attempted)
    FavoritesFlushed { added: usize, removed: usize },
    /// The navigation continuation left the selection screen
    Navigated { chain_id: u64 },
}
