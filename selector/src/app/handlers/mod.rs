//! # Session Handlers
//!
//! User action handlers organized by concern. [`crate::app::CurrencySelect`]
//! delegates to these; they keep lock scopes short and call external services
//! only after the session lock is released.

pub mod favorites;
pub mod focus;
pub mod search;
pub mod selection;
