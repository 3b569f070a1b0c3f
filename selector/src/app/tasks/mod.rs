//! # Async Tasks
//!
//! Background work spawned by the session. Results come back as
//! [`crate::app::SelectEvent`]s over the session's event channel.

pub mod explorer;
pub mod favorites;
pub mod search;
