//! # Search Pipeline
//!
//! Turns typed text into list sections.
//!
//! ```text
//! raw query ──► Debouncer (350ms trailing) ──► debounced query
//!                                                  │
//!                 ┌────────────────────────────────┴───────────────────┐
//!           role = Input                                         role = Output
//!     eligible_wallet_assets + filter_wallet_assets       CatalogSearch (spawned task)
//!                 │                                                    │
//!          one headerless section                     CatalogRequests (latest wins)
//!                 └────────────────────────────────┬───────────────────┘
//!                                                  ▼
//!                                       merge::merge_sections
//! ```
//!
//! ## Modules
//!
//! - **[`debounce`]**: trailing debouncer
//! - **[`filter`]**: wallet filtering (address-exact or ranked text match)
//! - **[`catalog`]**: catalog request sequencing and loading flag

pub mod catalog;
pub mod debounce;
pub mod filter;

pub use catalog::{CatalogRequest, CatalogRequests};
pub use debounce::Debouncer;
pub use filter::{eligible_wallet_assets, filter_wallet_assets, MatchRank};
