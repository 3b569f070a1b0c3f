//! # Swap Currency Selection - Library Root
//!
//! Orchestration engine behind a swap's "pick an asset" screen. It decides
//! which assets are listed for a query, batches favorite toggles, and guards
//! a selection with confirmation steps before handing it to the swap composer.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              selector (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  app         - CurrencySelect session orchestrator     │
//! │  search      - debounce, wallet filter, catalog seqs   │
//! │  merge       - section dedup (id, optional symbol)     │
//! │  favorites   - favorite batch queue                    │
//! │  guard       - liquidity / network guard chain         │
//! │  visibility  - focus, transition, settle delay         │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ core::service traits         │ HTTP / fs
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │  Host application   │      │  services::*            │
//! │  (wallet, navigator,│      │  (catalog client, flag  │
//! │   swap composer)    │      │   store, analytics)     │
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! ```text
//! raw query ─► Debouncer ─┬─ input role:  wallet filter ─┐
//!                         └─ output role: catalog search ┴─► merge ─► CurrencyList
//!
//! activate item ─► GuardChain ─┬─ interrupted: explainer sheet ─► acknowledge / dismiss
//!                              └─ finalize: prefetch, transition, host, analytics
//!
//! toggle favorite ─► FavoriteQueue ─► flush on focus loss / query clear / close
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin selector -- fixture.json output usdc
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib
//! cargo test --lib app::tests
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod favorites;
pub mod guard;
pub mod merge;
pub mod search;
pub mod services;
pub mod visibility;

pub use app::{CurrencyList, CurrencySelect, Role, SelectServices, SessionParams};
pub use config::SelectConfig;
pub use core::{AppError, Result};
