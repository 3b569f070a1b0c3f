//! # Services Module
//!
//! Concrete implementations of the service traits in [`crate::core::service`].
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/          - Token catalog HTTP client (CatalogSearch)
//! ├── storage.rs    - JSON file backed warning flag (WarningStore)
//! ├── analytics.rs  - Analytics events to the log (AnalyticsSink)
//! ├── browser.rs    - System browser link opener (UrlOpener)
//! └── memory.rs     - In-memory and recording services for demos and tests
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  CurrencySelect                      │
//! │   Arc<dyn CatalogSearch>   Arc<dyn WarningStore> ... │
//! └──────────┬─────────────────────────┬─────────────────┘
//!            │ HTTP/JSON               │ fs + serde_json
//!            ▼                         ▼
//! ┌─────────────────────┐   ┌─────────────────────────────┐
//! │  Catalog API        │   │  data/                      │
//! │  /api/tokens/search │   │  shown_swap_reset_warning   │
//! └─────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! Wallet holdings, favorites persistence, navigation and the swap composer
//! belong to the embedding application; only in-memory versions live here.
//!
//! ## Error Handling
//!
//! Adapters return [`crate::core::error::AppError`]: network and HTTP status
//! failures as `Api`, file and JSON failures as `Storage`, link opening as
//! `Navigation`.

pub mod analytics;
pub mod api;
pub mod browser;
pub mod memory;
pub mod storage;

pub use analytics::TracingAnalytics;
pub use api::CatalogClient;
pub use browser::SystemUrlOpener;
pub use storage::JsonFlagStore;
