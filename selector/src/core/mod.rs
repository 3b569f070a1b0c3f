//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Engine error types (`AppError`, `Result<T>`)
//! - **[`navigation`]**: Routes, route parameters and explainer sheets
//! - **[`service`]**: Service traits for the wallet, catalog, favorites, navigator,
//!   analytics, flag storage and the swap host
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use selector::core::service::CatalogSearch;
//!
//! // In production: HTTP catalog
//! let catalog: Arc<dyn CatalogSearch> = Arc::new(selector::services::api::CatalogClient::new(&config.catalog_base_url));
//!
//! // In tests: in-memory catalog
//! let catalog: Arc<dyn CatalogSearch> = Arc::new(selector::services::memory::MemoryCatalog::default());
//! ```

pub mod error;
pub mod navigation;
pub mod service;

pub use error::{AppError, Result};
pub use navigation::{ExplainSheet, NavigationParams, Route};
pub use service::{
    AnalyticsEvent, AnalyticsSink, CatalogSearch, ExplorerService, FavoritesService, Navigator,
    SwapHost, UrlOpener, WalletSource, WarningStore,
};
