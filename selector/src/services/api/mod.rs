//! # Catalog API Client Module
//!
//! HTTP client for the remote token catalog.
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - CatalogClient and CatalogSearch impl
//! └── search.rs   - Search endpoint and response types
//! ```

pub mod client;
pub mod search;

pub use client::CatalogClient;
pub use search::SearchResponse;
