//! # Shared Data Transfer Objects Library
//!
//! Defines the contract between the wallet/catalog data sources and the
//! currency selection engine. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::asset`]**: Assets, balances and per-network implementations
//!   - **[`dto::network`]**: Supported networks and chain ids
//!   - **[`dto::section`]**: Titled asset groups for the currency list
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_address`]**: Canonical address form for comparison
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::{Asset, Network, Section};
//!
//! let json = r#"{"title":"","data":[{"uniqueId":"eth","address":"0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee","symbol":"ETH","name":"Ethereum"}]}"#;
//! let section: Section = serde_json::from_str(json).unwrap();
//! assert_eq!(section.data[0].network, Network::Mainnet);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
