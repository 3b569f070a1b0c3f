//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the wallet, the token catalog and the
//! currency selection engine.
//!
//! ## Module Organization
//!
//! - [`asset`] - Swappable assets, balances and per-network implementations
//! - [`network`] - Supported networks and chain id mapping
//! - [`section`] - Titled asset groups produced for the currency list
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), except `Asset::asset_type` which is `type`;
//!   `Asset::id` also accepts the catalog's `uniqueId`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "title": "Favorites",
//!   "data": [
//!     {
//!       "uniqueId": "0x6b17...1d0f_mainnet",
//!       "address": "0x6b175474e89094c44da98b954eedeac495271d0f",
//!       "symbol": "DAI",
//!       "name": "Dai",
//!       "network": "mainnet",
//!       "type": "token"
//!     }
//!   ]
//! }
//! ```

pub mod asset;
pub mod network;
pub mod section;

pub use asset::*;
pub use network::*;
pub use section::*;
