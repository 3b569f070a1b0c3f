//! # Shared Utility Functions
//!
//! Address helpers used by the selection engine and its adapters.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the `0x` prefix plus 4 characters kept
//!
//! ## Address Normalization
//!
//! - [`add_hex_prefix`] - Ensure a leading `0x`
//! - [`normalize_address`] - Canonical `0x`-prefixed lowercase form
//! - [`is_address_like`] - Whether input looks like a 40 hex character address
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, normalize_address};
//!
//! let address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
//! assert_eq!(format_address(address, 6, 4), "0xA0b8...eB48");
//! assert_eq!(normalize_address("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
//! ```

/// Length of an EVM address without its `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x6b175474e89094c44da98b954eedeac495271d0f";
/// assert_eq!(format_address(addr, 6, 4), "0x6b17...1d0f");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address keeping `0x` plus 4 leading and 4 trailing characters.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0x6b175474e89094c44da98b954eedeac495271d0f"), "0x6b17...1d0f");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Prepend `0x` unless already present.
pub fn add_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") || value.starts_with("0X") {
        format!("0x{}", &value[2..])
    } else {
        format!("0x{}", value)
    }
}

/// Canonical form used for address comparison: `0x` prefix, lowercase.
pub fn normalize_address(address: &str) -> String {
    add_hex_prefix(address.trim()).to_lowercase()
}

/// Whether `query` is a full 40 hex character address, with optional `0x` prefix.
///
/// Partial or malformed input (wrong length, non-hex characters) returns `false`.
pub fn is_address_like(query: &str) -> bool {
    let hex = query.strip_prefix("0x").unwrap_or(query);
    hex.len() == ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit())
}
