//! # Common Error Types
//!
//! Consolidated error handling for the selection engine.
//!
//! This module provides a centralized error type [`AppError`] covering every
//! failure an external collaborator can report to the engine.
//!
//! ## Error Categories
//!
//! - **Api**: Catalog, favorites and explorer communication errors (network, HTTP, JSON)
//! - **Storage**: Persisted flag store errors (file I/O, serialization)
//! - **Navigation**: Navigator or URL opener failures
//! - **State**: Session state violations (a second selection while one is pending)
//! - **Validation**: Invalid entry parameters
//!
//! None of these surface to the user as blocking dialogs: catalog failures become
//! "no results", favorite commit failures are logged, and guard abandonment is not
//! an error at all.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use selector::core::error::AppError;
//!
//! fn require_chain(chain_id: u64) -> Result<u64, AppError> {
//!     if chain_id == 0 {
//!         return Err(AppError::Validation("Chain id must be non-zero".to_string()));
//!     }
//!     Ok(chain_id)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `String` / `&str` → `AppError::Api`
//! - `reqwest::Error` → `AppError::Api`
//! - `std::io::Error`, `serde_json::Error` → `AppError::Storage`

use thiserror::Error;

/// Engine-wide error type.
///
/// Each variant carries a descriptive message. The `#[error]` attribute from
/// `thiserror` provides `Display` and `Error`.
///
/// ```rust
/// use selector::core::error::AppError;
///
/// let err = AppError::Api("Connection timeout".to_string());
/// assert_eq!(err.to_string(), "API error: Connection timeout");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote data source failure.
    ///
    /// - Catalog search request failed or returned a non-success status
    /// - Favorite commit rejected
    /// - Chart/detail prefetch failed
    #[error("API error: {0}")]
    Api(String),

    /// Persisted flag store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Navigation or external URL opening failure.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Session state violation.
    ///
    /// Raised when an item is activated while another selection is still waiting
    /// on a guard interruption.
    #[error("State error: {0}")]
    State(String),

    /// Invalid input.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(AppError::Storage("disk full".into()).to_string(), "Storage error: disk full");
        assert_eq!(AppError::State("busy".into()).to_string(), "State error: busy");
    }

    #[test]
    fn test_string_converts_to_api() {
        let err: AppError = "timeout".into();
        assert!(matches!(err, AppError::Api(msg) if msg == "timeout"));
    }

    #[test]
    fn test_json_error_converts_to_storage() {
        let err: AppError = serde_json::from_str::<bool>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
