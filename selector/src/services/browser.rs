//! External link opener backed by the system browser.

use crate::core::error::{AppError, Result};
use crate::core::service::UrlOpener;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::info!(url = %url, "Opening external link");
        open::that(url).map_err(|e| AppError::Navigation(format!("Failed to open {}: {}", url, e)))
    }
}
