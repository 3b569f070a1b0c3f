//! # Warning Flag Storage
//!
//! JSON file backing for the one-shot "cross-network selection acknowledged" flag.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::service::WarningStore;

/// On-disk layout of the flag file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarningFlagFile {
    #[serde(default)]
    pub shown_swap_reset_warning: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged_at: Option<DateTime<Utc>>,
}

/// [`WarningStore`] persisted as a small JSON file.
///
/// The file is read once on open; a missing or unreadable file counts as
/// "not acknowledged yet".
pub struct JsonFlagStore {
    path: PathBuf,
    cached: RwLock<bool>,
}

impl JsonFlagStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let shown = match load_flag_file(&path) {
            Ok(file) => file.shown_swap_reset_warning,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No readable warning flag, treating as unset");
                false
            }
        };

        Self {
            path,
            cached: RwLock::new(shown),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_flag_file(path: &Path) -> Result<WarningFlagFile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

impl WarningStore for JsonFlagStore {
    fn get(&self) -> bool {
        *self.cached.read()
    }

    fn set(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = WarningFlagFile {
            shown_swap_reset_warning: true,
            acknowledged_at: Some(Utc::now()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        *self.cached.write() = true;

        tracing::info!(path = %self.path.display(), "Network warning acknowledged");
        Ok(())
    }
}
