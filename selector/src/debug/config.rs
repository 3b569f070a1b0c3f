//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "selector=info,warn";

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log file path
    pub log_file: PathBuf,
    /// Log level filter (e.g., "selector=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Enable realtime debug log (separate from main log)
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join("selector-debug.log"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir,
            enable_realtime_log: cfg!(feature = "debug-mode"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SELECTOR_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join("selector-debug.log"),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir,
            enable_realtime_log: std::env::var("SELECTOR_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(cfg!(feature = "debug-mode")),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
