//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};

/// Keeps the non-blocking log writers flushing. Drop it on shutdown.
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotated main log (`logs/selector-debug.log` by default)
/// - Optional realtime log, truncated on startup, in a human-readable format
/// - Non-blocking writes
/// - Panic hook that logs through tracing
///
/// Returns `None` if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init() -> Option<LogGuard> {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "selector-debug.log");
    let (non_blocking_main, main_guard) = tracing_appender::non_blocking(file_appender);
    let mut guards = vec![main_guard];

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let realtime_path = config.log_dir.join("selector-realtime.log");
    let realtime_layer = if config.enable_realtime_log {
        match fs::File::create(&realtime_path) {
            Ok(file) => {
                let (writer, guard) = tracing_appender::non_blocking(file);
                guards.push(guard);
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_thread_names(true)
                        .with_ansi(false)
                        .pretty(),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(realtime_layer)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file.display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Debug logging initialized"
    );

    setup_panic_hook();

    Some(LogGuard { _guards: guards })
}

/// Log panics with location and trace id before the default handler runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        match super::trace_context::get_trace_id() {
            Some(trace_id) => tracing::error!(
                trace_id = %trace_id,
                location = %location,
                message = %message,
                "Selector panicked"
            ),
            None => tracing::error!(location = %location, message = %message, "Selector panicked"),
        }

        default_panic(panic_info);
    }));
}
