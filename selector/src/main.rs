//! # Currency Selection Demo
//!
//! Runs one selection session against a JSON fixture and prints the list the
//! screen would render.
//!
//! ```bash
//! selector <fixture.json> <input|output> [query] [chain_id]
//! ```
//!
//! Fixture layout: `{ "wallet": [Asset], "catalog": [Section] }`.

use std::sync::Arc;

use serde::Deserialize;
use shared::{Asset, Section, MAINNET_CHAIN_ID};

use selector::app::{CurrencySelect, Role, SelectServices, SessionParams};
use selector::config::SelectConfig;
use selector::core::error::{AppError, Result};
use selector::services::memory::{
    MemoryCatalog, MemoryFavorites, MemoryWallet, NoopExplorer, RecordingHost, RecordingNavigator,
};
use selector::services::{JsonFlagStore, SystemUrlOpener, TracingAnalytics};

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    wallet: Vec<Asset>,
    #[serde(default)]
    catalog: Vec<Section>,
}

#[tokio::main]
async fn main() {
    let _log_guard = selector::debug::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Demo failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let fixture_path = args
        .next()
        .ok_or_else(|| AppError::Validation("usage: selector <fixture.json> <input|output> [query] [chain_id]".to_string()))?;
    let role: Role = args
        .next()
        .unwrap_or_else(|| "output".to_string())
        .parse()
        .map_err(AppError::Validation)?;
    let query = args.next().unwrap_or_default();
    let chain_id = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::Validation(format!("invalid chain id {}: {}", raw, e)))?,
        None => MAINNET_CHAIN_ID,
    };

    let fixture: Fixture = serde_json::from_str(&std::fs::read_to_string(&fixture_path)?)?;
    tracing::info!(
        path = %fixture_path,
        wallet = fixture.wallet.len(),
        sections = fixture.catalog.len(),
        "Fixture loaded"
    );

    let config = SelectConfig::from_env();
    let services = SelectServices {
        wallet: Arc::new(MemoryWallet::new(fixture.wallet)),
        catalog: Arc::new(MemoryCatalog::new(fixture.catalog)),
        favorites: Arc::new(MemoryFavorites::new()),
        explorer: Arc::new(NoopExplorer),
        navigator: Arc::new(RecordingNavigator::new()),
        warnings: Arc::new(JsonFlagStore::open(&config.warning_flag_path)),
        analytics: Arc::new(TracingAnalytics),
        url_opener: Arc::new(SystemUrlOpener),
        host: Arc::new(RecordingHost::new(None, None)),
    };

    let debounce = config.debounce;
    let session = CurrencySelect::new(SessionParams::new(role, chain_id), services, config);

    session.set_search_query(&query);
    tokio::time::sleep(debounce).await;
    session.on_tick();

    while session.currency_list().loading {
        if !session.process_next_event().await {
            break;
        }
    }

    let list = session.currency_list();
    println!("{}", serde_json::to_string_pretty(&list)?);
    session.close();
    tracing::debug!(
        active_tasks = selector::debug::active_task_count(),
        debug_mode = selector::debug::is_debug_mode(),
        "Session closed"
    );
    Ok(())
}
