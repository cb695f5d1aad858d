//! ttlkv - An embeddable in-memory key-value store
//!
//! Runs a store on the system clock with a periodic expiry sweeper.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttlkv::{load_seed_file, spawn_sweeper, Config, SeedEntry, TtlStore, SYSTEM_CLOCK};

/// Main entry point for the ttlkv daemon.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Seed the store from `SEED_FILE`, if set
/// 4. Start the expiry sweeper
/// 5. Wait for SIGINT/SIGTERM, then stop the sweeper and report
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttlkv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ttlkv");

    let config = Config::from_env();
    info!(
        "Configuration loaded: seed_file={:?}, sweep_interval={}s, sweep_batch={}",
        config.seed_file, config.sweep_interval, config.sweep_batch
    );

    let seed: Vec<SeedEntry> = match &config.seed_file {
        Some(path) => load_seed_file(path).context("failed to load seed data")?,
        None => Vec::new(),
    };

    let store = TtlStore::new(seed.into_iter().map(<(String, String, u32)>::from), &SYSTEM_CLOCK);
    info!("Store initialized with {} entries", store.len());

    let store = Arc::new(RwLock::new(store));
    let sweeper = spawn_sweeper(
        store.clone(),
        Duration::from_secs(config.sweep_interval),
        config.sweep_batch,
    );

    shutdown_signal().await;
    sweeper.abort();
    warn!("Sweeper aborted");

    let store = store.read().await;
    info!(
        "Shutdown complete, {} live entries of {} stored",
        store.live_len(),
        store.len()
    );

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
