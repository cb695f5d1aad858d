//! Configuration Module
//!
//! Handles loading the sweeper daemon settings from environment variables.

use std::env;
use std::path::PathBuf;

/// Daemon configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON file with the initial entries
    pub seed_file: Option<PathBuf>,
    /// Interval in seconds between sweeps
    pub sweep_interval: u64,
    /// Maximum number of expired entries reclaimed per sweep
    pub sweep_batch: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SEED_FILE` - Seed JSON path (default: none)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 is ignored (default: 1)
    /// - `SWEEP_BATCH` - Max entries reclaimed per sweep (default: 100)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed_file: env::var_os("SEED_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.sweep_interval),
            sweep_batch: env::var("SWEEP_BATCH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_batch),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            sweep_interval: 1,
            sweep_batch: 100,
        }
    }
}
