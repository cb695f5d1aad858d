//! Seed Module
//!
//! Loads the initial `(key, value, ttl)` batch a store is created from.
//!
//! The format is a JSON array of objects:
//!
//! ```json
//! [
//!     { "key": "session:1", "value": "alice", "ttl": 300 },
//!     { "key": "config:motd", "value": "hello" }
//! ]
//! ```
//!
//! A missing `ttl` means the entry never expires.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, StoreError};

// == Seed Entry ==
/// One entry of the initial batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEntry {
    pub key: String,
    pub value: String,
    /// TTL in seconds, 0 = no expiration
    #[serde(default)]
    pub ttl: u32,
}

impl From<SeedEntry> for (String, String, u32) {
    fn from(entry: SeedEntry) -> Self {
        (entry.key, entry.value, entry.ttl)
    }
}

/// Parses seed entries from a JSON reader, preserving their order.
pub fn load_seed<R: Read>(reader: R) -> Result<Vec<SeedEntry>> {
    let entries: Vec<SeedEntry> = serde_json::from_reader(reader)?;
    Ok(entries)
}

/// Parses seed entries from a JSON file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<SeedEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = load_seed(BufReader::new(file))?;
    info!("Loaded {} seed entries from {}", entries.len(), path.display());
    Ok(entries)
}
