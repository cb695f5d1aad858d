//! Error types for the store crate
//!
//! The store operations themselves are infallible; errors only arise at the
//! edges, such as loading seed data.

use std::path::PathBuf;

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Seed file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed data is not a valid list of entries
    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
