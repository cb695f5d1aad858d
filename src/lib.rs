//! ttlkv - An embeddable in-memory key-value store
//!
//! Provides per-entry TTL expiration, sorted range scans and caller-driven
//! reclamation of expired entries.

pub mod clock;
pub mod config;
pub mod error;
pub mod seed;
pub mod store;
pub mod tasks;

pub use clock::{Clock, ManualClock, SystemClock, TimePoint, SYSTEM_CLOCK};
pub use config::Config;
pub use error::StoreError;
pub use seed::{load_seed, load_seed_file, SeedEntry};
pub use store::{Expiration, StoreEntry, TtlStore};
pub use tasks::{spawn_sweeper, sweep_expired};
