//! Store Module
//!
//! Provides the in-memory TTL store and its entry model.

mod entry;
mod ttl_store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{Expiration, StoreEntry};
pub use ttl_store::TtlStore;
