//! Background Tasks Module
//!
//! Expiry reclamation driven from outside the store.
//!
//! # Tasks
//! - Sweeper: Reclaims expired entries in bounded batches at a fixed interval

mod sweeper;

pub use sweeper::{spawn_sweeper, sweep_expired};
