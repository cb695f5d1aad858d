//! Store Entry Module
//!
//! Defines stored entries and their absolute expiration.

use chrono::Duration;

use crate::clock::TimePoint;

// == Expiration ==
/// When an entry stops being visible to reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// The entry stays live until removed or overwritten
    Never,
    /// The entry is live strictly before this instant
    At(TimePoint),
}

impl Expiration {
    /// Computes the expiration for a TTL applied at `now`.
    ///
    /// A zero TTL means "never expires". An instant past the representable
    /// range saturates to `Never`.
    pub fn after(now: TimePoint, ttl_seconds: u32) -> Self {
        if ttl_seconds == 0 {
            return Expiration::Never;
        }

        now.checked_add_signed(Duration::seconds(i64::from(ttl_seconds)))
            .map_or(Expiration::Never, Expiration::At)
    }

    // == Is Expired ==
    /// Returns true once `now` has reached the expiration instant.
    ///
    /// Boundary condition: an entry is expired when `now >= at`, so the last
    /// live instant is strictly before the deadline.
    pub fn is_expired_at(&self, now: TimePoint) -> bool {
        match self {
            Expiration::Never => false,
            Expiration::At(at) => now >= *at,
        }
    }

    // == Time To Live ==
    /// Whole seconds left before expiration, rounded down.
    ///
    /// # Returns
    /// - `None` for `Never`
    /// - `Some(0)` once the deadline has passed
    pub fn remaining_secs(&self, now: TimePoint) -> Option<u64> {
        match self {
            Expiration::Never => None,
            Expiration::At(at) => {
                let secs = at.signed_duration_since(now).num_seconds();
                Some(u64::try_from(secs).unwrap_or(0))
            }
        }
    }
}

// == Store Entry ==
/// A stored value together with its expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// The stored value
    pub value: String,
    /// Absolute expiration computed at write time
    pub expiration: Expiration,
}

impl StoreEntry {
    /// Creates an entry whose TTL starts at `now`.
    pub fn new(value: String, ttl_seconds: u32, now: TimePoint) -> Self {
        Self {
            value,
            expiration: Expiration::after(now, ttl_seconds),
        }
    }

    /// Returns true if the entry is visible to reads at `now`.
    pub fn is_live_at(&self, now: TimePoint) -> bool {
        !self.expiration.is_expired_at(now)
    }
}
