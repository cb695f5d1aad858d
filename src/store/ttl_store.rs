//! TTL Store Module
//!
//! Ordered key-value storage with lazy per-entry expiration.

use std::collections::BTreeMap;
use std::ops::Bound;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::store::{Expiration, StoreEntry};

// == TTL Store ==
/// In-memory key-value store with per-entry TTL.
///
/// Reads never mutate: an expired entry stays in place, invisible to `get`
/// and `get_many_sorted`, until `remove` or `remove_one_expired_entry`
/// drops it. The store borrows its clock, which must outlive it.
#[derive(Debug)]
pub struct TtlStore<'c, C: Clock + ?Sized = SystemClock> {
    /// Key-value storage in lexicographic key order
    entries: BTreeMap<String, StoreEntry>,
    /// Time source for expiration math
    clock: &'c C,
}

impl<'c, C: Clock + ?Sized> TtlStore<'c, C> {
    // == Constructor ==
    /// Creates a store from an ordered batch of `(key, value, ttl_seconds)`.
    ///
    /// Each triple goes through [`TtlStore::set`] in order, so a duplicate key
    /// keeps its last value and TTL.
    pub fn new<I, K, V>(entries: I, clock: &'c C) -> Self
    where
        I: IntoIterator<Item = (K, V, u32)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self {
            entries: BTreeMap::new(),
            clock,
        };

        for (key, value, ttl) in entries {
            store.set(key, value, ttl);
        }

        debug!(entries = store.len(), "store initialized");
        store
    }

    /// Creates an empty store.
    pub fn empty(clock: &'c C) -> Self {
        Self::new(std::iter::empty::<(String, String, u32)>(), clock)
    }

    // == Set ==
    /// Stores a value, replacing any previous value and expiration.
    ///
    /// A zero `ttl_seconds` means the entry never expires.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, ttl_seconds: u32) {
        let entry = StoreEntry::new(value.into(), ttl_seconds, self.clock.now());
        self.entries.insert(key.into(), entry);
    }

    // == Remove ==
    /// Removes a key whether it is live or expired.
    ///
    /// Returns true if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Get ==
    /// Returns the value for `key` if it exists and has not expired.
    pub fn get(&self, key: &str) -> Option<&str> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| entry.is_live_at(now))
            .map(|entry| entry.value.as_str())
    }

    // == Get Many Sorted ==
    /// Returns up to `count` live entries with keys `>= start_key`, ascending.
    ///
    /// Expired entries are skipped and do not use up the count.
    pub fn get_many_sorted(&self, start_key: &str, count: u32) -> Vec<(String, String)> {
        if count == 0 {
            return Vec::new();
        }

        let now = self.clock.now();
        self.entries
            .range::<str, _>((Bound::Included(start_key), Bound::Unbounded))
            .filter(|(_, entry)| entry.is_live_at(now))
            .take(count as usize)
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    // == Remove One Expired Entry ==
    /// Removes and returns the first expired entry found, if any.
    ///
    /// Which entry is chosen when several have expired is unspecified.
    /// Entries that never expire are never returned.
    pub fn remove_one_expired_entry(&mut self) -> Option<(String, String)> {
        let now = self.clock.now();
        let key = self
            .entries
            .iter()
            .find(|(_, entry)| entry.expiration.is_expired_at(now))
            .map(|(key, _)| key.clone())?;

        self.entries
            .remove_entry(&key)
            .map(|(key, entry)| (key, entry.value))
    }

    // == Expiration ==
    /// Returns the stored expiration for `key`, live or expired.
    pub fn expiration(&self, key: &str) -> Option<Expiration> {
        self.entries.get(key).map(|entry| entry.expiration)
    }

    // == Time To Live ==
    /// Returns the remaining TTL of a live entry in whole seconds.
    ///
    /// # Returns
    /// - `None` if the key is missing or expired
    /// - `Some(None)` if the entry never expires
    /// - `Some(Some(secs))` otherwise
    pub fn ttl_remaining(&self, key: &str) -> Option<Option<u64>> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| entry.is_live_at(now))
            .map(|entry| entry.expiration.remaining_secs(now))
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Live Length ==
    /// Returns the number of entries still visible to reads.
    pub fn live_len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .values()
            .filter(|entry| entry.is_live_at(now))
            .count()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
