//! Clock Module
//!
//! The time source a store reads when it computes and checks expirations.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// An instant in the store's time domain.
pub type TimePoint = DateTime<Utc>;

// == Clock Trait ==
/// Read-only source of the current time.
///
/// Implementations must be monotonically non-decreasing across calls.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> TimePoint;
}

// == System Clock ==
/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

/// Shared system clock, usable wherever a `&'static` clock is required.
pub static SYSTEM_CLOCK: SystemClock = SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimePoint {
        Utc::now()
    }
}

// == Manual Clock ==
/// Deterministic clock that only moves when told to.
///
/// Advancing takes `&self`, so the clock can stay borrowed by a store while a
/// test moves time forward.
#[derive(Debug)]
pub struct ManualClock {
    /// Starting instant
    origin: TimePoint,
    /// Milliseconds elapsed since `origin`
    offset_ms: AtomicI64,
}

impl ManualClock {
    // == Constructor ==
    /// Creates a clock frozen at the current wall-clock time.
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Creates a clock frozen at `origin`.
    pub fn starting_at(origin: TimePoint) -> Self {
        Self {
            origin,
            offset_ms: AtomicI64::new(0),
        }
    }

    // == Advance ==
    /// Moves the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: u32) {
        self.advance(Duration::seconds(i64::from(secs)));
    }

    /// Moves the clock forward by `by`. Negative durations are ignored and
    /// the offset saturates instead of wrapping.
    pub fn advance(&self, by: Duration) {
        let ms = by.num_milliseconds();
        if ms > 0 {
            // The closure always returns Some, so the update cannot fail
            let _ = self
                .offset_ms
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |offset| {
                    Some(offset.saturating_add(ms))
                });
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimePoint {
        let offset = Duration::milliseconds(self.offset_ms.load(Ordering::SeqCst));
        self.origin
            .checked_add_signed(offset)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
