//! Clock injection for deterministic date-dependent tests.
//!
//! The date utilities and the mock application read time through a [`Clock`]
//! handle instead of calling `Utc::now()` directly. Tests install a
//! [`FixedClock`] to pin "today", then advance it to exercise day-rollover
//! behavior without real time passing.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared clock handle, cheap to clone into formatters and drivers
pub type ClockHandle = Arc<dyn Clock>;

/// Source of "now" for everything date-dependent in the suite
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fake clock pinned to a settable instant
///
/// Stores epoch milliseconds in an atomic so a shared handle can be advanced
/// mid-test without locking.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(instant.timestamp_millis()),
        }
    }

    /// Create a clock pinned to the given epoch milliseconds
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Pin the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        self.millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }

    /// Pin the clock to new epoch milliseconds
    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Move the pinned instant forward
    pub fn advance(&self, by: Duration) {
        self.millis
            .fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }

    /// Move the pinned instant forward by whole days
    pub fn advance_days(&self, days: u32) {
        self.advance(Duration::from_secs(u64::from(days) * 86_400));
    }

    /// Current pinned value as epoch milliseconds
    #[must_use]
    pub fn millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis()).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Clone for FixedClock {
    fn clone(&self) -> Self {
        Self {
            millis: AtomicI64::new(self.millis()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    #[test]
    fn test_system_clock_tracks_utc_now() {
        let clock = SystemClock;
        let before = Utc::now();
        let read = clock.now();
        let after = Utc::now();
        assert!(read >= before && read <= after);
    }

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let pinned = instant(2025, 12, 30, 10, 30);
        let clock = FixedClock::at(pinned);
        assert_eq!(clock.now(), pinned);
        // Repeated reads do not drift
        assert_eq!(clock.now(), pinned);
    }

    #[test]
    fn test_fixed_clock_set_replaces_instant() {
        let clock = FixedClock::at(instant(2025, 1, 1, 0, 0));
        clock.set(instant(2026, 6, 15, 12, 0));
        assert_eq!(clock.now(), instant(2026, 6, 15, 12, 0));
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::at(instant(2025, 3, 9, 23, 30));
        clock.advance(Duration::from_secs(3600));
        assert_eq!(clock.now(), instant(2025, 3, 10, 0, 30));
    }

    #[test]
    fn test_fixed_clock_advance_days_crosses_month() {
        let clock = FixedClock::at(instant(2025, 1, 31, 8, 0));
        clock.advance_days(1);
        assert_eq!(clock.now(), instant(2025, 2, 1, 8, 0));
    }

    #[test]
    fn test_fixed_clock_shared_handle_sees_advances() {
        let clock = Arc::new(FixedClock::at(instant(2025, 5, 5, 5, 5)));
        let handle: ClockHandle = clock.clone();
        clock.advance_days(2);
        assert_eq!(handle.now(), instant(2025, 5, 7, 5, 5));
    }

    #[test]
    fn test_fixed_clock_clone_is_independent() {
        let original = FixedClock::at(instant(2025, 8, 1, 0, 0));
        let cloned = original.clone();
        original.advance_days(10);
        assert_eq!(cloned.now(), instant(2025, 8, 1, 0, 0));
        assert_eq!(original.now(), instant(2025, 8, 11, 0, 0));
    }

    #[test]
    fn test_fixed_clock_from_millis_round_trips() {
        let clock = FixedClock::from_millis(1_705_312_800_000); // 2024-01-15T10:00:00Z
        assert_eq!(clock.millis(), 1_705_312_800_000);
        assert_eq!(clock.now(), instant(2024, 1, 15, 10, 0));
    }
}
