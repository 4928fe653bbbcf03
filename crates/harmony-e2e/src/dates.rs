//! Calendar-matching date and time strings.
//!
//! The schedule UI renders "today" in en-US long form ("Tuesday, December
//! 30, 2025"). Hard-coded date literals in test data rot the moment a day
//! passes, so assertions are parameterized by these helpers instead: each
//! call re-reads the clock, and output matches the application's rendering
//! for whatever day the suite runs on.
//!
//! The UTC offset is explicit configuration captured once at construction,
//! never re-read from the host per call, so a formatter produces the same
//! calendar day for the same instant on every machine.

use crate::clock::{ClockHandle, SystemClock};
use crate::result::{HubError, HubResult};
use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, Timelike, Utc};
use std::sync::Arc;

/// en-US long form: full weekday, full month, unpadded day, 4-digit year
pub(crate) const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Zero-padded 24-hour "HH:MM", rejecting out-of-range input.
///
/// Hours above 23 or minutes above 59 are refused rather than wrapped or
/// clamped; a wrapped time would let an assertion pass against the wrong
/// rendered value.
///
/// # Errors
///
/// Returns [`HubError::InvalidTime`] when `hours > 23` or `minutes > 59`.
pub fn format_time(hours: u32, minutes: u32) -> HubResult<String> {
    if hours > 23 || minutes > 59 {
        return Err(HubError::InvalidTime { hours, minutes });
    }
    Ok(format!("{hours:02}:{minutes:02}"))
}

/// Renders the date/time strings the Harmony Hub UI displays for "now"
///
/// Holds a clock handle and a fixed UTC offset; no other state. Pure with
/// respect to everything but the injected clock, so a single formatter is
/// safe to share across parallel test workers.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    clock: ClockHandle,
    offset: FixedOffset,
}

impl DateFormatter {
    /// System clock, host UTC offset captured once at construction
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            offset: Local::now().offset().fix(),
        }
    }

    /// System clock, UTC offset zero
    #[must_use]
    pub fn utc() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            offset: Utc.fix(),
        }
    }

    /// Replace the clock (deterministic tests install a `FixedClock` here)
    #[must_use]
    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the UTC offset used to derive the calendar day
    #[must_use]
    pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// "Tuesday, December 30, 2025" for the clock's current day.
    ///
    /// Re-reads the clock on every call; two calls on the same calendar day
    /// return identical strings.
    #[must_use]
    pub fn formatted_long_date(&self) -> String {
        self.now_local().format(LONG_DATE_FORMAT).to_string()
    }

    /// Day of month in [1, 31]
    #[must_use]
    pub fn current_day_of_month(&self) -> u32 {
        self.now_local().day()
    }

    /// Full en-US month name, e.g. "December"
    #[must_use]
    pub fn current_month_name(&self) -> String {
        self.now_local().format("%B").to_string()
    }

    /// Four-digit year
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.now_local().year()
    }

    /// Zero-padded "HH:MM" for explicit components, same rules as [`format_time`]
    pub fn format_time(&self, hours: u32, minutes: u32) -> HubResult<String> {
        format_time(hours, minutes)
    }

    /// Zero-padded "HH:MM" for the clock's current hour and minute.
    ///
    /// Clock components are always in range, so this never fails.
    #[must_use]
    pub fn current_time(&self) -> String {
        let now = self.now_local();
        format!("{:02}:{:02}", now.hour(), now.minute())
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.offset)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new()
    }
}
