//! Property-based tests for the date and time utilities.
//!
//! Schedule assertions are parameterized by these helpers, so they have to
//! agree with the application's rendering on whatever day the suite runs.
//! The properties sweep a century of instants rather than a handful of
//! anchored dates.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use harmony_e2e::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ===== Strategy definitions =====

/// Epoch milliseconds from 2000-01-01T00:00:00Z up to 2100-01-01T00:00:00Z
fn instant_strategy() -> impl Strategy<Value = i64> {
    946_684_800_000i64..4_102_444_800_000i64
}

fn hour_strategy() -> impl Strategy<Value = u32> {
    0u32..=23u32
}

fn minute_strategy() -> impl Strategy<Value = u32> {
    0u32..=59u32
}

fn formatter_at(millis: i64) -> DateFormatter {
    DateFormatter::utc().with_clock(Arc::new(FixedClock::from_millis(millis)))
}

fn formatter_on(year: i32, month: u32, day: u32) -> DateFormatter {
    let instant = Utc
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap();
    DateFormatter::utc().with_clock(Arc::new(FixedClock::at(instant)))
}

// ===== Property tests for format_time =====

proptest! {
    /// Valid inputs render as exactly "HH:MM"
    #[test]
    fn prop_format_time_shape(h in hour_strategy(), m in minute_strategy()) {
        let out = format_time(h, m).unwrap();
        prop_assert_eq!(out.len(), 5);
        prop_assert_eq!(&out[2..3], ":");
        prop_assert!(out[0..2].chars().all(|c| c.is_ascii_digit()));
        prop_assert!(out[3..5].chars().all(|c| c.is_ascii_digit()));
    }

    /// The rendered components parse back to the inputs
    #[test]
    fn prop_format_time_round_trips(h in hour_strategy(), m in minute_strategy()) {
        let out = format_time(h, m).unwrap();
        prop_assert_eq!(out[0..2].parse::<u32>().unwrap(), h);
        prop_assert_eq!(out[3..5].parse::<u32>().unwrap(), m);
    }

    /// Hours past 23 are refused carrying the offending inputs, never wrapped
    #[test]
    fn prop_format_time_rejects_hours_out_of_range(
        h in 24u32..10_000u32,
        m in minute_strategy(),
    ) {
        let err = format_time(h, m).unwrap_err();
        prop_assert!(
            matches!(err, HubError::InvalidTime { hours, minutes } if hours == h && minutes == m),
            "unexpected error {:?}",
            err
        );
    }

    /// Minutes past 59 are refused carrying the offending inputs, never wrapped
    #[test]
    fn prop_format_time_rejects_minutes_out_of_range(
        h in hour_strategy(),
        m in 60u32..10_000u32,
    ) {
        let err = format_time(h, m).unwrap_err();
        prop_assert!(
            matches!(err, HubError::InvalidTime { hours, minutes } if hours == h && minutes == m),
            "unexpected error {:?}",
            err
        );
    }
}

// ===== Property tests for DateFormatter =====

proptest! {
    /// Day of month always lands in the calendar range
    #[test]
    fn prop_day_of_month_in_range(millis in instant_strategy()) {
        let day = formatter_at(millis).current_day_of_month();
        prop_assert!((1..=31).contains(&day));
    }

    /// Month name is always one of the twelve en-US names
    #[test]
    fn prop_month_name_is_en_us(millis in instant_strategy()) {
        let name = formatter_at(millis).current_month_name();
        prop_assert!(MONTHS.contains(&name.as_str()), "unknown month {}", name);
    }

    /// The long date embeds the same day, month, and year the component
    /// getters report
    #[test]
    fn prop_long_date_matches_components(millis in instant_strategy()) {
        let formatter = formatter_at(millis);
        let long = formatter.formatted_long_date();
        let day = formatter.current_day_of_month();
        prop_assert!(long.contains(&format!(" {day}, ")), "{} missing day {}", long, day);
        prop_assert!(long.contains(&formatter.current_month_name()));
        prop_assert!(long.ends_with(&formatter.current_year().to_string()));
    }

    /// Long date starts with a weekday name followed by a comma
    #[test]
    fn prop_long_date_starts_with_weekday(millis in instant_strategy()) {
        let long = formatter_at(millis).formatted_long_date();
        let weekday = long.split(',').next().unwrap_or("");
        prop_assert!(WEEKDAYS.contains(&weekday), "unknown weekday in {}", long);
    }

    /// Repeated reads at a pinned instant are identical
    #[test]
    fn prop_pinned_instant_reads_are_stable(millis in instant_strategy()) {
        let formatter = formatter_at(millis);
        prop_assert_eq!(formatter.formatted_long_date(), formatter.formatted_long_date());
        prop_assert_eq!(formatter.current_time(), formatter.current_time());
        prop_assert_eq!(formatter.current_day_of_month(), formatter.current_day_of_month());
    }

    /// Components agree with chrono's own calendar for the instant
    #[test]
    fn prop_components_match_chrono(millis in instant_strategy()) {
        let formatter = formatter_at(millis);
        let expected = DateTime::from_timestamp_millis(millis).unwrap();
        prop_assert_eq!(formatter.current_day_of_month(), expected.day());
        prop_assert_eq!(formatter.current_year(), expected.year());
    }

    /// current_time always renders zero-padded components in range
    #[test]
    fn prop_current_time_parses_in_range(millis in instant_strategy()) {
        let time = formatter_at(millis).current_time();
        prop_assert_eq!(time.len(), 5);
        let h: u32 = time[0..2].parse().unwrap();
        let m: u32 = time[3..5].parse().unwrap();
        prop_assert!(h <= 23);
        prop_assert!(m <= 59);
    }

    /// current_time equals format_time applied to the clock's components
    #[test]
    fn prop_current_time_matches_format_time(h in hour_strategy(), m in minute_strategy()) {
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).single().unwrap();
        let formatter = DateFormatter::utc().with_clock(Arc::new(FixedClock::at(instant)));
        prop_assert_eq!(formatter.current_time(), format_time(h, m).unwrap());
    }
}

// ===== Invariant tests =====

#[test]
fn invariant_reference_date_renders_exactly() {
    assert_eq!(
        formatter_on(2025, 12, 30).formatted_long_date(),
        "Tuesday, December 30, 2025"
    );
}

#[test]
fn invariant_single_digit_days_are_unpadded() {
    assert_eq!(
        formatter_on(2026, 3, 4).formatted_long_date(),
        "Wednesday, March 4, 2026"
    );
}

#[test]
fn invariant_leap_day_renders() {
    assert_eq!(
        formatter_on(2028, 2, 29).formatted_long_date(),
        "Tuesday, February 29, 2028"
    );
}

#[test]
fn invariant_all_twelve_month_names_render() {
    for (index, name) in MONTHS.iter().enumerate() {
        let formatter = formatter_on(2025, index as u32 + 1, 15);
        assert_eq!(&formatter.current_month_name(), name);
    }
}

#[test]
fn invariant_day_boundaries_accepted() {
    assert_eq!(format_time(0, 0).unwrap(), "00:00");
    assert_eq!(format_time(23, 59).unwrap(), "23:59");
}

#[test]
fn invariant_first_out_of_range_values_rejected() {
    assert!(format_time(24, 0).is_err());
    assert!(format_time(0, 60).is_err());
}
