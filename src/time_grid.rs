//! Daily slot sequence and week window generation.
//!
//! The booking grid uses a fixed daily window of 08:00-20:00 inclusive at
//! 30-minute granularity (25 slots per day), and a 7-day week anchored to
//! the Monday of the week containing a reference date.
//!
//! These functions are stateless and cheap enough to call every frame.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

/// Slot granularity in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// First slot of the day (inclusive).
pub const DAY_START_HOUR: u32 = 8;

/// Last slot of the day (inclusive).
pub const DAY_END_HOUR: u32 = 20;

/// Number of slots per day: 08:00..19:30 in half-hour steps, plus 20:00.
pub const SLOTS_PER_DAY: usize = 25;

/// Generates the ordered slot sequence for one day.
///
/// The sequence is fixed: 08:00, 08:30, ... 19:30, 20:00.
pub fn generate_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::with_capacity(SLOTS_PER_DAY);
    for hour in DAY_START_HOUR..=DAY_END_HOUR {
        for minute in [0u32, 30] {
            if hour == DAY_END_HOUR && minute > 0 {
                break;
            }
            // Hour/minute are always in range, so this cannot fail
            if let Some(t) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(t);
            }
        }
    }
    slots
}

/// Returns the index of `clock` within the day's slot sequence, if it is a
/// valid slot boundary inside the daily window.
pub fn slot_index(slots: &[NaiveTime], clock: NaiveTime) -> Option<usize> {
    slots.iter().position(|&s| s == clock)
}

/// Advances a clock value by `minutes`. Used to derive the exclusive end
/// time of a selection (one slot past the last selected slot).
pub fn add_minutes(clock: NaiveTime, minutes: i64) -> NaiveTime {
    clock + Duration::minutes(minutes)
}

/// Returns the 7 consecutive dates of the week containing `anchor`,
/// starting on Monday (ISO week: Sunday counts as day 7).
pub fn week_days(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Parses a "HH:MM" clock string. Returns `None` for malformed input;
/// callers treat unparseable clocks as fail-open (slot not occupied).
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Formats a clock value as "HH:MM", the inverse of [`parse_clock`].
pub fn format_clock(clock: NaiveTime) -> String {
    clock.format("%H:%M").to_string()
}
