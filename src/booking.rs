//! Booking intervals and the occupancy index for the weekly grid.
//!
//! A booking occupies every slot whose clock falls inside the half-open
//! interval `[start_clock, end_clock)` on the booking's day. The index is
//! rebuilt wholesale whenever the booking list changes; bookings are small
//! per resource, so there is no incremental update.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::time_grid;

/// One existing booking as returned by the booking source.
///
/// Clock values are kept as raw "HH:MM" strings because the source may
/// deliver malformed timestamps; those are treated as not occupying any
/// slot rather than failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub day: NaiveDate,
    pub start_clock: String,
    pub end_clock: String,
    #[serde(default)]
    pub client_label: String,
}

impl Booking {
    /// Parses the clock pair, returning `None` when either side is
    /// malformed or the interval is empty/inverted (fail-open policy).
    fn interval(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = time_grid::parse_clock(&self.start_clock)?;
        let end = time_grid::parse_clock(&self.end_clock)?;
        if start < end {
            Some((start, end))
        } else {
            None
        }
    }
}

/// Answers "is slot S on day D occupied?" in O(1) per query.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    occupied: HashSet<(NaiveDate, NaiveTime)>,
}

impl OccupancyIndex {
    /// Creates an empty index (no slot occupied).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from a booking list. Bookings with malformed or
    /// missing timestamps are skipped; they never occupy a slot.
    pub fn build(bookings: &[Booking]) -> Self {
        let slots = time_grid::generate_slots();
        let mut occupied = HashSet::new();

        for booking in bookings {
            let Some((start, end)) = booking.interval() else {
                log::warn!(
                    "skipping booking with unusable clocks: {:?}..{:?} on {}",
                    booking.start_clock,
                    booking.end_clock,
                    booking.day
                );
                continue;
            };
            for &slot in &slots {
                if slot >= start && slot < end {
                    occupied.insert((booking.day, slot));
                }
            }
        }

        Self { occupied }
    }

    /// Returns true if some booking covers `clock` on `day`.
    pub fn is_occupied(&self, day: NaiveDate, clock: NaiveTime) -> bool {
        self.occupied.contains(&(day, clock))
    }

    /// Number of occupied (day, slot) pairs currently indexed.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn booking(start: &str, end: &str) -> Booking {
        Booking {
            day: day(),
            start_clock: start.to_string(),
            end_clock: end.to_string(),
            client_label: "ACME".to_string(),
        }
    }

    #[test]
    fn test_half_open_interval() {
        let index = OccupancyIndex::build(&[booking("10:00", "11:00")]);
        assert!(index.is_occupied(day(), clock(10, 0)));
        assert!(index.is_occupied(day(), clock(10, 30)));
        // End boundary is exclusive
        assert!(!index.is_occupied(day(), clock(11, 0)));
        assert!(!index.is_occupied(day(), clock(9, 30)));
    }

    #[test]
    fn test_other_day_not_occupied() {
        let index = OccupancyIndex::build(&[booking("10:00", "11:00")]);
        let other = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(!index.is_occupied(other, clock(10, 0)));
    }

    #[test]
    fn test_malformed_clocks_fail_open() {
        let index = OccupancyIndex::build(&[
            booking("not-a-time", "11:00"),
            booking("10:00", ""),
        ]);
        assert!(index.is_empty());
        assert!(!index.is_occupied(day(), clock(10, 0)));
    }

    #[test]
    fn test_inverted_interval_fail_open() {
        let index = OccupancyIndex::build(&[booking("12:00", "10:00")]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_overlapping_bookings_union() {
        let index = OccupancyIndex::build(&[
            booking("09:00", "10:30"),
            booking("10:00", "11:00"),
        ]);
        assert!(index.is_occupied(day(), clock(9, 0)));
        assert!(index.is_occupied(day(), clock(10, 30)));
        assert!(!index.is_occupied(day(), clock(11, 0)));
    }
}
