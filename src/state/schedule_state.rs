//! Booking schedule state management.
//!
//! This module encapsulates the weekly booking view: the anchor date that
//! picks the displayed week, the loaded bookings, and the occupancy index
//! derived from them.

use chrono::{Duration, NaiveDate, NaiveTime};

use officeplan::booking::{Booking, OccupancyIndex};
use officeplan::time_grid;

/// State related to the weekly booking schedule.
///
/// Responsibilities:
/// - Tracking the anchor date and deriving the Monday-based week
/// - Holding loaded bookings and the occupancy index built from them
/// - Providing slot occupancy queries for the grid
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Any date inside the displayed week
    anchor_date: NaiveDate,
    /// Daily slot sequence, fixed for the lifetime of the app
    slots: Vec<NaiveTime>,
    /// Loaded bookings, source of the occupancy index
    bookings: Vec<Booking>,
    /// Occupancy derived from `bookings`; rebuilt on every change
    occupancy: OccupancyIndex,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl ScheduleState {
    /// Creates a schedule state showing the week containing `anchor_date`,
    /// with no bookings loaded.
    pub fn new(anchor_date: NaiveDate) -> Self {
        Self {
            anchor_date,
            slots: time_grid::generate_slots(),
            bookings: Vec::new(),
            occupancy: OccupancyIndex::build(&[]),
        }
    }

    // ===== Week Queries =====

    /// The 7 dates of the displayed week, Monday first.
    pub fn week(&self) -> [NaiveDate; 7] {
        time_grid::week_days(self.anchor_date)
    }

    /// Daily slot sequence (shared by every day of the week).
    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    // ===== Booking Queries =====

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    /// Returns true if the slot at (`day`, `clock`) is covered by a
    /// booking.
    pub fn is_occupied(&self, day: NaiveDate, clock: NaiveTime) -> bool {
        self.occupancy.is_occupied(day, clock)
    }

    // ===== Mutations =====

    /// Replaces the loaded bookings and rebuilds the occupancy index.
    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.occupancy = OccupancyIndex::build(&bookings);
        self.bookings = bookings;
    }

    /// Moves the displayed week by `delta` weeks (negative for past).
    pub fn change_week(&mut self, delta: i64) {
        self.anchor_date += Duration::weeks(delta);
    }

    /// Jumps back to the week containing today.
    pub fn go_to_today(&mut self) {
        self.anchor_date = chrono::Local::now().date_naive();
    }
}
