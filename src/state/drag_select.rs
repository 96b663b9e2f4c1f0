//! Slot drag-selection gesture state.
//!
//! Pointer state machine for the weekly booking grid: Idle until the
//! pointer goes down on a free slot, Dragging until a terminating event
//! (release, or the pointer leaving the grid) commits whatever is selected
//! at that instant. There is no explicit cancel.

use chrono::{NaiveDate, NaiveTime};

use officeplan::booking::OccupancyIndex;
use officeplan::events::TimeSelection;
use officeplan::time_grid;

use crate::domain::slot_ops;

/// State of an in-progress slot drag on the booking grid.
///
/// Responsibilities:
/// - Anchoring the gesture to the slot where the pointer went down
/// - Rebuilding the selection as the pointer moves over the grid
/// - Committing the selection as a `TimeSelection` on gesture end
#[derive(Debug, Clone, Default)]
pub struct DragSelectState {
    /// Day and slot where the drag started; `None` while idle
    anchor: Option<(NaiveDate, NaiveTime)>,
    /// Selected slots, all on the anchor day, possibly non-contiguous
    selection: Vec<NaiveTime>,
}

impl DragSelectState {
    /// Creates an idle drag state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the anchor day while dragging.
    pub fn anchor_day(&self) -> Option<NaiveDate> {
        self.anchor.map(|(day, _)| day)
    }

    /// Returns true if `clock` on `day` is currently part of the selection.
    pub fn is_selected(&self, day: NaiveDate, clock: NaiveTime) -> bool {
        self.anchor_day() == Some(day) && self.selection.contains(&clock)
    }

    /// Number of currently selected slots.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Pointer went down on a slot. Occupied slots refuse the gesture;
    /// otherwise the slot becomes the anchor and sole selection.
    pub fn pointer_down(&mut self, day: NaiveDate, clock: NaiveTime, occupancy: &OccupancyIndex) {
        if occupancy.is_occupied(day, clock) {
            return;
        }
        self.anchor = Some((day, clock));
        self.selection = vec![clock];
    }

    /// Pointer moved over a slot while dragging.
    ///
    /// Events on a different day than the anchor are ignored and the prior
    /// selection is retained; a gesture never crosses days. Otherwise the
    /// selection is rebuilt over the span between anchor and pointer, with
    /// occupied slots filtered out.
    pub fn pointer_over(
        &mut self,
        slots: &[NaiveTime],
        day: NaiveDate,
        clock: NaiveTime,
        occupancy: &OccupancyIndex,
    ) {
        let Some((anchor_day, anchor_clock)) = self.anchor else {
            return;
        };
        if day != anchor_day {
            return;
        }
        self.selection = slot_ops::build_selection(slots, day, anchor_clock, clock, occupancy);
    }

    /// Terminates the gesture (pointer up and pointer leave are handled
    /// identically) and commits the selection as it stands.
    ///
    /// Returns the emitted `TimeSelection`, or `None` when nothing was
    /// selected. The state returns to idle either way.
    pub fn finish(&mut self) -> Option<TimeSelection> {
        let anchor = self.anchor.take();
        let selection = std::mem::take(&mut self.selection);

        let (day, _) = anchor?;
        let (start, end) = slot_ops::selection_bounds(&selection)?;

        Some(TimeSelection {
            date: day,
            start_time: time_grid::format_clock(start),
            end_time: time_grid::format_clock(end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use officeplan::Booking;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn occupancy(intervals: &[(&str, &str)]) -> OccupancyIndex {
        let bookings: Vec<Booking> = intervals
            .iter()
            .map(|&(s, e)| Booking {
                day: day(),
                start_clock: s.to_string(),
                end_clock: e.to_string(),
                client_label: String::new(),
            })
            .collect();
        OccupancyIndex::build(&bookings)
    }

    #[test]
    fn test_down_on_occupied_slot_is_noop() {
        let occ = occupancy(&[("10:00", "11:00")]);
        let mut drag = DragSelectState::new();
        drag.pointer_down(day(), clock(10, 0), &occ);
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(), None);
    }

    #[test]
    fn test_simple_drag_commits_full_range() {
        let slots = time_grid::generate_slots();
        let occ = occupancy(&[]);
        let mut drag = DragSelectState::new();

        drag.pointer_down(day(), clock(9, 0), &occ);
        drag.pointer_over(&slots, day(), clock(10, 0), &occ);
        assert!(drag.is_selected(day(), clock(9, 30)));

        let sel = drag.finish().unwrap();
        assert_eq!(sel.date, day());
        assert_eq!(sel.start_time, "09:00");
        assert_eq!(sel.end_time, "10:30");
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_gap_scenario() {
        // Booking occupies 10:00-11:00; dragging 09:30 -> 10:30 selects
        // {09:30, 10:30} and emits 09:30-11:00
        let slots = time_grid::generate_slots();
        let occ = occupancy(&[("10:00", "11:00")]);
        let mut drag = DragSelectState::new();

        drag.pointer_down(day(), clock(9, 30), &occ);
        drag.pointer_over(&slots, day(), clock(10, 30), &occ);
        assert_eq!(drag.selected_count(), 2);
        assert!(drag.is_selected(day(), clock(9, 30)));
        assert!(!drag.is_selected(day(), clock(10, 0)));
        assert!(drag.is_selected(day(), clock(10, 30)));

        let sel = drag.finish().unwrap();
        assert_eq!(sel.start_time, "09:30");
        assert_eq!(sel.end_time, "11:00");
    }

    #[test]
    fn test_cross_day_move_ignored() {
        let slots = time_grid::generate_slots();
        let occ = occupancy(&[]);
        let other_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut drag = DragSelectState::new();

        drag.pointer_down(day(), clock(9, 0), &occ);
        drag.pointer_over(&slots, day(), clock(9, 30), &occ);
        drag.pointer_over(&slots, other_day, clock(12, 0), &occ);

        // Prior selection retained
        assert_eq!(drag.selected_count(), 2);
        let sel = drag.finish().unwrap();
        assert_eq!(sel.date, day());
        assert_eq!(sel.end_time, "10:00");
    }

    #[test]
    fn test_anchor_only_commit() {
        let occ = occupancy(&[]);
        let mut drag = DragSelectState::new();
        drag.pointer_down(day(), clock(14, 0), &occ);
        let sel = drag.finish().unwrap();
        assert_eq!(sel.start_time, "14:00");
        assert_eq!(sel.end_time, "14:30");
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let slots = time_grid::generate_slots();
        let occ = occupancy(&[]);
        let mut drag = DragSelectState::new();
        drag.pointer_over(&slots, day(), clock(9, 0), &occ);
        assert_eq!(drag.finish(), None);
    }
}
