//! Booking grid input handling for the slot drag-selection gesture.
//!
//! The whole week grid is a single interactive canvas; the pointer
//! position is mapped to a (day, slot) cell arithmetically. Releasing the
//! button and leaving the grid both commit the current selection.

use chrono::{NaiveDate, NaiveTime};
use eframe::egui;

use officeplan::events::TimeSelection;

use crate::app::AppState;

/// Width of the leading time-label column, in points.
pub const TIME_COL_WIDTH: f32 = 52.0;

/// Height of one slot row, in points.
pub const ROW_HEIGHT: f32 = 22.0;

/// Geometry of the week grid for one frame: maps between screen
/// positions and (day, slot) cells.
pub struct SlotGrid {
    rect: egui::Rect,
    week: [NaiveDate; 7],
    slots: Vec<NaiveTime>,
}

impl SlotGrid {
    pub fn new(rect: egui::Rect, week: [NaiveDate; 7], slots: Vec<NaiveTime>) -> Self {
        Self { rect, week, slots }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn week(&self) -> &[NaiveDate; 7] {
        &self.week
    }

    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    /// Width of one day column.
    pub fn day_width(&self) -> f32 {
        (self.rect.width() - TIME_COL_WIDTH) / 7.0
    }

    /// Screen rect of the cell at (`day_idx`, `slot_idx`).
    pub fn cell_rect(&self, day_idx: usize, slot_idx: usize) -> egui::Rect {
        let x = self.rect.left() + TIME_COL_WIDTH + day_idx as f32 * self.day_width();
        let y = self.rect.top() + slot_idx as f32 * ROW_HEIGHT;
        egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(self.day_width(), ROW_HEIGHT))
    }

    /// Screen rect of the time label for `slot_idx`.
    pub fn label_rect(&self, slot_idx: usize) -> egui::Rect {
        let y = self.rect.top() + slot_idx as f32 * ROW_HEIGHT;
        egui::Rect::from_min_size(
            egui::pos2(self.rect.left(), y),
            egui::vec2(TIME_COL_WIDTH, ROW_HEIGHT),
        )
    }

    /// Maps a screen position to the (day, slot) cell under it, if any.
    /// The time-label column maps to no cell.
    pub fn slot_at(&self, pos: egui::Pos2) -> Option<(NaiveDate, NaiveTime)> {
        if !self.rect.contains(pos) {
            return None;
        }
        let x = pos.x - self.rect.left() - TIME_COL_WIDTH;
        if x < 0.0 {
            return None;
        }
        let day_idx = (x / self.day_width()) as usize;
        let slot_idx = ((pos.y - self.rect.top()) / ROW_HEIGHT) as usize;
        if day_idx >= 7 || slot_idx >= self.slots.len() {
            return None;
        }
        Some((self.week[day_idx], self.slots[slot_idx]))
    }
}

/// Handles pointer input over the week grid and drives the drag state.
///
/// Returns the committed `TimeSelection` on the frame the gesture ends.
pub fn handle_schedule_input(
    response: &egui::Response,
    grid: &SlotGrid,
    state: &mut AppState,
) -> Option<TimeSelection> {
    let pointer = response
        .hover_pos()
        .or_else(|| response.interact_pointer_pos());
    let cell = pointer.and_then(|p| grid.slot_at(p));

    if response.drag_started() || response.clicked() {
        if let Some((day, clock)) = cell {
            state
                .drag_select
                .pointer_down(day, clock, state.schedule.occupancy());
        }
    }

    if state.drag_select.is_dragging() {
        if let Some((day, clock)) = cell {
            state.drag_select.pointer_over(
                state.schedule.slots(),
                day,
                clock,
                state.schedule.occupancy(),
            );
        }

        let pointer_inside = pointer.map(|p| grid.rect().contains(p)).unwrap_or(false);
        let released = response.drag_stopped()
            || !response.ctx.input(|i| i.pointer.primary_down());
        if released || !pointer_inside {
            return state.drag_select.finish();
        }
    }

    None
}
