//! State management modules for the office plan GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Schedule state (anchor date, bookings, occupancy)
//! - Plan state (region store, offices, edit mode, filters)
//! - Drag select state (slot drag gesture)
//! - Region edit state (move/resize gesture)
//! - Selection state (multi-select set, hovered region)
//! - Theme state (theme manager, current theme)
//! - Layout state (split ratio)

mod schedule_state;
mod plan_state;
mod drag_select;
mod region_edit;
mod selection;
mod theme_state;
mod layout_state;

pub use schedule_state::ScheduleState;
pub use plan_state::PlanState;
pub use drag_select::DragSelectState;
pub use region_edit::{EditMode, RegionEditState};
pub use selection::SelectionState;
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
