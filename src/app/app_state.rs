//! Centralized application state for the office plan GUI.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's
//! state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use officeplan::events::{RegionMoved, TimeSelection};

use crate::state::{
    DragSelectState, LayoutState, PlanState, RegionEditState, ScheduleState, SelectionState,
    ThemeState,
};

/// Main application state composed of focused state components.
///
/// Each component has:
/// - Private fields to enforce invariants
/// - Intent-revealing public methods
/// - Clear separation of concerns
pub struct AppState {
    // ===== Focused State Components =====
    /// Weekly schedule: anchor date, bookings, occupancy
    pub schedule: ScheduleState,

    /// Floor plan: region store, offices, edit mode, filters
    pub plan: PlanState,

    /// Multi-select set and hovered region
    pub selection: SelectionState,

    /// Slot drag gesture state
    pub drag_select: DragSelectState,

    /// Region move/resize gesture state
    pub region_edit: RegionEditState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Most recently committed slot selection
    pub last_time_selection: Option<TimeSelection>,

    /// Most recent region geometry event
    pub last_region_moved: Option<RegionMoved>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            schedule: ScheduleState::default(),
            plan: PlanState::new(),
            selection: SelectionState::new(),
            drag_select: DragSelectState::new(),
            region_edit: RegionEditState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            last_time_selection: None,
            last_region_moved: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from
    /// storage.
    pub fn with_theme_and_layout(theme_name: String, layout: LayoutState) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout,
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Clears transient interaction state, e.g. when fresh data arrives.
    pub fn reset_interaction_state(&mut self) {
        self.selection.clear();
        self.drag_select = DragSelectState::new();
        self.region_edit.end();
        self.error_message = None;
    }
}
