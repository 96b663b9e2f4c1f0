//! Selection and hover state management.
//!
//! This module encapsulates all state related to user selection on the
//! floor plan: the set of selected regions and the region under the
//! cursor.

use std::collections::HashSet;

/// State related to user selection and hover.
///
/// Responsibilities:
/// - Tracking the multi-select set of region ids
/// - Tracking the hovered region for tooltip and highlight
/// - Providing intent-revealing selection queries
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Region ids currently selected (click toggles membership)
    selected_regions: HashSet<String>,
    /// Region id currently under the cursor
    hovered_region: Option<String>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all selection and hover state.
    pub fn clear(&mut self) {
        self.selected_regions.clear();
        self.hovered_region = None;
    }

    // ===== Selection Queries =====

    /// Returns true if `id` is in the selection set.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_regions.contains(id)
    }

    /// Returns true when at least one region is selected.
    pub fn any_selected(&self) -> bool {
        !self.selected_regions.is_empty()
    }

    /// Number of selected regions.
    pub fn selected_count(&self) -> usize {
        self.selected_regions.len()
    }

    // ===== Hover Queries =====

    /// Returns the hovered region id, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered_region.as_deref()
    }

    // ===== Mutations =====

    /// Toggles `id` in and out of the selection set.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected_regions.remove(id) {
            self.selected_regions.insert(id.to_string());
        }
    }

    /// Sets the hovered region (or `None` when the cursor is over empty
    /// canvas).
    pub fn set_hovered(&mut self, id: Option<String>) {
        self.hovered_region = id;
    }
}
