//! Floor plan state management.
//!
//! This module encapsulates the floor plan's persistent side: the region
//! store (defaults plus overrides), the office records regions link to,
//! the edit-mode flag and the active filter criteria.

use officeplan::floor_plan::RegionStore;
use officeplan::Office;

use crate::domain::filters::FilterCriteria;

/// State related to the floor plan view.
///
/// Responsibilities:
/// - Owning the region store (default geometry plus overrides)
/// - Holding office records keyed by office number
/// - Tracking edit mode and the region focused by the edit chrome
/// - Holding the active filter criteria
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    store: RegionStore,
    offices: Vec<Office>,
    edit_enabled: bool,
    /// Region whose geometry the edit chrome displays
    focused_region: Option<String>,
    filter: FilterCriteria,
}

impl PlanState {
    pub fn new() -> Self {
        Self {
            store: RegionStore::new(),
            ..Default::default()
        }
    }

    // ===== Store Access =====

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RegionStore {
        &mut self.store
    }

    // ===== Office Queries =====

    pub fn offices(&self) -> &[Office] {
        &self.offices
    }

    /// Looks up the office linked to a region id (region ids are office
    /// numbers).
    pub fn office(&self, office_number: &str) -> Option<&Office> {
        self.offices
            .iter()
            .find(|o| o.office_number == office_number)
    }

    pub fn set_offices(&mut self, offices: Vec<Office>) {
        self.offices = offices;
    }

    // ===== Edit Mode =====

    pub fn edit_enabled(&self) -> bool {
        self.edit_enabled
    }

    /// Toggles edit mode. Leaving edit mode drops the chrome focus.
    pub fn toggle_edit(&mut self) {
        self.edit_enabled = !self.edit_enabled;
        if !self.edit_enabled {
            self.focused_region = None;
        }
    }

    /// Region id shown in the coordinate readout, if any.
    pub fn focused_region(&self) -> Option<&str> {
        self.focused_region.as_deref()
    }

    pub fn set_focused_region(&mut self, id: Option<String>) {
        self.focused_region = id;
    }

    // ===== Filters =====

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterCriteria {
        &mut self.filter
    }
}
