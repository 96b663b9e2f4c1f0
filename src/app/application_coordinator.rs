//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like demo data loading,
//! coordinate synchronization and interaction routing between the UI
//! panels and the state components.

use eframe::egui;

use officeplan::events::{RegionMoved, TimeSelection};
use officeplan::sample;

use crate::app::AppState;
use crate::io::{CoordinatesClient, SyncResult};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Loading demo data into the plan and schedule
/// - Driving coordinate fetch/save workflows
/// - Applying sync completion results to application state
/// - Handling panel interactions
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Generates demo offices and bookings and installs them.
    pub fn load_demo_data(state: &mut AppState, seed: u64) {
        let data = sample::generate(state.schedule.week()[0], seed);
        state.plan.set_offices(data.offices);
        state.schedule.set_bookings(data.bookings);
        state.reset_interaction_state();
        log::info!("loaded demo data with seed {seed}");
    }

    /// Starts fetching stored coordinate overrides from the API.
    pub fn request_fetch(client: &mut CoordinatesClient, ctx: &egui::Context) {
        client.start_fetch(ctx);
    }

    /// Starts saving the current overrides to the API.
    pub fn request_save(
        state: &AppState,
        client: &mut CoordinatesClient,
        ctx: &egui::Context,
    ) {
        client.start_save(state.plan.store().save(), ctx);
    }

    /// Drops every override, restoring default geometry, and persists the
    /// now-empty layout so a later fetch cannot reinstate the old one.
    pub fn reset_coordinates(
        state: &mut AppState,
        client: &mut CoordinatesClient,
        ctx: &egui::Context,
    ) {
        state.region_edit.end();
        state.plan.store_mut().clear_all();
        state.plan.set_focused_region(None);
        state.last_region_moved = None;
        client.start_save(state.plan.store().save(), ctx);
    }

    /// Checks for sync completion and applies results to application
    /// state. Called once per frame in the update loop.
    /// Returns true if a sync operation completed (success or error).
    pub fn check_sync_completion(state: &mut AppState, client: &mut CoordinatesClient) -> bool {
        match client.check_completion() {
            SyncResult::Loaded(entries) => {
                state.plan.store_mut().load(entries);
                state.error_message = None;
                true
            }
            SyncResult::LoadFailed(msg) => {
                // Defaults remain in effect; the app stays usable
                state.error_message = Some(format!("Could not load layout: {msg}"));
                true
            }
            SyncResult::Saved => {
                state.error_message = None;
                true
            }
            SyncResult::SaveFailed(msg) => {
                state.error_message = Some(format!("Could not save layout: {msg}"));
                true
            }
            SyncResult::None => false,
        }
    }

    /// Handles a region click in view mode: toggles multi-select.
    pub fn handle_region_click(state: &mut AppState, id: String) {
        state.selection.toggle(&id);
    }

    /// Records a committed slot selection.
    pub fn handle_time_selection(state: &mut AppState, selection: TimeSelection) {
        log::info!(
            "slot selection committed: {} {}-{}",
            selection.date,
            selection.start_time,
            selection.end_time
        );
        state.last_time_selection = Some(selection);
    }

    /// Records the latest geometry event from an edit gesture.
    pub fn handle_region_moved(state: &mut AppState, event: RegionMoved) {
        state.last_region_moved = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use officeplan::Region;

    #[test]
    fn test_demo_data_populates_state() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_demo_data(&mut state, 7);
        assert!(!state.plan.offices().is_empty());
        assert!(!state.schedule.bookings().is_empty());
    }

    #[test]
    fn test_reset_coordinates_drops_overrides() {
        let mut state = AppState::new();
        state
            .plan
            .store_mut()
            .set_override("1701", Region::new(5.0, 5.0, 100.0, 100.0));
        assert_eq!(state.plan.store().override_count(), 1);

        let mut client = CoordinatesClient::new(None);
        let ctx = egui::Context::default();
        ApplicationCoordinator::reset_coordinates(&mut state, &mut client, &ctx);
        assert_eq!(state.plan.store().override_count(), 0);
        assert_eq!(state.plan.focused_region(), None);
        assert!(state.plan.store().save().is_empty());
    }

    #[test]
    fn test_reset_posts_empty_layout_to_remote() {
        let mut state = AppState::new();
        state
            .plan
            .store_mut()
            .set_override("1701", Region::new(5.0, 5.0, 100.0, 100.0));

        // Port 1 refuses connections, so the background save resolves fast
        let mut client = CoordinatesClient::new(Some("http://127.0.0.1:1".to_string()));
        let ctx = egui::Context::default();
        ApplicationCoordinator::reset_coordinates(&mut state, &mut client, &ctx);

        assert!(state.plan.store().save().is_empty());

        // The save workflow must have started: an outcome arrives even
        // though the endpoint is unreachable
        let mut result = SyncResult::None;
        for _ in 0..200 {
            result = client.check_completion();
            if !matches!(result, SyncResult::None) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(matches!(result, SyncResult::Saved | SyncResult::SaveFailed(_)));
    }

    #[test]
    fn test_region_click_toggles_selection() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_region_click(&mut state, "1701".to_string());
        assert!(state.selection.is_selected("1701"));
        ApplicationCoordinator::handle_region_click(&mut state, "1701".to_string());
        assert!(!state.selection.is_selected("1701"));
    }
}
