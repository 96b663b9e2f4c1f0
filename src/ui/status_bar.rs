//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying plan and selection summary.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::io::CoordinatesClient;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, client: &CoordinatesClient) {
    ui.horizontal(|ui| {
        let office_count = state.plan.offices().len();
        let region_count = state.plan.store().effective_all().len();
        ui.label(
            RichText::new(format!("Regions: {region_count} | Offices: {office_count}")).strong(),
        );

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Overrides: {} | Bookings: {}",
            state.plan.store().override_count(),
            state.schedule.bookings().len()
        ));

        if state.selection.any_selected() {
            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new(format!("{} region(s) selected", state.selection.selected_count()))
                    .color(egui::Color32::YELLOW),
            );
        }

        if let Some(event) = &state.last_region_moved {
            ui.label(RichText::new("|").strong());
            ui.label(format!(
                "Office {}: {}",
                event.region_id,
                crate::utils::format_geometry(event.x, event.y, event.width, event.height)
            ));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if client.is_busy() {
                ui.spinner();
                ui.label("Syncing…");
            } else if client.is_remote() {
                ui.label("Remote layout");
            } else {
                ui.label("Local layout");
            }
        });
    });
}
