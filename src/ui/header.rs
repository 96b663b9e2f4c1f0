//! Header panel UI rendering
//!
//! Handles the top bar with demo data loading, edit mode controls,
//! coordinate persistence, filter controls and the theme selector.

use eframe::egui;
use egui::Color32;

use officeplan::OfficeStatus;

use crate::app::AppState;
use crate::domain::filters::MarginSign;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Demo Data"
    DemoDataRequested,
    /// User clicked "Save Layout"
    SaveCoordinatesRequested,
    /// User clicked "Reset Layout"
    ResetCoordinatesRequested,
}

/// Renders the application header with edit, persistence and filter
/// controls.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("🎲 Demo Data").clicked() {
            interaction = Some(HeaderInteraction::DemoDataRequested);
        }

        ui.separator();

        let edit_label = if state.plan.edit_enabled() {
            "✏ Editing"
        } else {
            "✏ Edit Layout"
        };
        if ui
            .selectable_label(state.plan.edit_enabled(), edit_label)
            .clicked()
        {
            state.plan.toggle_edit();
            state.region_edit.end();
        }

        if state.plan.edit_enabled() {
            if ui.button("💾 Save Layout").clicked() {
                interaction = Some(HeaderInteraction::SaveCoordinatesRequested);
            }
            if ui.button("↺ Reset Layout").clicked() {
                interaction = Some(HeaderInteraction::ResetCoordinatesRequested);
            }
            let overrides = state.plan.store().override_count();
            if overrides > 0 {
                ui.label(format!("{overrides} modified"));
            }
        }

        ui.separator();
        render_filter_controls(ui, state);

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}

fn render_filter_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label("Filter:");

    let filter = state.plan.filter_mut();

    let status_text = match filter.status {
        Some(OfficeStatus::Available) => "Available",
        Some(OfficeStatus::Occupied) => "Occupied",
        None => "Any status",
    };
    egui::ComboBox::from_id_salt("status_filter")
        .selected_text(status_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filter.status, None, "Any status");
            ui.selectable_value(&mut filter.status, Some(OfficeStatus::Available), "Available");
            ui.selectable_value(&mut filter.status, Some(OfficeStatus::Occupied), "Occupied");
        });

    let margin_text = match filter.margin {
        Some(MarginSign::Positive) => "Margin +",
        Some(MarginSign::Negative) => "Margin -",
        None => "Any margin",
    };
    egui::ComboBox::from_id_salt("margin_filter")
        .selected_text(margin_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filter.margin, None, "Any margin");
            ui.selectable_value(&mut filter.margin, Some(MarginSign::Positive), "Margin +");
            ui.selectable_value(&mut filter.margin, Some(MarginSign::Negative), "Margin -");
        });

    let mut client_text = filter.client.clone().unwrap_or_default();
    let response = egui::TextEdit::singleline(&mut client_text)
        .hint_text("Client…")
        .desired_width(110.0)
        .show(ui);
    if response.response.changed() {
        filter.client = if client_text.is_empty() {
            None
        } else {
            Some(client_text)
        };
    }

    if filter.is_active() && ui.button("✖ Clear").clicked() {
        filter.clear();
    }
}
