//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, floor plan, schedule, status) and
//! manages their layout and interaction routing.

use eframe::egui;

use officeplan::events::{RegionMoved, TimeSelection};

use crate::app::AppState;
use crate::io::CoordinatesClient;
use crate::presentation::overlay;
use crate::ui::{floor_plan_panel, header, schedule_panel, status_bar};

/// Result of panel interactions that need to be handled by the
/// application coordinator.
pub enum PanelInteraction {
    /// User requested fresh demo data
    DemoDataRequested,
    /// User requested saving coordinate overrides
    SaveCoordinatesRequested,
    /// User requested resetting coordinates to defaults
    ResetCoordinatesRequested,
    /// A region was clicked in view mode
    RegionClicked(String),
    /// An edit gesture changed a region's geometry
    RegionGeometryChanged(RegionMoved),
    /// A slot drag was committed
    TimeSelected(TimeSelection),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        client: &CoordinatesClient,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = overlay::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::DemoDataRequested => {
                        PanelInteraction::DemoDataRequested
                    }
                    header::HeaderInteraction::SaveCoordinatesRequested => {
                        PanelInteraction::SaveCoordinatesRequested
                    }
                    header::HeaderInteraction::ResetCoordinatesRequested => {
                        PanelInteraction::ResetCoordinatesRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, client);
        });

        // Schedule panel above the status panel
        let total_height = ctx.content_rect().height();
        let schedule_response = egui::TopBottomPanel::bottom("schedule_panel")
            .default_height(total_height * (1.0 - state.layout.split_ratio()))
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    ui.heading("Weekly Bookings");
                    ui.separator();
                    if let Some(schedule_panel::ScheduleInteraction::TimeSelected(sel)) =
                        schedule_panel::render_schedule_panel(ui, state, &theme_colors)
                    {
                        interaction = Some(PanelInteraction::TimeSelected(sel));
                    }
                });
            });

        // Remember the user-resized split for the next session
        if total_height > 0.0 {
            let schedule_height = schedule_response.response.rect.height();
            state
                .layout
                .set_split_ratio(1.0 - schedule_height / total_height);
        }

        // Central panel: floor plan
        let plan_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(plan_frame).show(ctx, |ui| {
            ui.heading("Floor Plan");
            if state.plan.edit_enabled() {
                floor_plan_panel::render_edit_chrome(ui, state, &theme_colors);
            }
            ui.separator();

            if let Some(plan_interaction) =
                floor_plan_panel::render_floor_plan_panel(ui, ctx, state, &theme_colors)
            {
                interaction = Some(match plan_interaction {
                    floor_plan_panel::FloorPlanInteraction::RegionClicked(id) => {
                        PanelInteraction::RegionClicked(id)
                    }
                    floor_plan_panel::FloorPlanInteraction::GeometryChanged(event) => {
                        PanelInteraction::RegionGeometryChanged(event)
                    }
                });
            }
        });

        interaction
    }
}
