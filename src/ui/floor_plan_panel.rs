//! Floor plan panel UI rendering.
//!
//! Paints the office regions over a fixed logical canvas scaled to the
//! available width, with status/margin fills, selection and filter
//! dimming, edit-mode handles and a hover tooltip.

use eframe::egui;

use officeplan::{ThemeColors, CANVAS_HEIGHT, CANVAS_WIDTH, Region};

use crate::app::AppState;
use crate::domain::pointer_transform::CanvasTransform;
use crate::presentation::overlay;
use crate::state::EditMode;
use crate::ui::input::floor_plan_input::{
    self, handle_floor_plan_input, FloorPlanInputResult,
};
use crate::utils::{format_margin, format_uf};

/// Result of user interaction with the floor plan panel.
pub enum FloorPlanInteraction {
    /// A region was clicked in view mode
    RegionClicked(String),
    /// An edit gesture changed a region's geometry
    GeometryChanged(officeplan::events::RegionMoved),
}

/// Renders the floor plan canvas and handles its input.
pub fn render_floor_plan_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<FloorPlanInteraction> {
    // Keep the canvas aspect ratio; fit to the available space
    let avail = ui.available_size();
    let aspect = CANVAS_HEIGHT / CANVAS_WIDTH;
    let width = avail.x.min(avail.y / aspect).max(1.0);
    let size = egui::vec2(width, width * aspect);

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let transform = CanvasTransform::new(rect);

    // Stable paint and hit-test order: ascending office number
    let mut regions: Vec<(String, Region)> =
        state.plan.store().effective_all().into_iter().collect();
    regions.sort_by(|a, b| a.0.cmp(&b.0));

    let input_result = handle_floor_plan_input(&response, &transform, &regions, state);

    paint_canvas(ui, ctx, rect, &transform, &regions, state, colors);

    match input_result {
        FloorPlanInputResult::RegionClicked(id) => {
            Some(FloorPlanInteraction::RegionClicked(id))
        }
        FloorPlanInputResult::GeometryChanged(event) => {
            Some(FloorPlanInteraction::GeometryChanged(event))
        }
        FloorPlanInputResult::None => None,
    }
}

fn paint_canvas(
    ui: &egui::Ui,
    ctx: &egui::Context,
    rect: egui::Rect,
    transform: &CanvasTransform,
    regions: &[(String, Region)],
    state: &AppState,
    colors: &ThemeColors,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, colors.extreme_background);

    // Stroke widths are specified in logical canvas units
    let scale = rect.width() / CANVAS_WIDTH;

    for (id, region) in regions {
        let office = state.plan.office(id);
        let edit_active_here = state.region_edit.selected_id() == Some(id.as_str());

        let style = overlay::region_style(
            office,
            overlay::RegionContext {
                in_selection: state.selection.is_selected(id),
                any_selection: state.selection.any_selected(),
                edit_active: edit_active_here,
                hovered: state.selection.hovered() == Some(id.as_str()),
            },
            state.plan.filter(),
            colors,
        );

        let screen = transform.region_to_screen(region);
        painter.rect_filled(screen, 2.0, overlay::faded(style.fill, style.opacity));
        painter.rect_stroke(
            screen,
            2.0,
            egui::Stroke::new(
                (style.stroke_width * scale).max(1.0),
                overlay::faded(style.stroke, style.opacity),
            ),
            egui::StrokeKind::Inside,
        );

        painter.text(
            screen.center(),
            egui::Align2::CENTER_CENTER,
            id,
            egui::FontId::proportional((region.width * scale * 0.2).clamp(9.0, 15.0)),
            overlay::faded(colors.text, style.opacity),
        );

        if state.plan.edit_enabled() {
            let handle = floor_plan_input::resize_handle_rect(region);
            let handle_screen = egui::Rect::from_min_max(
                transform.to_screen(handle.min),
                transform.to_screen(handle.max),
            );
            painter.rect_filled(handle_screen, 1.0, colors.edit_stroke);
        }
    }

    // Tooltip follows the cursor in view mode only; edit gestures keep
    // the canvas uncluttered
    if !state.plan.edit_enabled() {
        if let Some(id) = state.selection.hovered() {
            if let Some(pos) = ui.ctx().pointer_hover_pos() {
                paint_tooltip(ctx, pos, id, state, colors);
            }
        }
    }
}

/// Renders the hover tooltip with the office's commercial details.
fn paint_tooltip(
    ctx: &egui::Context,
    pos: egui::Pos2,
    id: &str,
    state: &AppState,
    colors: &ThemeColors,
) {
    let mut lines: Vec<String> = vec![format!("Office {id}")];
    match state.plan.office(id) {
        Some(office) => {
            match &office.client_name {
                Some(client) => lines.push(format!("Client: {client}")),
                None => lines.push("Available".to_string()),
            }
            lines.push(format!(
                "{:.0} m² · {} people",
                office.square_meters,
                office.effective_capacity()
            ));
            lines.push(format!("Sale: {}", format_uf(office.sale_value_uf)));
            lines.push(format!("Billed: {}", format_uf(office.billed_value_uf)));
            lines.push(format!(
                "Cost: {} · Margin: {}",
                format_uf(office.cost_uf),
                format_margin(office.margin_percentage)
            ));
        }
        None => lines.push("No office data".to_string()),
    }

    let font_id = egui::FontId::proportional(12.0);
    let line_height = 16.0;
    let widest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as f32 * 6.5;
    let bg_rect = egui::Rect::from_min_size(
        pos + egui::vec2(14.0, 14.0),
        egui::vec2(widest + 16.0, lines.len() as f32 * line_height + 10.0),
    );

    // debug_painter draws on top of every panel
    let painter = ctx.debug_painter();
    painter.rect_filled(bg_rect, 4.0, colors.panel_background.gamma_multiply(0.95));
    painter.rect_stroke(
        bg_rect,
        4.0,
        egui::Stroke::new(1.0, colors.border),
        egui::StrokeKind::Outside,
    );

    for (i, line) in lines.iter().enumerate() {
        painter.text(
            bg_rect.min + egui::vec2(8.0, 5.0 + i as f32 * line_height),
            egui::Align2::LEFT_TOP,
            line,
            font_id.clone(),
            if i == 0 { colors.text } else { colors.text_dim },
        );
    }
}

/// Renders the edit chrome shown above the canvas: cursor hint plus the
/// focused region's live geometry.
pub fn render_edit_chrome(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        let hint = match state.region_edit.mode() {
            Some(EditMode::Move) => "Moving",
            Some(EditMode::Resize) => "Resizing",
            None => "Drag a region to move it, drag its corner to resize",
        };
        ui.colored_label(colors.edit_stroke, hint);

        if let Some(id) = state.plan.focused_region() {
            if let Some(region) = state.plan.store().effective(id) {
                ui.separator();
                ui.label(format!(
                    "Office {id} — {}",
                    crate::utils::format_geometry(
                        region.x,
                        region.y,
                        region.width,
                        region.height
                    )
                ));
            }
        }
    });
}
