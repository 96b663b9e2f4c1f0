//! Booking schedule panel UI rendering.
//!
//! Week navigation controls, day headers and the slot grid. The grid is
//! one interactive canvas; cells are painted and hit-tested through
//! `SlotGrid` so a drag can sweep across many slots in a single frame.

use chrono::Timelike;
use eframe::egui;

use officeplan::events::TimeSelection;
use officeplan::ThemeColors;

use crate::app::AppState;
use crate::presentation::overlay;
use crate::ui::input::schedule_input::{
    handle_schedule_input, SlotGrid, ROW_HEIGHT, TIME_COL_WIDTH,
};
use crate::utils::format_day_label;

/// Result of user interaction with the schedule panel.
pub enum ScheduleInteraction {
    /// A slot drag was committed
    TimeSelected(TimeSelection),
}

/// Renders the weekly booking grid and handles its input.
pub fn render_schedule_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<ScheduleInteraction> {
    let mut interaction = None;

    render_week_nav(ui, state);
    ui.separator();

    let week = state.schedule.week();
    let slots = state.schedule.slots().to_vec();

    render_day_headers(ui, &week, colors);

    egui::ScrollArea::vertical()
        .id_salt("schedule_grid")
        .show(ui, |ui| {
            let grid_width = ui.available_width();
            let grid_height = slots.len() as f32 * ROW_HEIGHT;
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(grid_width, grid_height),
                egui::Sense::click_and_drag(),
            );

            let grid = SlotGrid::new(rect, week, slots);
            if let Some(selection) = handle_schedule_input(&response, &grid, state) {
                interaction = Some(ScheduleInteraction::TimeSelected(selection));
            }

            paint_grid(ui, &grid, state, colors);
        });

    render_selection_indicator(ui, state, colors);

    interaction
}

fn render_week_nav(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("◀ Previous").clicked() {
            state.schedule.change_week(-1);
        }
        if ui.button("Today").clicked() {
            state.schedule.go_to_today();
        }
        if ui.button("Next ▶").clicked() {
            state.schedule.change_week(1);
        }

        let week = state.schedule.week();
        ui.label(format!(
            "Week of {} — {}",
            week[0].format("%d %b %Y"),
            week[6].format("%d %b %Y")
        ));
    });
}

fn render_day_headers(ui: &mut egui::Ui, week: &[chrono::NaiveDate; 7], colors: &ThemeColors) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let day_width = (rect.width() - TIME_COL_WIDTH) / 7.0;
    let today = chrono::Local::now().date_naive();

    for (i, day) in week.iter().enumerate() {
        let x = rect.left() + TIME_COL_WIDTH + i as f32 * day_width;
        let cell = egui::Rect::from_min_size(
            egui::pos2(x, rect.top()),
            egui::vec2(day_width, ROW_HEIGHT),
        );
        if *day == today {
            painter.rect_filled(cell, 2.0, colors.hover);
        }
        painter.text(
            cell.center(),
            egui::Align2::CENTER_CENTER,
            format_day_label(*day),
            egui::FontId::proportional(12.0),
            if *day == today { colors.text } else { colors.text_dim },
        );
    }
}

fn paint_grid(ui: &egui::Ui, grid: &SlotGrid, state: &AppState, colors: &ThemeColors) {
    let painter = ui.painter_at(grid.rect());

    for (slot_idx, &clock) in grid.slots().iter().enumerate() {
        // Time label on full hours only, matching the grid's visual rhythm
        if clock.minute() == 0 {
            painter.text(
                grid.label_rect(slot_idx).right_center(),
                egui::Align2::RIGHT_CENTER,
                officeplan::time_grid::format_clock(clock),
                egui::FontId::proportional(11.0),
                colors.text_dim,
            );
        }

        for (day_idx, &day) in grid.week().iter().enumerate() {
            let occupied = state.schedule.is_occupied(day, clock);
            let selected = state.drag_select.is_selected(day, clock);
            let style = overlay::slot_style(occupied, selected, colors);

            let cell = grid.cell_rect(day_idx, slot_idx).shrink(1.0);
            painter.rect_filled(cell, 2.0, style.fill);
            // Occupied cells are inert and drawn flat, without a border
            if style.interactive {
                painter.rect_stroke(
                    cell,
                    2.0,
                    egui::Stroke::new(1.0, colors.border),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }
}

fn render_selection_indicator(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    if state.drag_select.is_dragging() {
        let count = state.drag_select.selected_count();
        ui.colored_label(
            colors.selection_stroke,
            format!(
                "{} slot(s) selected — {} min",
                count,
                count as i64 * officeplan::time_grid::SLOT_MINUTES
            ),
        );
    } else if let Some(selection) = &state.last_time_selection {
        ui.label(format!(
            "Last selection: {} {} — {} ({} min)",
            selection.date.format("%d %b"),
            selection.start_time,
            selection.end_time,
            selection_minutes(selection)
        ));
    }
}

/// Total minutes of a committed range, from its clock strings.
fn selection_minutes(selection: &TimeSelection) -> i64 {
    match (
        officeplan::time_grid::parse_clock(&selection.start_time),
        officeplan::time_grid::parse_clock(&selection.end_time),
    ) {
        (Some(start), Some(end)) => (end - start).num_minutes(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::selection_minutes;
    use officeplan::events::TimeSelection;

    #[test]
    fn test_hour_labels_only_on_full_hours() {
        let slots = officeplan::time_grid::generate_slots();
        let labeled = slots.iter().filter(|s| s.minute() == 0).count();
        assert_eq!(labeled, 13);
    }

    #[test]
    fn test_selection_minutes_from_committed_range() {
        let selection = TimeSelection {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_time: "09:30".to_string(),
            end_time: "11:00".to_string(),
        };
        assert_eq!(selection_minutes(&selection), 90);
    }

    #[test]
    fn test_selection_minutes_tolerates_bad_clock() {
        let selection = TimeSelection {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_time: "bogus".to_string(),
            end_time: "11:00".to_string(),
        };
        assert_eq!(selection_minutes(&selection), 0);
    }
}
