//! Floor plan input handling for region selection, move and resize.
//!
//! This module handles mouse input over the floor plan canvas:
//! - Click to toggle a region in the multi-select set (view mode)
//! - Drag a region body to move it (edit mode)
//! - Drag the bottom-right handle to resize it (edit mode)
//! - Hover tracking for tooltip and highlight
//!
//! Hit testing runs in logical canvas coordinates so behavior does not
//! depend on the window size.

use eframe::egui;

use officeplan::events::RegionMoved;
use officeplan::Region;

use crate::app::AppState;
use crate::domain::pointer_transform::CanvasTransform;
use crate::state::EditMode;

/// Side of the square resize handle, in logical canvas units.
pub const RESIZE_HANDLE_SIZE: f32 = 15.0;

/// Result of floor plan input handling.
pub enum FloorPlanInputResult {
    /// No interaction occurred
    None,
    /// A region was clicked in view mode (toggle selection)
    RegionClicked(String),
    /// An edit gesture changed a region's geometry
    GeometryChanged(RegionMoved),
}

/// Returns the logical-space rect of a region's resize handle.
pub fn resize_handle_rect(region: &Region) -> egui::Rect {
    let corner = egui::pos2(region.x + region.width, region.y + region.height);
    egui::Rect::from_min_max(
        egui::pos2(corner.x - RESIZE_HANDLE_SIZE, corner.y - RESIZE_HANDLE_SIZE),
        corner,
    )
}

fn region_rect(region: &Region) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(region.x, region.y),
        egui::vec2(region.width, region.height),
    )
}

/// Finds the region under `pointer` (logical coordinates) and what a drag
/// starting there would do.
///
/// Regions are tested in reverse id order so that, where regions overlap,
/// the later-numbered one wins, matching paint order. The resize handle
/// only hits in edit mode.
pub fn hit_test(
    regions: &[(String, Region)],
    pointer: egui::Pos2,
    edit_enabled: bool,
) -> Option<(String, EditMode)> {
    for (id, region) in regions.iter().rev() {
        if edit_enabled && resize_handle_rect(region).contains(pointer) {
            return Some((id.clone(), EditMode::Resize));
        }
        if region_rect(region).contains(pointer) {
            return Some((id.clone(), EditMode::Move));
        }
    }
    None
}

/// Handles all floor plan input events and updates selection/edit state.
///
/// `regions` must be the same id-sorted list the panel painted this frame.
pub fn handle_floor_plan_input(
    response: &egui::Response,
    transform: &CanvasTransform,
    regions: &[(String, Region)],
    state: &mut AppState,
) -> FloorPlanInputResult {
    let mut result = FloorPlanInputResult::None;

    let pointer_logical = response
        .hover_pos()
        .or_else(|| response.interact_pointer_pos())
        .and_then(|p| transform.to_logical(p));

    let hit = pointer_logical.and_then(|p| hit_test(regions, p, state.plan.edit_enabled()));

    // Hover tracking (drives tooltip and hover stroke)
    state
        .selection
        .set_hovered(hit.as_ref().map(|(id, _)| id.clone()));

    if state.plan.edit_enabled() {
        if response.drag_started() {
            if let (Some((id, mode)), Some(pointer)) = (&hit, pointer_logical) {
                state
                    .region_edit
                    .begin(id, pointer, *mode, state.plan.store());
                state.plan.set_focused_region(Some(id.clone()));
            }
        }

        if state.region_edit.is_active() {
            if response.dragged() {
                if let Some(pointer) = pointer_logical {
                    if let Some(event) =
                        state.region_edit.update(pointer, state.plan.store_mut())
                    {
                        result = FloorPlanInputResult::GeometryChanged(event);
                    }
                }
            }

            // Pointer up and pointer leaving the canvas end the gesture
            // the same way: the last applied geometry stands
            let pointer_inside = response
                .hover_pos()
                .map(|p| transform.screen_rect().contains(p))
                .unwrap_or(false);
            if response.drag_stopped() || !pointer_inside {
                state.region_edit.end();
            }
        }
    } else if response.clicked() {
        if let Some((id, _)) = hit {
            result = FloorPlanInputResult::RegionClicked(id);
        }
    }

    result
}
