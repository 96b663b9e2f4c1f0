//! Overlay styling for floor-plan regions and booking slots.
//!
//! This module decides, per region, the fill, stroke and opacity to paint
//! with, from the region's linked office and the current interaction
//! state. Styling is resolved in a fixed precedence so the result is
//! deterministic regardless of how many conditions hold at once.

use egui::Color32;

use officeplan::{Office, OfficeStatus, ThemeColors, ThemeManager};

use crate::domain::filters::FilterCriteria;

/// Opacity applied to regions dimmed by selection or filters.
pub const DIMMED_OPACITY: f32 = 0.15;

/// Stroke widths by emphasis, matching the plan's visual hierarchy.
pub const SELECTION_STROKE_WIDTH: f32 = 6.0;
pub const EDIT_STROKE_WIDTH: f32 = 6.0;
pub const HOVER_STROKE_WIDTH: f32 = 4.0;
pub const BORDER_STROKE_WIDTH: f32 = 2.0;

/// Resolved paint parameters for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
    /// 1.0 for full visibility; dimmed regions stay hit-testable
    pub opacity: f32,
}

/// Resolved paint parameters for one booking slot cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub fill: Color32,
    pub interactive: bool,
}

/// Returns a reference to the current theme's color palette.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.current_theme().colors)
}

/// Interaction state relevant to styling a single region.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionContext {
    /// Region is in the multi-select set
    pub in_selection: bool,
    /// At least one region is selected (dims the others)
    pub any_selection: bool,
    /// Region is under an active edit gesture
    pub edit_active: bool,
    /// Region is under the cursor
    pub hovered: bool,
}

/// Resolves the paint style for a region.
///
/// Fill comes from the office's status and margin sign; unlinked regions
/// get the neutral fill. Dimming applies when other regions are selected
/// or active filters exclude this one, but never during an edit gesture
/// on the region itself. Stroke precedence: selection, then edit, then
/// hover, then the plain border.
pub fn region_style(
    office: Option<&Office>,
    ctx: RegionContext,
    filter: &FilterCriteria,
    colors: &ThemeColors,
) -> RegionStyle {
    let fill = match office {
        Some(o) if o.status == OfficeStatus::Available => colors.available_fill,
        Some(o) if o.margin_percentage >= 0.0 => colors.margin_positive_fill,
        Some(_) => colors.margin_negative_fill,
        None => colors.neutral_fill,
    };

    let passes_filter = match office {
        Some(o) => filter.matches(o),
        // Unlinked regions always fail active filters
        None => !filter.is_active(),
    };

    let dimmed = (ctx.any_selection && !ctx.in_selection)
        || (filter.is_active() && !passes_filter);
    let opacity = if ctx.edit_active {
        1.0
    } else if dimmed {
        DIMMED_OPACITY
    } else {
        1.0
    };

    let (stroke, stroke_width) = if ctx.in_selection {
        (colors.selection_stroke, SELECTION_STROKE_WIDTH)
    } else if ctx.edit_active {
        (colors.edit_stroke, EDIT_STROKE_WIDTH)
    } else if ctx.hovered {
        (colors.hover_stroke, HOVER_STROKE_WIDTH)
    } else {
        (colors.border, BORDER_STROKE_WIDTH)
    };

    RegionStyle {
        fill,
        stroke,
        stroke_width,
        opacity,
    }
}

/// Resolves the paint style for a booking slot cell.
///
/// Occupied slots are inert; selected slots override the free fill.
pub fn slot_style(occupied: bool, selected: bool, colors: &ThemeColors) -> SlotStyle {
    if occupied {
        SlotStyle {
            fill: colors.slot_occupied,
            interactive: false,
        }
    } else if selected {
        SlotStyle {
            fill: colors.slot_selected,
            interactive: true,
        }
    } else {
        SlotStyle {
            fill: colors.slot_free,
            interactive: true,
        }
    }
}

/// Applies a style's opacity to a color for painting.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    if opacity >= 1.0 {
        color
    } else {
        color.gamma_multiply(opacity)
    }
}
