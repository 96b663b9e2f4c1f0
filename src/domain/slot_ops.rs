//! Pure span building for the slot drag gesture.
//!
//! Given the anchor slot and the slot currently under the pointer, the
//! selection is every slot between them (inclusive, either direction)
//! minus the individually occupied ones. Occupied slots inside the span
//! are filtered out rather than truncating the range, so the selection
//! can be non-contiguous; that is long-standing intended behavior of the
//! booking picker.

use chrono::{NaiveDate, NaiveTime};

use officeplan::booking::OccupancyIndex;
use officeplan::time_grid;

/// Rebuilds the selection for a drag from `anchor` to `current` on `day`.
///
/// Slots off the grid leave the result as just the (free) anchor; callers
/// only pass grid-aligned clocks, so this is a belt against stale input.
pub fn build_selection(
    slots: &[NaiveTime],
    day: NaiveDate,
    anchor: NaiveTime,
    current: NaiveTime,
    occupancy: &OccupancyIndex,
) -> Vec<NaiveTime> {
    let (Some(anchor_idx), Some(current_idx)) = (
        time_grid::slot_index(slots, anchor),
        time_grid::slot_index(slots, current),
    ) else {
        return if occupancy.is_occupied(day, anchor) {
            Vec::new()
        } else {
            vec![anchor]
        };
    };

    let lo = anchor_idx.min(current_idx);
    let hi = anchor_idx.max(current_idx);

    slots[lo..=hi]
        .iter()
        .copied()
        .filter(|&slot| !occupancy.is_occupied(day, slot))
        .collect()
}

/// Derives the committed (start, exclusive end) pair from a selection.
///
/// The end is one slot duration past the last selected slot, even when a
/// gap means that slot is not adjacent to the start.
pub fn selection_bounds(selection: &[NaiveTime]) -> Option<(NaiveTime, NaiveTime)> {
    let first = *selection.first()?;
    let last = *selection.last()?;
    Some((first, time_grid::add_minutes(last, time_grid::SLOT_MINUTES)))
}
