//! Region edit gesture state (move / resize).
//!
//! One gesture at a time: pointer down on a region (or its resize handle)
//! selects it and records an anchor; each pointer move applies the delta
//! since the anchor through the geometry ops and re-anchors, so constraint
//! clamping never accumulates error across events.

use egui::Pos2;

use officeplan::events::RegionMoved;
use officeplan::floor_plan::RegionStore;
use officeplan::Region;

use crate::domain::region_ops;

/// What the active gesture does to the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Translate the region, clamped inside the canvas
    Move,
    /// Grow/shrink from the bottom-right, floored at the minimum size
    Resize,
}

/// State of an in-progress move or resize on the floor plan.
#[derive(Debug, Clone, Default)]
pub struct RegionEditState {
    selected_id: Option<String>,
    mode: Option<EditMode>,
    /// Pointer position (logical canvas coordinates) at the last event
    anchor_pointer: Option<Pos2>,
    /// Region geometry at the last event
    anchor_region: Option<Region>,
}

impl RegionEditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Id of the region under edit, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Mode of the active gesture, if any.
    pub fn mode(&self) -> Option<EditMode> {
        self.mode
    }

    /// Starts a gesture on `id` at `pointer` (logical coordinates).
    /// Unknown ids are a no-op.
    pub fn begin(&mut self, id: &str, pointer: Pos2, mode: EditMode, store: &RegionStore) {
        let Some(region) = store.effective(id) else {
            return;
        };
        self.selected_id = Some(id.to_string());
        self.mode = Some(mode);
        self.anchor_pointer = Some(pointer);
        self.anchor_region = Some(region);
    }

    /// Applies the pointer delta since the last event and writes the new
    /// geometry into the store as an override.
    ///
    /// Returns the emitted `RegionMoved` event, or `None` when no gesture
    /// is active.
    pub fn update(&mut self, pointer: Pos2, store: &mut RegionStore) -> Option<RegionMoved> {
        let id = self.selected_id.clone()?;
        let mode = self.mode?;
        let anchor_pointer = self.anchor_pointer?;
        let anchor_region = self.anchor_region?;

        let dx = pointer.x - anchor_pointer.x;
        let dy = pointer.y - anchor_pointer.y;

        let next = match mode {
            EditMode::Move => region_ops::moved(&anchor_region, dx, dy),
            EditMode::Resize => region_ops::resized(&anchor_region, dx, dy),
        };

        store.set_override(&id, next);

        // Re-anchor so a clamped event doesn't leave a standing offset
        self.anchor_pointer = Some(pointer);
        self.anchor_region = Some(next);

        Some(RegionMoved {
            region_id: id,
            x: next.x,
            y: next.y,
            width: next.width,
            height: next.height,
        })
    }

    /// Ends the gesture. Pointer up and pointer leave both land here; the
    /// last applied geometry simply stays in the store.
    pub fn end(&mut self) {
        self.selected_id = None;
        self.mode = None;
        self.anchor_pointer = None;
        self.anchor_region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use officeplan::{CANVAS_WIDTH, MIN_REGION_SIZE};

    fn store_with(id: &str, region: Region) -> RegionStore {
        let mut defaults = std::collections::HashMap::new();
        defaults.insert(id.to_string(), region);
        RegionStore::with_defaults(defaults)
    }

    #[test]
    fn test_begin_unknown_id_is_noop() {
        let store = store_with("1701", Region::new(100.0, 100.0, 150.0, 150.0));
        let mut edit = RegionEditState::new();
        edit.begin("9999", Pos2::new(0.0, 0.0), EditMode::Move, &store);
        assert!(!edit.is_active());
    }

    #[test]
    fn test_move_writes_override() {
        let mut store = store_with("1701", Region::new(100.0, 100.0, 150.0, 150.0));
        let mut edit = RegionEditState::new();
        edit.begin("1701", Pos2::new(500.0, 500.0), EditMode::Move, &store);

        let ev = edit.update(Pos2::new(540.0, 470.0), &mut store).unwrap();
        assert_eq!(ev.region_id, "1701");
        assert_eq!((ev.x, ev.y), (140.0, 70.0));
        assert!(store.has_override("1701"));
        assert_eq!(store.effective("1701"), Some(Region::new(140.0, 70.0, 150.0, 150.0)));
    }

    #[test]
    fn test_incremental_deltas_do_not_accumulate_clamp_error() {
        // Drag far past the left edge, then back right: the region should
        // respond immediately rather than replaying the banked overshoot
        let mut store = store_with("1701", Region::new(50.0, 100.0, 150.0, 150.0));
        let mut edit = RegionEditState::new();
        edit.begin("1701", Pos2::new(500.0, 500.0), EditMode::Move, &store);

        edit.update(Pos2::new(0.0, 500.0), &mut store);
        assert_eq!(store.effective("1701").unwrap().x, 0.0);

        edit.update(Pos2::new(30.0, 500.0), &mut store);
        assert_eq!(store.effective("1701").unwrap().x, 30.0);
    }

    #[test]
    fn test_resize_floors_and_keeps_position() {
        let mut store = store_with("1701", Region::new(100.0, 100.0, 150.0, 155.0));
        let mut edit = RegionEditState::new();
        edit.begin("1701", Pos2::new(250.0, 255.0), EditMode::Resize, &store);

        let ev = edit.update(Pos2::new(255.0, 55.0), &mut store).unwrap();
        assert_eq!(ev.width, 155.0);
        assert_eq!(ev.height, MIN_REGION_SIZE);
        assert_eq!((ev.x, ev.y), (100.0, 100.0));
    }

    #[test]
    fn test_resize_can_exceed_canvas() {
        let mut store = store_with("1701", Region::new(2400.0, 900.0, 150.0, 150.0));
        let mut edit = RegionEditState::new();
        edit.begin("1701", Pos2::new(0.0, 0.0), EditMode::Resize, &store);

        let ev = edit.update(Pos2::new(500.0, 0.0), &mut store).unwrap();
        assert!(ev.x + ev.width > CANVAS_WIDTH);
    }

    #[test]
    fn test_end_clears_selection_keeps_override() {
        let mut store = store_with("1701", Region::new(100.0, 100.0, 150.0, 150.0));
        let mut edit = RegionEditState::new();
        edit.begin("1701", Pos2::new(0.0, 0.0), EditMode::Move, &store);
        edit.update(Pos2::new(10.0, 10.0), &mut store);
        edit.end();

        assert!(!edit.is_active());
        assert_eq!(edit.selected_id(), None);
        assert!(store.has_override("1701"));
        assert_eq!(edit.update(Pos2::new(50.0, 50.0), &mut store), None);
    }
}
