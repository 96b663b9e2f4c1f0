//! Pointer coordinate transformation between screen and canvas space.
//!
//! The floor plan lives in a fixed 2500x1000 logical coordinate space
//! regardless of on-screen size. This module maps device/viewport pointer
//! positions into that space (and back, for painting). The transform is
//! rebuilt from the current canvas rect on every frame, so window resizes
//! between pointer events are handled for free.
//!
//! These functions are stateless and can be tested without a real canvas.

use eframe::egui;
use officeplan::{Region, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Maps screen coordinates to the canvas logical space for one frame.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    screen_rect: egui::Rect,
}

impl CanvasTransform {
    /// Creates a transform for the canvas currently occupying `screen_rect`.
    pub fn new(screen_rect: egui::Rect) -> Self {
        Self { screen_rect }
    }

    /// Returns the screen rect this transform was built for.
    pub fn screen_rect(&self) -> egui::Rect {
        self.screen_rect
    }

    /// Converts a screen position to canvas logical coordinates.
    ///
    /// Returns `None` when the canvas is degenerate (not yet laid out or
    /// zero-sized); the caller must drop the pointer event rather than
    /// guess a position.
    pub fn to_logical(&self, screen: egui::Pos2) -> Option<egui::Pos2> {
        if self.screen_rect.width() <= 0.0 || self.screen_rect.height() <= 0.0 {
            return None;
        }
        let nx = (screen.x - self.screen_rect.left()) / self.screen_rect.width();
        let ny = (screen.y - self.screen_rect.top()) / self.screen_rect.height();
        Some(egui::pos2(nx * CANVAS_WIDTH, ny * CANVAS_HEIGHT))
    }

    /// Converts a canvas logical position to screen coordinates.
    pub fn to_screen(&self, logical: egui::Pos2) -> egui::Pos2 {
        egui::pos2(
            self.screen_rect.left() + logical.x / CANVAS_WIDTH * self.screen_rect.width(),
            self.screen_rect.top() + logical.y / CANVAS_HEIGHT * self.screen_rect.height(),
        )
    }

    /// Converts a floor-plan region to its on-screen rectangle.
    pub fn region_to_screen(&self, region: &Region) -> egui::Rect {
        egui::Rect::from_min_max(
            self.to_screen(egui::pos2(region.x, region.y)),
            self.to_screen(egui::pos2(region.x + region.width, region.y + region.height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> CanvasTransform {
        // A 500x200 canvas at offset (100, 50): scale factor 5 both axes
        CanvasTransform::new(egui::Rect::from_min_size(
            egui::pos2(100.0, 50.0),
            egui::vec2(500.0, 200.0),
        ))
    }

    #[test]
    fn test_to_logical_maps_corners() {
        let t = transform();
        assert_eq!(t.to_logical(egui::pos2(100.0, 50.0)), Some(egui::pos2(0.0, 0.0)));
        assert_eq!(
            t.to_logical(egui::pos2(600.0, 250.0)),
            Some(egui::pos2(CANVAS_WIDTH, CANVAS_HEIGHT))
        );
    }

    #[test]
    fn test_round_trip() {
        let t = transform();
        let logical = egui::pos2(1250.0, 400.0);
        let screen = t.to_screen(logical);
        let back = t.to_logical(screen).unwrap();
        assert!((back.x - logical.x).abs() < 1e-3);
        assert!((back.y - logical.y).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_canvas_drops_event() {
        let t = CanvasTransform::new(egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(0.0, 0.0),
        ));
        assert_eq!(t.to_logical(egui::pos2(10.0, 10.0)), None);
    }

    #[test]
    fn test_region_to_screen_scales() {
        let t = transform();
        let rect = t.region_to_screen(&Region::new(0.0, 0.0, 2500.0, 1000.0));
        assert_eq!(rect, t.screen_rect());
    }
}
