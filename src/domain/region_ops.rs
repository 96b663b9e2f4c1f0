//! Pure geometry for the region edit gesture.
//!
//! Move deltas are clamped so the rectangle stays inside the canvas;
//! resize deltas are floored at the minimum size. Resize has no upper
//! bound: a region may grow past the canvas edge, matching the behavior
//! the floor plan has always had. Constraint violations are resolved by
//! clamping, never reported as errors.

use officeplan::{Region, CANVAS_HEIGHT, CANVAS_WIDTH, MIN_REGION_SIZE};

/// Applies a move delta, keeping the region inside the canvas.
///
/// Oversized regions (wider/taller than the canvas, which unbounded resize
/// allows) pin to the origin edge: the maximum offset floors at zero.
pub fn moved(region: &Region, dx: f32, dy: f32) -> Region {
    let max_x = (CANVAS_WIDTH - region.width).max(0.0);
    let max_y = (CANVAS_HEIGHT - region.height).max(0.0);
    Region {
        x: (region.x + dx).clamp(0.0, max_x),
        y: (region.y + dy).clamp(0.0, max_y),
        width: region.width,
        height: region.height,
    }
}

/// Applies a resize delta, flooring width and height at the minimum size.
/// Position is unchanged; growth is unbounded.
pub fn resized(region: &Region, dx: f32, dy: f32) -> Region {
    Region {
        x: region.x,
        y: region.y,
        width: (region.width + dx).max(MIN_REGION_SIZE),
        height: (region.height + dy).max(MIN_REGION_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_within_bounds() {
        let r = Region::new(100.0, 100.0, 150.0, 150.0);
        let m = moved(&r, 25.0, -30.0);
        assert_eq!(m, Region::new(125.0, 70.0, 150.0, 150.0));
    }

    #[test]
    fn test_move_clamps_to_canvas() {
        let r = Region::new(100.0, 100.0, 150.0, 150.0);
        let m = moved(&r, -500.0, 5000.0);
        assert_eq!(m.x, 0.0);
        assert_eq!(m.y, CANVAS_HEIGHT - r.height);

        let m = moved(&r, 1.0e6, -1.0e6);
        assert_eq!(m.x, CANVAS_WIDTH - r.width);
        assert_eq!(m.y, 0.0);
    }

    #[test]
    fn test_move_always_inside_canvas() {
        let r = Region::new(2000.0, 800.0, 300.0, 150.0);
        for &(dx, dy) in &[(0.0, 0.0), (999.0, 999.0), (-999.0, -999.0), (3.5, -7.25)] {
            let m = moved(&r, dx, dy);
            assert!(m.x >= 0.0 && m.x <= CANVAS_WIDTH - m.width);
            assert!(m.y >= 0.0 && m.y <= CANVAS_HEIGHT - m.height);
        }
    }

    #[test]
    fn test_move_oversized_region_pins_to_origin() {
        // Unbounded resize can leave a region wider than the canvas
        let r = Region::new(10.0, 10.0, 3000.0, 1200.0);
        let m = moved(&r, 50.0, 50.0);
        assert_eq!(m.x, 0.0);
        assert_eq!(m.y, 0.0);
    }

    #[test]
    fn test_resize_floors_at_min_size() {
        let r = Region::new(100.0, 100.0, 150.0, 155.0);
        let m = resized(&r, 5.0, -200.0);
        assert_eq!(m.width, 155.0);
        assert_eq!(m.height, MIN_REGION_SIZE);
        assert_eq!((m.x, m.y), (r.x, r.y));
    }

    #[test]
    fn test_resize_has_no_upper_bound() {
        let r = Region::new(2400.0, 900.0, 150.0, 150.0);
        let m = resized(&r, 1000.0, 1000.0);
        assert_eq!(m.width, 1150.0);
        assert_eq!(m.height, 1150.0);
    }
}
