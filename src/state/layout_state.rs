//! UI layout state management.
//!
//! This module encapsulates all state related to UI layout, currently
//! the vertical split between the floor plan and the booking grid.

use serde::{Deserialize, Serialize};

/// State related to UI layout and sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Split ratio between floor plan and booking grid (0.0 to 1.0)
    split_ratio: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self { split_ratio: 0.55 }
    }

    /// Returns the split ratio (floor plan vs booking grid).
    pub fn split_ratio(&self) -> f32 {
        self.split_ratio
    }

    /// Sets the split ratio, clamped to a sensible range.
    pub fn set_split_ratio(&mut self, ratio: f32) {
        self.split_ratio = ratio.clamp(0.2, 0.8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ratio_clamped() {
        let mut layout = LayoutState::new();
        layout.set_split_ratio(0.95);
        assert_eq!(layout.split_ratio(), 0.8);
        layout.set_split_ratio(0.0);
        assert_eq!(layout.split_ratio(), 0.2);
    }
}
