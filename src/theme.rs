//! Theme support for the office plan GUI.
//!
//! Provides Light and Dark color schemes covering both the general UI and
//! the floor-plan/slot-grid semantic colors (availability, margin sign,
//! slot occupancy), plus a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use officeplan::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.get_theme("Light").unwrap();
//! println!("Light background: {:?}", light.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering UI chrome and the
/// floor-plan/schedule semantic colors.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub hover: Color32,
    pub border: Color32,

    // Floor-plan fills
    pub available_fill: Color32,
    pub margin_positive_fill: Color32,
    pub margin_negative_fill: Color32,
    pub neutral_fill: Color32,

    // Floor-plan strokes
    pub selection_stroke: Color32,
    pub edit_stroke: Color32,
    pub hover_stroke: Color32,

    // Slot grid
    pub slot_free: Color32,
    pub slot_selected: Color32,
    pub slot_occupied: Color32,

    // Status colors
    pub error: Color32,
    pub warning: Color32,
    pub positive: Color32,
    pub negative: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        &self.themes[&self.current_theme_name]
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = with_alpha(colors.selection_stroke, 120);
        visuals.selection.stroke.color = colors.selection_stroke;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = with_alpha(colors.selection_stroke, 120);

        // Override error/warning colors
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme, matching the administration tool's white cards
/// and the translucent pastel fills of the original floor plan.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with the floor plan's pastel fills".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 250),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(31, 41, 55),
            text_dim: Color32::from_rgb(120, 120, 120),

            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            // Translucent fills over the plan image: blue for available,
            // green/red by margin sign, slate gray otherwise
            available_fill: Color32::from_rgba_unmultiplied(147, 197, 253, 153),
            margin_positive_fill: Color32::from_rgba_unmultiplied(134, 239, 172, 153),
            margin_negative_fill: Color32::from_rgba_unmultiplied(252, 165, 165, 153),
            neutral_fill: Color32::from_rgba_unmultiplied(203, 213, 225, 128),

            selection_stroke: hex_to_color32("#f97316"),
            edit_stroke: hex_to_color32("#2563eb"),
            hover_stroke: Color32::BLACK,

            slot_free: hex_to_color32("#f0fdf4"),
            slot_selected: hex_to_color32("#f97316"),
            slot_occupied: hex_to_color32("#d1d5db"),

            error: hex_to_color32("#dc2626"),
            warning: Color32::from_rgb(230, 120, 20),
            positive: hex_to_color32("#16a34a"),
            negative: hex_to_color32("#dc2626"),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme for low-light use".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),

            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            available_fill: Color32::from_rgba_unmultiplied(59, 130, 246, 140),
            margin_positive_fill: Color32::from_rgba_unmultiplied(34, 197, 94, 140),
            margin_negative_fill: Color32::from_rgba_unmultiplied(239, 68, 68, 140),
            neutral_fill: Color32::from_rgba_unmultiplied(100, 116, 139, 120),

            selection_stroke: hex_to_color32("#fb923c"),
            edit_stroke: hex_to_color32("#60a5fa"),
            hover_stroke: Color32::WHITE,

            slot_free: Color32::from_rgb(34, 54, 42),
            slot_selected: hex_to_color32("#f97316"),
            slot_occupied: Color32::from_rgb(75, 80, 88),

            error: hex_to_color32("#ef4444"),
            warning: hex_to_color32("#f39c12"),
            positive: hex_to_color32("#2ecc71"),
            negative: hex_to_color32("#e74c3c"),
        },
    }
}

/// Converts a hex color string (like "#2563eb") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
