//! Palette persistence and per-frame application.
//!
//! The chosen palette name lives in eframe's key-value storage and is
//! pushed into the egui visuals on every frame, so switching themes in
//! the header takes effect immediately and survives restarts.

use eframe::egui;

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";
const DEFAULT_THEME: &str = "Light";

/// Bridges the theme state with eframe storage and egui visuals.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Reads the stored palette name. First launch, or a missing storage
    /// backend, falls back to the light palette.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    /// Writes the palette name; called on shutdown.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Pushes the active palette into this frame's visuals. An unknown
    /// stored name leaves the visuals as they are.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme_name = state.theme.current_theme_name();
        if let Some(theme) = state.theme.theme_manager().get_theme(theme_name) {
            // Dark palettes start from egui's dark baseline, everything
            // else from the light one
            let mut visuals = if theme.name == "Dark" {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            state.theme.theme_manager().apply_theme(theme, &mut visuals);
            ctx.set_visuals(visuals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_storage_defaults_to_light() {
        assert_eq!(ThemeCoordinator::load_theme_from_storage(None), "Light");
    }

    #[test]
    fn test_unknown_theme_keeps_current_visuals() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.theme.set_theme("Solarized".to_string());

        let dark_before = ctx.style().visuals.dark_mode;
        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert_eq!(ctx.style().visuals.dark_mode, dark_before);
    }

    #[test]
    fn test_dark_theme_applies_dark_visuals() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.theme.set_theme("Dark".to_string());

        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(ctx.style().visuals.dark_mode);
    }
}
