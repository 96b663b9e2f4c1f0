//! Active palette selection.
//!
//! Owns the palette registry and the name of the palette in use. Name
//! lookup and fallback happen at paint time, so an unknown stored name
//! degrades gracefully instead of failing here.

use officeplan::ThemeManager;

/// The palette registry plus the user's current choice.
pub struct ThemeState {
    theme_manager: ThemeManager,
    /// Palette name as shown in the header selector
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Starts on the light palette.
    pub fn new() -> Self {
        Self::with_theme("Light".to_string())
    }

    /// Restores a selection loaded from storage. The name is kept
    /// verbatim; resolution against the registry happens when painting.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Switches the palette; the selector only offers registered names.
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}
