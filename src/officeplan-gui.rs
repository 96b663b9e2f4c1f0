//! Office Plan GUI Application
//!
//! Interactive floor-plan and booking administration tool built with the
//! egui framework. The viewer features:
//! - A floor plan canvas with per-office status and margin overlays
//! - Drag-to-move and drag-to-resize layout editing with persisted
//!   coordinate overrides
//! - A weekly booking grid with drag-to-select slot picking
//! - Multi-criteria filters that dim non-matching offices
//! - Multiple theme support with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (geometry ops, slot spans, filters)
//! - `presentation/` - Visual styling separated from domain logic
//! - `io/` - Coordinate synchronization with the backing API
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - State management for schedule, plan and gestures

use eframe::egui;

mod utils;
mod domain;
mod presentation;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::CoordinatesClient;
use state::LayoutState;
use ui::panel_manager::PanelManager;

const LAYOUT_KEY: &str = "panel_layout";
const DEMO_SEED: u64 = 42;

/// Main application entry point that initializes and launches the office
/// plan GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Office Plan"),
        ..Default::default()
    };

    eframe::run_native(
        "Office Plan",
        options,
        Box::new(|cc| Ok(Box::new(OfficePlanApp::new(cc)))),
    )
}

/// The main office plan application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles demo data, sync workflows and
///   interaction logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct OfficePlanApp {
    /// Centralized application state
    state: AppState,
    /// Background coordinate synchronization client
    client: CoordinatesClient,
    /// First-frame initialization flag
    initialized: bool,
}

impl OfficePlanApp {
    /// Creates a new app instance with theme and layout settings loaded
    /// from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout: LayoutState =
            SettingsCoordinator::load_setting_or(cc.storage, LAYOUT_KEY, LayoutState::new());

        Self {
            state: AppState::with_theme_and_layout(theme_name, layout),
            client: CoordinatesClient::from_env(),
            initialized: false,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::DemoDataRequested => {
                ApplicationCoordinator::load_demo_data(&mut self.state, DEMO_SEED);
            }
            ui::panel_manager::PanelInteraction::SaveCoordinatesRequested => {
                ApplicationCoordinator::request_save(&self.state, &mut self.client, ctx);
            }
            ui::panel_manager::PanelInteraction::ResetCoordinatesRequested => {
                ApplicationCoordinator::reset_coordinates(&mut self.state, &mut self.client, ctx);
            }
            ui::panel_manager::PanelInteraction::RegionClicked(id) => {
                ApplicationCoordinator::handle_region_click(&mut self.state, id);
            }
            ui::panel_manager::PanelInteraction::RegionGeometryChanged(event) => {
                ApplicationCoordinator::handle_region_moved(&mut self.state, event);
            }
            ui::panel_manager::PanelInteraction::TimeSelected(selection) => {
                ApplicationCoordinator::handle_time_selection(&mut self.state, selection);
            }
        }
    }
}

impl eframe::App for OfficePlanApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. First frame: seed demo data and start the coordinate fetch
    /// 2. Check for sync completion
    /// 3. Apply theme
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initialized {
            self.initialized = true;
            ApplicationCoordinator::load_demo_data(&mut self.state, DEMO_SEED);
            ApplicationCoordinator::request_fetch(&mut self.client, ctx);
        }

        ApplicationCoordinator::check_sync_completion(&mut self.state, &mut self.client);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &self.client)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
