//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the office plan
//! GUI:
//! - Header panel (demo data, edit controls, filters, theme selector)
//! - Floor plan panel (region canvas with overlays and tooltip)
//! - Schedule panel (weekly booking grid with drag selection)
//! - Status bar (plan and selection summary)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (canvas hit testing and gestures)

pub mod header;
pub mod floor_plan_panel;
pub mod schedule_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
