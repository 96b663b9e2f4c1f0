//! Domain logic modules for the office plan GUI.
//!
//! This module contains core business logic:
//! - Pointer transform (screen to canvas-logical coordinate mapping)
//! - Region operations (move clamping, resize flooring)
//! - Slot operations (drag span building, selection bounds)
//! - Filters (status/client/margin criteria over offices)

pub mod pointer_transform;
pub mod region_ops;
pub mod slot_ops;
pub mod filters;
