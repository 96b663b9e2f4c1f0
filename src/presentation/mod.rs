//! Presentation layer for visual styling.
//!
//! This module contains presentation logic separated from business logic:
//! - Overlay styling for floor-plan regions and booking slots
//! - Theme palette lookup

pub mod overlay;
