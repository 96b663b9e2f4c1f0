//! Utility modules for the office plan GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_day_label, format_geometry, format_margin, format_uf};
