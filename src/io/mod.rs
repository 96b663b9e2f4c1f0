//! I/O modules for coordinate synchronization.

pub mod coordinates_client;

// Re-export commonly used types
pub use coordinates_client::{CoordinatesClient, SyncResult};
