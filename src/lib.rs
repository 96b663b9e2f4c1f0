pub mod time_grid;
pub mod booking;
pub mod floor_plan;
pub mod office;
pub mod events;
pub mod theme;
pub mod sample;

// Export schedule types
pub use booking::{Booking, OccupancyIndex};

// Export floor-plan types
pub use floor_plan::{
    merge_coordinates, Region, RegionStore, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_REGIONS,
    MIN_REGION_SIZE,
};

// Export domain objects and events
pub use events::{RegionMoved, TimeSelection};
pub use office::{Office, OfficeStatus};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};

// Export sample data generation
pub use sample::{generate, sample_bookings, sample_offices, SampleData};
