//! Floor-plan regions, the default layout, and the override store.
//!
//! All coordinates live in the fixed 2500x1000 canvas logical space,
//! independent of on-screen size. The default layout maps each office
//! number to a rectangle traced over the floor-17 architectural plan;
//! a sparse override map takes precedence per entry and is the only part
//! that is persisted.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Width of the canvas logical coordinate space.
pub const CANVAS_WIDTH: f32 = 2500.0;

/// Height of the canvas logical coordinate space.
pub const CANVAS_HEIGHT: f32 = 1000.0;

/// Minimum region width/height, in logical units.
pub const MIN_REGION_SIZE: f32 = 20.0;

/// One floor-plan rectangle in canvas logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A region is storable when all fields are finite and it meets the
    /// minimum size. Out-of-canvas positions are accepted: resize has no
    /// upper bound, so persisted regions may legitimately overhang.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= MIN_REGION_SIZE
            && self.height >= MIN_REGION_SIZE
    }
}

/// Default rectangle per office number, traced over the floor-17 plan.
pub static DEFAULT_REGIONS: Lazy<HashMap<String, Region>> = Lazy::new(|| {
    let entries: &[(&str, f32, f32, f32, f32)] = &[
        // Left side, upper row
        ("1715", 80.0, 355.0, 190.0, 170.0),
        ("1716", 280.0, 355.0, 150.0, 170.0),
        ("1717", 440.0, 355.0, 155.0, 170.0),
        ("1718", 605.0, 355.0, 155.0, 170.0),
        ("1719", 770.0, 355.0, 155.0, 170.0),
        // Left side, middle row
        ("1712", 85.0, 560.0, 180.0, 195.0),
        ("1713", 275.0, 560.0, 205.0, 195.0),
        ("1714", 490.0, 560.0, 220.0, 195.0),
        ("1722", 720.0, 560.0, 165.0, 195.0),
        ("1724", 895.0, 560.0, 165.0, 195.0),
        ("1720", 1070.0, 560.0, 165.0, 195.0),
        ("1732", 1245.0, 560.0, 180.0, 195.0),
        // Left side, lower row
        ("1711", 105.0, 775.0, 155.0, 155.0),
        ("1710", 270.0, 775.0, 300.0, 155.0),
        ("1709", 580.0, 775.0, 285.0, 155.0),
        ("1705", 875.0, 775.0, 140.0, 155.0),
        ("1707", 1025.0, 775.0, 140.0, 155.0),
        ("1703", 1175.0, 775.0, 140.0, 155.0),
        ("1702", 1325.0, 775.0, 135.0, 155.0),
        ("1701", 1470.0, 775.0, 130.0, 155.0),
        // Center, middle row
        ("1737", 935.0, 355.0, 155.0, 170.0),
        ("1721", 1100.0, 355.0, 155.0, 170.0),
        ("1723", 1265.0, 355.0, 155.0, 170.0),
        ("1725", 1430.0, 355.0, 155.0, 170.0),
        ("1726", 1595.0, 355.0, 155.0, 170.0),
        ("1727", 1760.0, 355.0, 155.0, 170.0),
        // Upper center
        ("1728", 800.0, 180.0, 185.0, 145.0),
        ("1729", 995.0, 180.0, 185.0, 145.0),
        ("1731", 1190.0, 180.0, 180.0, 145.0),
        ("1730", 1380.0, 180.0, 180.0, 145.0),
        ("1736", 1570.0, 180.0, 175.0, 145.0),
        ("1735", 1755.0, 180.0, 175.0, 145.0),
        ("1734", 1940.0, 180.0, 175.0, 145.0),
        ("1733", 2125.0, 180.0, 175.0, 145.0),
        // Right side
        ("1738", 475.0, 610.0, 125.0, 145.0),
        ("1708", 1630.0, 610.0, 140.0, 145.0),
        ("1706", 1780.0, 610.0, 140.0, 145.0),
        ("1704", 1930.0, 610.0, 140.0, 145.0),
        ("1780", 610.0, 610.0, 105.0, 145.0),
    ];

    entries
        .iter()
        .map(|&(id, x, y, w, h)| (id.to_string(), Region::new(x, y, w, h)))
        .collect()
});

/// Merges overrides over defaults with override-wins semantics.
///
/// A present override entry fully replaces the default entry for that id;
/// there is no field-level merge. Override ids without a default entry are
/// kept as well, matching the original object-spread behavior.
pub fn merge_coordinates(
    defaults: &HashMap<String, Region>,
    overrides: &HashMap<String, Region>,
) -> HashMap<String, Region> {
    let mut merged = defaults.clone();
    for (id, region) in overrides {
        merged.insert(id.clone(), *region);
    }
    merged
}

/// Holds the default layout and the sparse persisted override map, and
/// exposes the merged effective layout.
///
/// Overrides are mutated in memory during a drag and only reach durable
/// storage when the caller explicitly sends [`RegionStore::save`] output to
/// the persistence endpoint.
#[derive(Debug, Clone)]
pub struct RegionStore {
    defaults: HashMap<String, Region>,
    overrides: HashMap<String, Region>,
}

impl Default for RegionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionStore {
    /// Creates a store over the built-in default layout with no overrides.
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_REGIONS.clone())
    }

    /// Creates a store over a custom default layout (used by tests).
    pub fn with_defaults(defaults: HashMap<String, Region>) -> Self {
        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Returns the effective region for `id`: the override if present,
    /// otherwise the default.
    pub fn effective(&self, id: &str) -> Option<Region> {
        self.overrides
            .get(id)
            .or_else(|| self.defaults.get(id))
            .copied()
    }

    /// Returns the full merged layout, override-wins per entry.
    pub fn effective_all(&self) -> HashMap<String, Region> {
        merge_coordinates(&self.defaults, &self.overrides)
    }

    /// Replaces (or creates) the override entry for `id`.
    pub fn set_override(&mut self, id: &str, region: Region) {
        self.overrides.insert(id.to_string(), region);
    }

    /// Clears all overrides; the effective layout reverts to defaults.
    pub fn clear_all(&mut self) {
        self.overrides.clear();
    }

    /// Replaces the overrides wholesale from fetched persisted state.
    ///
    /// Entries that fail to decode as a region, or decode to an invalid
    /// rectangle, are dropped individually; the remaining valid entries are
    /// applied. This never fails.
    pub fn load(&mut self, raw: HashMap<String, serde_json::Value>) {
        let mut overrides = HashMap::new();
        for (id, value) in raw {
            match serde_json::from_value::<Region>(value) {
                Ok(region) if region.is_valid() => {
                    overrides.insert(id, region);
                }
                Ok(_) => {
                    log::warn!("dropping invalid override entry for region {}", id);
                }
                Err(e) => {
                    log::warn!("dropping unparseable override entry for region {}: {}", id, e);
                }
            }
        }
        self.overrides = overrides;
    }

    /// Returns the current overrides for the external persistence call.
    /// In-memory state is untouched; a failed save can simply be retried.
    pub fn save(&self) -> HashMap<String, Region> {
        self.overrides.clone()
    }

    /// True if `id` currently has an override entry.
    pub fn has_override(&self, id: &str) -> bool {
        self.overrides.contains_key(id)
    }

    /// Number of override entries.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
