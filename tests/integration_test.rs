use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

use officeplan::booking::{Booking, OccupancyIndex};
use officeplan::floor_plan::{merge_coordinates, RegionStore, DEFAULT_REGIONS};
use officeplan::{sample, time_grid, Region, CANVAS_WIDTH, MIN_REGION_SIZE};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn clock(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_booking_occupancy_end_to_end() -> Result<()> {
    // Build an index from a serialized booking payload, the way the GUI
    // receives it
    let json = serde_json::json!([
        {"day": "2024-01-01", "start_clock": "10:00", "end_clock": "11:00"},
        {"day": "2024-01-01", "start_clock": "bogus", "end_clock": "11:00"},
        {"day": "2024-01-02", "start_clock": "08:00", "end_clock": "08:30", "client_label": "ACME"}
    ]);
    let bookings: Vec<Booking> = serde_json::from_value(json)?;
    let index = OccupancyIndex::build(&bookings);

    // Half-open interval: start occupied, end free
    assert!(index.is_occupied(day(), clock(10, 0)));
    assert!(index.is_occupied(day(), clock(10, 30)));
    assert!(!index.is_occupied(day(), clock(11, 0)));

    // The malformed row fails open: nothing occupied by it
    assert!(!index.is_occupied(day(), clock(9, 0)));

    // Other day, single slot
    let tue = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    assert!(index.is_occupied(tue, clock(8, 0)));
    assert!(!index.is_occupied(tue, clock(8, 30)));

    Ok(())
}

#[test]
fn test_slot_grid_shape() {
    let slots = time_grid::generate_slots();
    assert_eq!(slots.len(), 25);
    assert_eq!(slots[0], clock(8, 0));
    assert_eq!(*slots.last().unwrap(), clock(20, 0));

    // Monday anchored week for a Sunday reference date
    let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let week = time_grid::week_days(sunday);
    assert_eq!(week[0], day());
    assert_eq!(week[6], sunday);
}

#[test]
fn test_region_store_round_trip_with_overrides() -> Result<()> {
    let mut store = RegionStore::new();
    assert_eq!(store.effective_all().len(), DEFAULT_REGIONS.len());

    // Override one region, save, and load the payload into a new store
    store.set_override("1701", Region::new(75.0, 80.0, 200.0, 160.0));
    let saved = store.save();
    assert_eq!(saved.len(), 1);

    let raw: HashMap<String, serde_json::Value> = saved
        .into_iter()
        .map(|(id, region)| Ok((id, serde_json::to_value(region)?)))
        .collect::<Result<_>>()?;

    let mut restored = RegionStore::new();
    restored.load(raw);
    assert_eq!(
        restored.effective("1701"),
        Some(Region::new(75.0, 80.0, 200.0, 160.0))
    );

    // Untouched regions still resolve to defaults
    let default_1702 = DEFAULT_REGIONS.get("1702").copied();
    assert_eq!(restored.effective("1702"), default_1702);

    Ok(())
}

#[test]
fn test_merge_ignores_nothing_from_overrides() {
    let mut defaults = HashMap::new();
    defaults.insert("a".to_string(), Region::new(0.0, 0.0, 100.0, 100.0));
    defaults.insert("b".to_string(), Region::new(200.0, 0.0, 100.0, 100.0));

    let mut overrides = HashMap::new();
    overrides.insert("b".to_string(), Region::new(300.0, 10.0, 120.0, 90.0));
    // An override for a region with no default still appears
    overrides.insert("zz".to_string(), Region::new(5.0, 5.0, 50.0, 50.0));

    let merged = merge_coordinates(&defaults, &overrides);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["a"], defaults["a"]);
    assert_eq!(merged["b"], overrides["b"]);
    assert_eq!(merged["zz"], overrides["zz"]);
}

#[test]
fn test_malformed_override_entries_are_dropped() {
    let mut raw = HashMap::new();
    raw.insert(
        "1701".to_string(),
        serde_json::json!({"x": 10.0, "y": 10.0, "width": 150.0, "height": 150.0}),
    );
    // Below minimum size
    raw.insert(
        "1702".to_string(),
        serde_json::json!({"x": 10.0, "y": 10.0, "width": 5.0, "height": 150.0}),
    );
    // Missing fields
    raw.insert("1703".to_string(), serde_json::json!({"x": 10.0}));

    let mut store = RegionStore::new();
    store.load(raw);

    assert_eq!(store.override_count(), 1);
    assert!(store.has_override("1701"));
    assert_eq!(store.effective("1702"), DEFAULT_REGIONS.get("1702").copied());
}

#[test]
fn test_clear_all_reverts_to_defaults() {
    let mut store = RegionStore::new();
    store.set_override("1701", Region::new(75.0, 80.0, 200.0, 160.0));
    store.set_override("1702", Region::new(10.0, 10.0, 90.0, 90.0));
    assert_eq!(store.override_count(), 2);

    store.clear_all();
    assert_eq!(store.override_count(), 0);
    assert_eq!(store.effective("1701"), DEFAULT_REGIONS.get("1701").copied());
    assert!(store.save().is_empty());
}

#[test]
fn test_default_layout_is_usable() {
    // Every shipped region is valid and movable within the canvas
    for (id, region) in DEFAULT_REGIONS.iter() {
        assert!(region.is_valid(), "default region {id} invalid");
        assert!(region.width >= MIN_REGION_SIZE);
        assert!(region.x >= 0.0 && region.x + region.width <= CANVAS_WIDTH);
    }
}

#[test]
fn test_demo_dataset_round_trips_as_json() -> Result<()> {
    let data = sample::generate(day(), 42);
    assert_eq!(data.offices.len(), DEFAULT_REGIONS.len());
    assert!(!data.bookings.is_empty());

    let json = serde_json::to_string(&data)?;
    let parsed: sample::SampleData = serde_json::from_str(&json)?;
    assert_eq!(parsed.offices.len(), data.offices.len());
    assert_eq!(parsed.bookings.len(), data.bookings.len());

    // Generated bookings index cleanly
    let index = OccupancyIndex::build(&parsed.bookings);
    assert!(!index.is_empty());

    Ok(())
}
