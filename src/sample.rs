//! Sample office and booking generation for demos and manual testing.
//!
//! Mirrors the shapes the REST collaborators deliver so the GUI can run
//! without a backend. Generation is seedable and deterministic.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::floor_plan::DEFAULT_REGIONS;
use crate::office::{Office, OfficeStatus};
use crate::time_grid;

const CLIENTS: &[&str] = &[
    "ACME Ltd",
    "Nexo Capital",
    "Austral Partners",
    "Banmerica",
    "Grupo Andino",
    "Copec Digital",
    "Patagonia Legal",
    "Vertical Labs",
];

const LOCATIONS: &[&str] = &["North wing", "South wing", "East wing", "Core"];

/// A complete demo dataset, as written by the `demogen` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub offices: Vec<Office>,
    pub bookings: Vec<Booking>,
}

/// Generates a complete demo dataset for the week containing `anchor`.
pub fn generate(anchor: NaiveDate, seed: u64) -> SampleData {
    SampleData {
        offices: sample_offices(seed),
        bookings: sample_bookings(anchor, seed),
    }
}

/// Generates one office per default floor-plan region.
///
/// Roughly a third of the offices are available; the rest carry a client
/// and a margin that can be negative, so both overlay colors appear.
pub fn sample_offices(seed: u64) -> Vec<Office> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut numbers: Vec<&String> = DEFAULT_REGIONS.keys().collect();
    numbers.sort();

    numbers
        .into_iter()
        .map(|number| {
            let available = rng.gen_ratio(1, 3);
            let square_meters = rng.gen_range(18.0..65.0_f64);
            let sale = rng.gen_range(20.0..80.0_f64);
            let cost = sale * rng.gen_range(0.6..1.2_f64);
            let billed = if available { 0.0 } else { sale * rng.gen_range(0.8..1.05_f64) };
            let margin = if sale > 0.0 { (sale - cost) / sale * 100.0 } else { 0.0 };

            Office {
                office_number: number.clone(),
                status: if available {
                    OfficeStatus::Available
                } else {
                    OfficeStatus::Occupied
                },
                client_name: if available {
                    None
                } else {
                    Some(CLIENTS[rng.gen_range(0..CLIENTS.len())].to_string())
                },
                square_meters: (square_meters * 10.0).round() / 10.0,
                capacity: None,
                location: LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string(),
                sale_value_uf: (sale * 100.0).round() / 100.0,
                billed_value_uf: (billed * 100.0).round() / 100.0,
                cost_uf: (cost * 100.0).round() / 100.0,
                margin_percentage: (margin * 100.0).round() / 100.0,
            }
        })
        .collect()
}

/// Generates bookings scattered over the week containing `anchor`.
///
/// Every booking starts on a slot boundary and spans 1 to 4 slots inside
/// the daily window, so all generated intervals are grid-aligned.
pub fn sample_bookings(anchor: NaiveDate, seed: u64) -> Vec<Booking> {
    let mut rng = StdRng::seed_from_u64(seed);
    let week = time_grid::week_days(anchor);
    let slots = time_grid::generate_slots();
    let mut bookings = Vec::new();

    for &day in &week {
        for _ in 0..rng.gen_range(1..4usize) {
            let start_idx = rng.gen_range(0..slots.len() - 1);
            let span = rng.gen_range(1..=4usize).min(slots.len() - 1 - start_idx);
            let start = slots[start_idx];
            let end = time_grid::add_minutes(start, time_grid::SLOT_MINUTES * span as i64);
            bookings.push(Booking {
                day,
                start_clock: start.format("%H:%M").to_string(),
                end_clock: end.format("%H:%M").to_string(),
                client_label: CLIENTS[rng.gen_range(0..CLIENTS.len())].to_string(),
            });
        }
    }

    bookings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::OccupancyIndex;

    #[test]
    fn test_offices_cover_all_regions() {
        let offices = sample_offices(7);
        assert_eq!(offices.len(), DEFAULT_REGIONS.len());
        for office in &offices {
            assert!(DEFAULT_REGIONS.contains_key(&office.office_number));
            match office.status {
                OfficeStatus::Available => assert!(office.client_name.is_none()),
                OfficeStatus::Occupied => assert!(office.client_name.is_some()),
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(sample_offices(42), sample_offices(42));
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(sample_bookings(anchor, 42), sample_bookings(anchor, 42));
    }

    #[test]
    fn test_bookings_are_grid_aligned_and_indexable() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let bookings = sample_bookings(anchor, 9);
        assert!(!bookings.is_empty());

        let index = OccupancyIndex::build(&bookings);
        // Every generated booking parses, so each occupies at least a slot
        assert!(!index.is_empty());

        let week = time_grid::week_days(anchor);
        for booking in &bookings {
            assert!(week.contains(&booking.day));
            assert!(time_grid::parse_clock(&booking.start_clock).is_some());
            assert!(time_grid::parse_clock(&booking.end_clock).is_some());
        }
    }
}
