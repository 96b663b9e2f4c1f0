//! Domain events emitted by the gesture controllers.
//!
//! Events are informational for the rest of the application: booking
//! submission consumes `TimeSelection`, while `RegionMoved` only reports
//! the latest geometry (persistence is a separate explicit save action).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A committed slot selection: one day plus a "HH:MM" start/end pair.
/// The end time is always one slot duration past the last selected slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSelection {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

/// A region was moved or resized during an edit gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMoved {
    pub region_id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_selection_serializes_iso_date() {
        let sel = TimeSelection {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start_time: "09:30".to_string(),
            end_time: "11:00".to_string(),
        };
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["start_time"], "09:30");
    }
}
