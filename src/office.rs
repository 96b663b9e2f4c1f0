//! Office domain objects linked to floor-plan regions.
//!
//! Offices are fetched read-only from the administration backend; the
//! floor plan links them to regions by office number and derives overlay
//! colors, tooltip contents, and filter results from them.

use serde::{Deserialize, Serialize};

/// Commercial status of an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeStatus {
    Available,
    Occupied,
}

/// One office as delivered by the backend, keyed by office number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub office_number: String,
    pub status: OfficeStatus,
    #[serde(default)]
    pub client_name: Option<String>,
    pub square_meters: f64,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub location: String,
    pub sale_value_uf: f64,
    pub billed_value_uf: f64,
    pub cost_uf: f64,
    pub margin_percentage: f64,
}

impl Office {
    /// Estimated capacity when the backend leaves it unset: one person per
    /// three square meters, as the administration tool assumes.
    pub fn effective_capacity(&self) -> u32 {
        self.capacity
            .unwrap_or_else(|| (self.square_meters / 3.0).floor() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> Office {
        Office {
            office_number: "1715".to_string(),
            status: OfficeStatus::Occupied,
            client_name: Some("ACME Ltd".to_string()),
            square_meters: 31.0,
            capacity: None,
            location: "North wing".to_string(),
            sale_value_uf: 42.5,
            billed_value_uf: 40.0,
            cost_uf: 30.0,
            margin_percentage: 25.0,
        }
    }

    #[test]
    fn test_effective_capacity_fallback() {
        let mut o = office();
        assert_eq!(o.effective_capacity(), 10);
        o.capacity = Some(4);
        assert_eq!(o.effective_capacity(), 4);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&OfficeStatus::Available).unwrap();
        assert_eq!(json, "\"available\"");
        let back: OfficeStatus = serde_json::from_str("\"occupied\"").unwrap();
        assert_eq!(back, OfficeStatus::Occupied);
    }
}
