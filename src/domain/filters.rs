//! Filter criteria over the offices linked to floor-plan regions.
//!
//! Criteria combine conjunctively; an inactive criterion passes every
//! office. Regions failing active filters are dimmed by the overlay, never
//! removed from hit-testing in edit mode.

use officeplan::{Office, OfficeStatus};

/// Sign of an office's margin percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSign {
    Positive,
    Negative,
}

/// Externally supplied predicates over region-linked offices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Only offices with this status pass.
    pub status: Option<OfficeStatus>,
    /// Only offices whose client name contains this fragment pass
    /// (case-insensitive).
    pub client: Option<String>,
    /// Only offices whose margin has this sign pass. Zero margin fails
    /// both signs.
    pub margin: Option<MarginSign>,
}

impl FilterCriteria {
    /// True when at least one criterion is set.
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.client.is_some() || self.margin.is_some()
    }

    /// Clears every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if `office` passes every active criterion.
    pub fn matches(&self, office: &Office) -> bool {
        if let Some(status) = self.status {
            if office.status != status {
                return false;
            }
        }

        if let Some(fragment) = &self.client {
            let needle = fragment.to_lowercase();
            let hit = office
                .client_name
                .as_deref()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(sign) = self.margin {
            let pass = match sign {
                MarginSign::Positive => office.margin_percentage > 0.0,
                MarginSign::Negative => office.margin_percentage < 0.0,
            };
            if !pass {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office(status: OfficeStatus, client: Option<&str>, margin: f64) -> Office {
        Office {
            office_number: "1701".to_string(),
            status,
            client_name: client.map(str::to_string),
            square_meters: 30.0,
            capacity: None,
            location: String::new(),
            sale_value_uf: 10.0,
            billed_value_uf: 10.0,
            cost_uf: 8.0,
            margin_percentage: margin,
        }
    }

    #[test]
    fn test_inactive_criteria_pass_everything() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        assert!(criteria.matches(&office(OfficeStatus::Available, None, 0.0)));
    }

    #[test]
    fn test_status_filter() {
        let criteria = FilterCriteria {
            status: Some(OfficeStatus::Available),
            ..Default::default()
        };
        assert!(criteria.matches(&office(OfficeStatus::Available, None, 0.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Occupied, Some("ACME"), 5.0)));
    }

    #[test]
    fn test_client_filter_is_case_insensitive() {
        let criteria = FilterCriteria {
            client: Some("acme".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&office(OfficeStatus::Occupied, Some("ACME Ltd"), 5.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Occupied, Some("Nexo"), 5.0)));
        // No client at all fails a client filter
        assert!(!criteria.matches(&office(OfficeStatus::Available, None, 5.0)));
    }

    #[test]
    fn test_margin_sign_filter() {
        let criteria = FilterCriteria {
            margin: Some(MarginSign::Negative),
            ..Default::default()
        };
        assert!(criteria.matches(&office(OfficeStatus::Occupied, Some("A"), -3.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Occupied, Some("A"), 3.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Occupied, Some("A"), 0.0)));
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let criteria = FilterCriteria {
            status: Some(OfficeStatus::Occupied),
            margin: Some(MarginSign::Positive),
            ..Default::default()
        };
        assert!(criteria.matches(&office(OfficeStatus::Occupied, Some("A"), 2.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Occupied, Some("A"), -2.0)));
        assert!(!criteria.matches(&office(OfficeStatus::Available, None, 2.0)));
    }
}
