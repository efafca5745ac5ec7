// Primetime domain model - prime-time usage per provider group
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable, MatchRule};
use super::metrics::Measurable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimetimeGroup {
    pub name: String,
    pub service: String,
    pub site: String,
    pub prime_time_utilization: f64,
    pub non_prime_time_percentage: f64,
    pub total_cases: u32,
    pub cases_in_prime_time: u32,
    pub cases_in_non_prime_time: u32,
}

impl PrimetimeGroup {
    /// Share of cases that started inside prime time; 0 without cases.
    pub fn prime_time_case_share(&self) -> f64 {
        if self.total_cases == 0 {
            0.0
        } else {
            self.cases_in_prime_time as f64 / self.total_cases as f64 * 100.0
        }
    }
}

impl Filterable for PrimetimeGroup {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital | FilterField::Location => vec![self.site.as_str()],
            FilterField::Specialty => vec![self.service.as_str()],
            FilterField::Surgeon => vec![self.name.as_str()],
        }
    }

    // Service names are long-form ("Orthopaedic Surgery").
    fn match_rule(&self, field: FilterField) -> MatchRule {
        match field {
            FilterField::Specialty => MatchRule::Contains,
            other => other.default_rule(),
        }
    }
}

impl Measurable for PrimetimeGroup {
    fn label(&self) -> &str {
        &self.name
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "prime_time_utilization" | "utilization" => Some(self.prime_time_utilization),
            "non_prime_time_percentage" => Some(self.non_prime_time_percentage),
            "total_cases" | "cases" => Some(self.total_cases as f64),
            "cases_in_prime_time" => Some(self.cases_in_prime_time as f64),
            "cases_in_non_prime_time" => Some(self.cases_in_non_prime_time as f64),
            "prime_time_case_share" => Some(self.prime_time_case_share()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{filter_entities, FilterState};

    fn group(name: &str, service: &str, site: &str) -> PrimetimeGroup {
        PrimetimeGroup {
            name: name.to_string(),
            service: service.to_string(),
            site: site.to_string(),
            total_cases: 73,
            cases_in_prime_time: 62,
            ..Default::default()
        }
    }

    #[test]
    fn test_service_and_site_filters() {
        let groups = vec![
            group("WASSER, SAMUEL", "Bariatrics", "MEMH OR"),
            group("VIRTUA OB/GYN - VOORHEES", "Obstetrics and Gynecology", "VORH Main OR"),
            group("VIRTUA RECONSTRUCTIVE ORTHOPEDICS - VOORHEES", "Orthopaedic Surgery", "VORH Main OR"),
        ];

        let vorh_ortho = FilterState::default()
            .select_hospital(Some("vorh".to_string()))
            .select_specialty(Some("orthopaedic".to_string()));
        let matched = filter_entities(&groups, &vorh_ortho);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].service, "Orthopaedic Surgery");
    }

    #[test]
    fn test_prime_time_case_share() {
        let wasser = group("WASSER, SAMUEL", "Bariatrics", "MEMH OR");
        assert!((wasser.prime_time_case_share() - 84.93).abs() < 0.01);

        let empty = PrimetimeGroup::default();
        assert_eq!(empty.prime_time_case_share(), 0.0);
        assert_eq!(empty.measure("prime_time_case_share"), Some(0.0));
    }
}
