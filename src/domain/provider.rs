// Provider domain model - surgeon performance summary
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable, MatchRule};
use super::metrics::Measurable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub name: String,
    pub specialty: String,
    pub sites: Vec<String>,
    pub total_cases: u32,
    pub avg_cases_per_day: f64,
    pub on_time_percentage: f64,
    pub avg_case_duration: f64,
    pub utilization: f64,
}

impl Filterable for Provider {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital | FilterField::Location => {
                self.sites.iter().map(String::as_str).collect()
            }
            FilterField::Specialty => vec![self.specialty.as_str()],
            FilterField::Surgeon => vec![self.name.as_str()],
        }
    }

    // Provider specialties are free text ("Orthopedic Surgery").
    fn match_rule(&self, field: FilterField) -> MatchRule {
        match field {
            FilterField::Specialty => MatchRule::Contains,
            other => other.default_rule(),
        }
    }
}

impl Measurable for Provider {
    fn label(&self) -> &str {
        &self.name
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "total_cases" | "cases" => Some(self.total_cases as f64),
            "avg_cases_per_day" => Some(self.avg_cases_per_day),
            "on_time_percentage" => Some(self.on_time_percentage),
            "avg_case_duration" => Some(self.avg_case_duration),
            "utilization" => Some(self.utilization),
            _ => None,
        }
    }
}
