// Turnover domain model - room turnover times per OR suite
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable};
use super::metrics::Measurable;

/// Turnovers slower than this score zero efficiency.
const TURNOVER_CEILING_MINUTES: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnoverSite {
    pub location: String,
    pub hospital_id: String,
    pub median_turnover: f64,
    pub average_turnover: f64,
    pub total_cases: u32,
    pub total_turnovers: u32,
}

impl TurnoverSite {
    /// 100 for instant turnovers, 0 at or beyond an hour, from the median.
    pub fn efficiency_score(&self) -> f64 {
        (100.0 - self.median_turnover / TURNOVER_CEILING_MINUTES * 100.0).clamp(0.0, 100.0)
    }
}

impl Filterable for TurnoverSite {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital => vec![self.hospital_id.as_str(), self.location.as_str()],
            FilterField::Location => vec![self.location.as_str()],
            FilterField::Specialty | FilterField::Surgeon => Vec::new(),
        }
    }
}

impl Measurable for TurnoverSite {
    fn label(&self) -> &str {
        &self.location
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "median_turnover" => Some(self.median_turnover),
            "average_turnover" => Some(self.average_turnover),
            "total_cases" | "cases" => Some(self.total_cases as f64),
            "total_turnovers" => Some(self.total_turnovers as f64),
            "efficiency_score" => Some(self.efficiency_score()),
            _ => None,
        }
    }
}
