// Service line domain model - a surgical specialty across one or more sites
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable};
use super::metrics::Measurable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLine {
    pub name: String,
    pub sites: Vec<String>,
    pub providers: Vec<String>,
    pub in_block_utilization: f64,
    pub total_block_utilization: f64,
    pub non_prime_percentage: f64,
    pub cases: u32,
    pub avg_turnover: Option<f64>,
    pub on_time_start_percentage: Option<f64>,
}

impl Filterable for ServiceLine {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital | FilterField::Location => {
                self.sites.iter().map(String::as_str).collect()
            }
            FilterField::Specialty => vec![self.name.as_str()],
            FilterField::Surgeon => self.providers.iter().map(String::as_str).collect(),
        }
    }
}

impl Measurable for ServiceLine {
    fn label(&self) -> &str {
        &self.name
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "in_block_utilization" | "utilization" => Some(self.in_block_utilization),
            "total_block_utilization" => Some(self.total_block_utilization),
            "non_prime_percentage" => Some(self.non_prime_percentage),
            "cases" => Some(self.cases as f64),
            "avg_turnover" => self.avg_turnover,
            "on_time_start_percentage" => self.on_time_start_percentage,
            _ => None,
        }
    }
}
