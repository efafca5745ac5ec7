// Location domain model - an OR suite within a hospital
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable};
use super::metrics::Measurable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: String,
    pub hospital_id: String,
    pub specialties: Vec<String>,
    pub in_block_utilization: f64,
    pub total_block_utilization: f64,
    pub non_prime_percentage: f64,
    pub cases: u32,
}

impl Filterable for Location {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital => vec![self.hospital_id.as_str(), self.name.as_str()],
            FilterField::Location => vec![self.name.as_str()],
            FilterField::Specialty => self.specialties.iter().map(String::as_str).collect(),
            FilterField::Surgeon => Vec::new(),
        }
    }
}

impl Measurable for Location {
    fn label(&self) -> &str {
        &self.name
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "in_block_utilization" | "utilization" => Some(self.in_block_utilization),
            "total_block_utilization" => Some(self.total_block_utilization),
            "non_prime_percentage" => Some(self.non_prime_percentage),
            "cases" => Some(self.cases as f64),
            _ => None,
        }
    }
}
