// Block domain model - a scheduled OR time allocation
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable};
use super::metrics::Measurable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub id: u32,
    pub title: String,
    pub specialty: String,
    pub location: String,
    pub surgeon: Option<String>,
    pub utilization: f64,
    pub scheduled_minutes: f64,
    pub actual_minutes: f64,
    pub prime_time_percentage: f64,
    pub released: bool,
}

impl Block {
    pub fn non_prime_percentage(&self) -> f64 {
        (100.0 - self.prime_time_percentage).clamp(0.0, 100.0)
    }
}

impl Filterable for Block {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital | FilterField::Location => vec![self.location.as_str()],
            FilterField::Specialty => vec![self.specialty.as_str()],
            FilterField::Surgeon => self.surgeon.as_deref().into_iter().collect(),
        }
    }
}

impl Measurable for Block {
    fn label(&self) -> &str {
        &self.title
    }

    fn measure(&self, field: &str) -> Option<f64> {
        match field {
            "utilization" => Some(self.utilization),
            "scheduled_minutes" => Some(self.scheduled_minutes),
            "actual_minutes" => Some(self.actual_minutes),
            "prime_time_percentage" => Some(self.prime_time_percentage),
            "non_prime_percentage" => Some(self.non_prime_percentage()),
            _ => None,
        }
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "released" => Some(self.released),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{filter_entities, FilterState};

    #[test]
    fn test_unassigned_block_never_matches_a_surgeon() {
        let blocks = vec![
            Block {
                title: "Ortho AM".to_string(),
                location: "MARH OR".to_string(),
                surgeon: Some("Dr. Smith".to_string()),
                ..Default::default()
            },
            Block {
                title: "Open".to_string(),
                location: "MARH OR".to_string(),
                ..Default::default()
            },
        ];

        let filter = FilterState::default().select_surgeon(Some("dr. smith".to_string()));
        let matched = filter_entities(&blocks, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].label(), "Ortho AM");
    }

    #[test]
    fn test_non_prime_is_complement_of_prime() {
        let block = Block {
            prime_time_percentage: 95.0,
            ..Default::default()
        };
        assert_eq!(block.measure("non_prime_percentage"), Some(5.0));
        assert_eq!(block.measure("cases"), None);
        assert_eq!(block.flag("released"), Some(false));
    }
}
