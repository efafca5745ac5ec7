// Monthly trend series per location
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::{FilterField, Filterable};
use super::period::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub location: String,
    pub metric: String,
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn points_within(&self, range: &DateRange) -> Vec<TrendPoint> {
        self.points
            .iter()
            .filter(|p| range.contains(p.month))
            .copied()
            .collect()
    }
}

// Trends only exist per site; specialty and surgeon levels have no values.
impl Filterable for TrendSeries {
    fn field_values(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hospital | FilterField::Location => vec![self.location.as_str()],
            FilterField::Specialty | FilterField::Surgeon => Vec::new(),
        }
    }
}
