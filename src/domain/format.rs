// Display helpers for metric values
use serde::Serialize;

pub fn format_value(value: f64, precision: usize, unit: &str) -> String {
    match unit {
        "%" => format!("{:.*}%", precision, value),
        "" => format!("{:.*}", precision, value),
        unit => format!("{:.*} {}", precision, value, unit),
    }
}

/// Colour band for a utilization percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationBand {
    Low,
    Medium,
    High,
    Optimal,
}

impl UtilizationBand {
    pub fn from_value(value: f64) -> Self {
        if value < 50.0 {
            UtilizationBand::Low
        } else if value < 70.0 {
            UtilizationBand::Medium
        } else if value < 85.0 {
            UtilizationBand::High
        } else {
            UtilizationBand::Optimal
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            UtilizationBand::Low => "#ef4444",
            UtilizationBand::Medium => "#f59e0b",
            UtilizationBand::High => "#10b981",
            UtilizationBand::Optimal => "#3b82f6",
        }
    }
}
