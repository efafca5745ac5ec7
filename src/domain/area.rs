// Analytics areas - one dashboard per entity kind
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsArea {
    Blocks,
    Services,
    Locations,
    Providers,
    Turnover,
    Primetime,
}

impl AnalyticsArea {
    pub const ALL: [AnalyticsArea; 6] = [
        AnalyticsArea::Blocks,
        AnalyticsArea::Services,
        AnalyticsArea::Locations,
        AnalyticsArea::Providers,
        AnalyticsArea::Turnover,
        AnalyticsArea::Primetime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsArea::Blocks => "blocks",
            AnalyticsArea::Services => "services",
            AnalyticsArea::Locations => "locations",
            AnalyticsArea::Providers => "providers",
            AnalyticsArea::Turnover => "turnover",
            AnalyticsArea::Primetime => "primetime",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnalyticsArea::Blocks => "Block Utilization",
            AnalyticsArea::Services => "Service Analytics",
            AnalyticsArea::Locations => "Location Comparison",
            AnalyticsArea::Providers => "Provider Analytics",
            AnalyticsArea::Turnover => "Turnover Times",
            AnalyticsArea::Primetime => "Primetime Utilization",
        }
    }
}

impl fmt::Display for AnalyticsArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsArea {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalyticsArea::ALL
            .into_iter()
            .find(|area| area.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnknownArea(s.to_string()))
    }
}
