// In-memory analytics dataset - immutable after load
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::hospital::Hospital;
use super::location::Location;
use super::primetime::PrimetimeGroup;
use super::provider::Provider;
use super::service_line::ServiceLine;
use super::trend::TrendSeries;
use super::turnover::TurnoverSite;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsDataset {
    pub hospitals: Vec<Hospital>,
    pub blocks: Vec<Block>,
    pub service_lines: Vec<ServiceLine>,
    pub locations: Vec<Location>,
    pub providers: Vec<Provider>,
    pub turnover: Vec<TurnoverSite>,
    pub primetime: Vec<PrimetimeGroup>,
    pub trends: Vec<TrendSeries>,
}

impl AnalyticsDataset {
    pub fn record_count(&self) -> usize {
        self.blocks.len()
            + self.service_lines.len()
            + self.locations.len()
            + self.providers.len()
            + self.turnover.len()
            + self.primetime.len()
    }
}
