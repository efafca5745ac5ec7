// Dashboard domain model
use serde::Serialize;

use super::area::AnalyticsArea;
use super::chart::{ChartData, TileData};
use super::filter::FilterState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub area: AnalyticsArea,
    pub title: String,
    pub filter: FilterState,
    /// Records left after filtering, out of `total`.
    pub matched: usize,
    pub total: usize,
    pub tiles: Vec<TileData>,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(
        area: AnalyticsArea,
        title: String,
        filter: FilterState,
        matched: usize,
        total: usize,
        tiles: Vec<TileData>,
        charts: Vec<ChartData>,
    ) -> Self {
        Self {
            area,
            title,
            filter,
            matched,
            total,
            tiles,
            charts,
        }
    }
}

#[cfg(test)]
impl Dashboard {
    pub fn tile(&self, id: &str) -> Option<&TileData> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartData> {
        self.charts.iter().find(|c| c.id == id)
    }
}
