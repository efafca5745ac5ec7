// Tile and chart payloads handed to the view layer
use serde::Serialize;

use super::trend::TrendPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: usize,
    pub display: String,
}

impl TileData {
    pub fn new(id: String, title: String, unit: String, value: f64, precision: usize, display: String) -> Self {
        Self {
            id,
            title,
            unit,
            value,
            precision,
            display,
        }
    }
}

/// One bar: `{indexKey, value}` as bar chart components expect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    pub index_key: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BarDatum {
    pub fn new(index_key: String, value: f64, color: Option<String>) -> Self {
        Self {
            index_key,
            value,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<TrendPoint>,
}

impl SeriesData {
    pub fn new(id: String, name: String, color: Option<String>, points: Vec<TrendPoint>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartBody {
    Bar(Vec<BarDatum>),
    Line(Vec<SeriesData>),
}

impl ChartBody {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartBody::Bar(bars) => bars.is_empty(),
            ChartBody::Line(series) => series.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
    pub body: ChartBody,
}

impl ChartData {
    pub fn new(
        id: String,
        title: String,
        unit: Option<String>,
        y_min: Option<f64>,
        y_max: Option<f64>,
        fraction_digits: Option<i32>,
        body: ChartBody,
    ) -> Self {
        Self {
            id,
            title,
            unit,
            y_min,
            y_max,
            fraction_digits,
            body,
        }
    }
}
