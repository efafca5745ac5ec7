use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::area::AnalyticsArea;
use crate::domain::filter::{FilterField, FilterState};
use crate::domain::metrics::{MetricConfig, MetricKind, MetricSpec};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataSettings {
    /// TOML dataset to serve instead of the embedded seed.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub blocks: AreaWidgets,
    #[serde(default)]
    pub services: AreaWidgets,
    #[serde(default)]
    pub locations: AreaWidgets,
    #[serde(default)]
    pub providers: AreaWidgets,
    #[serde(default)]
    pub turnover: AreaWidgets,
    #[serde(default)]
    pub primetime: AreaWidgets,
}

impl WidgetsConfig {
    pub fn for_area(&self, area: AnalyticsArea) -> &AreaWidgets {
        match area {
            AnalyticsArea::Blocks => &self.blocks,
            AnalyticsArea::Services => &self.services,
            AnalyticsArea::Locations => &self.locations,
            AnalyticsArea::Providers => &self.providers,
            AnalyticsArea::Turnover => &self.turnover,
            AnalyticsArea::Primetime => &self.primetime,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AreaWidgets {
    #[serde(default)]
    pub tiles: Vec<TileConfig>,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

impl AreaWidgets {
    /// One metric per tile, named by the tile id.
    pub fn metric_config(&self) -> MetricConfig {
        self.tiles.iter().fold(MetricConfig::new(), |config, tile| {
            config.with(MetricSpec::new(&tile.id, tile.metric, tile.field.as_deref()))
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TileConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
    pub metric: MetricKind,
    #[serde(default)]
    pub field: Option<String>,
}

fn default_precision() -> usize {
    1
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub id: String,
    /// May reference `${hospital}`, `${location}`, `${specialty}`, `${surgeon}`.
    pub title: String,
    pub kind: String,
    pub unit: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
    /// Bar charts: record measure plotted per filtered record.
    #[serde(default)]
    pub field: Option<String>,
    /// Line charts: trend metric to plot.
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .add_source(config::Environment::with_prefix("OR_ANALYTICS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

const WIDGETS_FILE: &str = "config/widgets.toml";
const BUILT_IN_WIDGETS: &str = include_str!("../../config/widgets.toml");

/// Widgets from `config/widgets.toml`, or the layout compiled into the
/// binary when that file is absent.
pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    if !Path::new(WIDGETS_FILE).exists() {
        tracing::info!("{} not found, using built-in widget layout", WIDGETS_FILE);
        return parse_widgets_config(BUILT_IN_WIDGETS);
    }
    widgets_from(config::File::with_name("config/widgets"))
}

/// Parse a widgets document held in memory.
pub fn parse_widgets_config(toml: &str) -> anyhow::Result<WidgetsConfig> {
    widgets_from(config::File::from_str(toml, config::FileFormat::Toml))
}

fn widgets_from<S>(source: S) -> anyhow::Result<WidgetsConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder().add_source(source).build()?;

    Ok(settings.try_deserialize()?)
}

/// Template variables for the current selection; unset levels read "All".
pub fn filter_vars(filter: &FilterState) -> HashMap<String, String> {
    FilterField::ALL
        .iter()
        .map(|field| {
            let value = filter.value(*field).unwrap_or("All");
            (field.as_str().to_string(), value.to_string())
        })
        .collect()
}

/// Replace `${name}` placeholders in a title string in one pass.
/// Substituted values are never expanded again; unknown names stay as written.
pub fn prepare_title(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_title() {
        let filter = FilterState::default()
            .select_hospital(Some("MARH".to_string()))
            .select_location(Some("MARH OR".to_string()));
        let vars = filter_vars(&filter);

        let title = "Utilization at ${location} (${hospital}) for ${specialty}";
        let result = prepare_title(title, &vars);

        assert_eq!(result, "Utilization at MARH OR (MARH) for All");
    }

    #[test]
    fn test_prepare_title_does_not_expand_substituted_values() {
        let filter = FilterState::default()
            .select_hospital(Some("${location}".to_string()))
            .select_location(Some("MARH OR".to_string()));
        let vars = filter_vars(&filter);

        let result = prepare_title("${hospital} / ${location} / ${room} / ${open", &vars);

        assert_eq!(result, "${location} / MARH OR / ${room} / ${open");
    }

    #[test]
    fn test_parse_widgets_config() {
        let widgets = parse_widgets_config(
            r#"
            [[blocks.tiles]]
            id = "release_rate"
            title = "Release Rate"
            unit = "%"
            metric = "rate"
            field = "released"

            [[blocks.tiles]]
            id = "total_blocks"
            title = "Blocks"
            precision = 0
            metric = "count"

            [[blocks.charts]]
            id = "block_utilization"
            title = "Blocks at ${location}"
            kind = "bar"
            unit = "%"
            field = "utilization"
            "#,
        )
        .unwrap();

        let blocks = widgets.for_area(AnalyticsArea::Blocks);
        assert_eq!(blocks.tiles.len(), 2);
        assert_eq!(blocks.tiles[0].precision, 1);
        assert_eq!(blocks.charts[0].field.as_deref(), Some("utilization"));
        assert!(widgets.for_area(AnalyticsArea::Providers).tiles.is_empty());

        let metrics = blocks.metric_config();
        assert_eq!(metrics.metrics[0].kind, MetricKind::Rate);
        assert_eq!(metrics.metrics[1].name, "total_blocks");
    }

    #[test]
    fn test_load_widgets_config_matches_built_in_layout() {
        let loaded = load_widgets_config().unwrap();
        let built_in = parse_widgets_config(BUILT_IN_WIDGETS).unwrap();
        for area in AnalyticsArea::ALL {
            assert_eq!(
                loaded.for_area(area).tiles.len(),
                built_in.for_area(area).tiles.len(),
                "{} tiles differ",
                area
            );
        }
    }

    #[test]
    fn test_shipped_widgets_config_parses() {
        let widgets = parse_widgets_config(include_str!("../../config/widgets.toml")).unwrap();
        for area in AnalyticsArea::ALL {
            assert!(!widgets.for_area(area).tiles.is_empty(), "{} has no tiles", area);
        }
    }
}
