// Dashboard builder - filter, reduce and shape one analytics area
use crate::domain::area::AnalyticsArea;
use crate::domain::chart::{BarDatum, ChartBody, ChartData, SeriesData, TileData};
use crate::domain::dashboard::Dashboard;
use crate::domain::dataset::AnalyticsDataset;
use crate::domain::filter::{filter_entities, FilterField, FilterState, Filterable};
use crate::domain::format::{format_value, UtilizationBand};
use crate::domain::metrics::{compute_aggregates, AggregateMetrics, Measurable};
use crate::domain::trend::TrendSeries;
use crate::infrastructure::config::{filter_vars, prepare_title, AreaWidgets, ChartConfig, WidgetsConfig};
use std::collections::HashMap;

/// Rebuild an area's dashboard from scratch for `filter`.
pub fn build_dashboard(
    dataset: &AnalyticsDataset,
    area: AnalyticsArea,
    filter: &FilterState,
    widgets: &WidgetsConfig,
) -> Dashboard {
    let area_widgets = widgets.for_area(area);
    match area {
        AnalyticsArea::Blocks => build_area(area, &dataset.blocks, &dataset.trends, filter, area_widgets),
        AnalyticsArea::Services => {
            build_area(area, &dataset.service_lines, &dataset.trends, filter, area_widgets)
        }
        AnalyticsArea::Locations => {
            build_area(area, &dataset.locations, &dataset.trends, filter, area_widgets)
        }
        AnalyticsArea::Providers => {
            build_area(area, &dataset.providers, &dataset.trends, filter, area_widgets)
        }
        AnalyticsArea::Turnover => {
            build_area(area, &dataset.turnover, &dataset.trends, filter, area_widgets)
        }
        AnalyticsArea::Primetime => {
            build_area(area, &dataset.primetime, &dataset.trends, filter, area_widgets)
        }
    }
}

fn build_area<T: Filterable + Measurable>(
    area: AnalyticsArea,
    entities: &[T],
    trends: &[TrendSeries],
    filter: &FilterState,
    widgets: &AreaWidgets,
) -> Dashboard {
    let filtered = filter_entities(entities, filter);
    let aggregates = compute_aggregates(&filtered, &widgets.metric_config());

    tracing::debug!(
        "Built {} aggregates for {}: {} of {} records matched over {} days",
        widgets.tiles.len(),
        area,
        filtered.len(),
        entities.len(),
        filter.date_range.days()
    );
    for metric in aggregates.iter() {
        tracing::trace!("{} {} = {}", area, metric.name, metric.value);
    }

    let tiles = build_tiles(widgets, &aggregates);

    let vars = filter_vars(filter);
    let charts = widgets
        .charts
        .iter()
        .filter_map(|chart| build_chart(chart, &filtered, trends, filter, &vars))
        .collect();

    Dashboard::new(
        area,
        dashboard_title(area, filter),
        filter.clone(),
        filtered.len(),
        entities.len(),
        tiles,
        charts,
    )
}

// Tiles are always emitted; an empty subset reads as zero.
fn build_tiles(widgets: &AreaWidgets, aggregates: &AggregateMetrics) -> Vec<TileData> {
    widgets
        .tiles
        .iter()
        .map(|tile| {
            let value = aggregates.get(&tile.id).unwrap_or(0.0);
            TileData::new(
                tile.id.clone(),
                tile.title.clone(),
                tile.unit.clone(),
                value,
                tile.precision,
                format_value(value, tile.precision, &tile.unit),
            )
        })
        .collect()
}

fn build_chart<T: Measurable>(
    chart: &ChartConfig,
    filtered: &[&T],
    trends: &[TrendSeries],
    filter: &FilterState,
    vars: &HashMap<String, String>,
) -> Option<ChartData> {
    let body = match chart.kind.as_str() {
        "bar" => bar_body(chart, filtered)?,
        "line" => line_body(chart, trends, filter)?,
        other => {
            tracing::warn!("Skipping chart {} - unknown kind {}", chart.id, other);
            return None;
        }
    };

    // Only add chart if it has data
    if body.is_empty() {
        tracing::debug!("Skipping chart {} - no data for current filter", chart.id);
        return None;
    }

    Some(ChartData::new(
        chart.id.clone(),
        prepare_title(&chart.title, vars),
        chart.unit.clone(),
        chart.y_min,
        chart.y_max,
        chart.fraction_digits,
        body,
    ))
}

fn bar_body<T: Measurable>(chart: &ChartConfig, filtered: &[&T]) -> Option<ChartBody> {
    let Some(field) = chart.field.as_deref() else {
        tracing::warn!("Bar chart {} has no field configured", chart.id);
        return None;
    };
    let banded = chart.unit.as_deref() == Some("%");

    let bars = filtered
        .iter()
        .filter_map(|entity| {
            let value = entity.measure(field).filter(|v| v.is_finite())?;
            let color = if banded {
                Some(UtilizationBand::from_value(value).color().to_string())
            } else {
                chart.color.clone()
            };
            Some(BarDatum::new(entity.label().to_string(), value, color))
        })
        .collect();

    Some(ChartBody::Bar(bars))
}

fn line_body(chart: &ChartConfig, trends: &[TrendSeries], filter: &FilterState) -> Option<ChartBody> {
    let Some(metric) = chart.metric.as_deref() else {
        tracing::warn!("Line chart {} has no metric configured", chart.id);
        return None;
    };

    let scope = filter.site_scope();
    let comparison = filter.active_comparison();
    let mut series_list = Vec::new();

    for trend in filter_entities(trends, &scope) {
        if trend.metric != metric {
            continue;
        }

        let current = trend.points_within(&filter.date_range);
        if !current.is_empty() {
            series_list.push(SeriesData::new(
                format!("{}:current", trend.location),
                trend.location.clone(),
                chart.color.clone(),
                current,
            ));
        }

        if let Some(range) = comparison {
            let previous = trend.points_within(&range);
            if !previous.is_empty() {
                series_list.push(SeriesData::new(
                    format!("{}:comparison", trend.location),
                    format!("{} (comparison)", trend.location),
                    None,
                    previous,
                ));
            }
        }
    }

    Some(ChartBody::Line(series_list))
}

fn dashboard_title(area: AnalyticsArea, filter: &FilterState) -> String {
    let scope = [
        FilterField::Surgeon,
        FilterField::Specialty,
        FilterField::Location,
        FilterField::Hospital,
    ]
    .iter()
    .find_map(|field| filter.value(*field))
    .unwrap_or("All Hospitals");

    format!(
        "{} - {} ({} to {})",
        area.title(),
        scope,
        filter.date_range.start,
        filter.date_range.end
    )
}
