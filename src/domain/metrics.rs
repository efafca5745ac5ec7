// Aggregate metrics reducer - summary numbers over a filtered subset
use serde::{Deserialize, Serialize};

/// A record the reducer can read numbers and flags from, by field name.
pub trait Measurable {
    /// Display label used for per-record breakdowns (bar chart index).
    fn label(&self) -> &str;

    fn measure(&self, field: &str) -> Option<f64>;

    fn flag(&self, _field: &str) -> Option<bool> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Average,
    Sum,
    Count,
    /// Share of records whose flag field is true, as a percentage.
    Rate,
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub name: String,
    pub kind: MetricKind,
    #[serde(default)]
    pub field: Option<String>,
}

impl MetricSpec {
    pub fn new(name: &str, kind: MetricKind, field: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            field: field.map(str::to_string),
        }
    }
}

/// Ordered list of metrics to compute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricConfig {
    pub metrics: Vec<MetricSpec>,
}

impl MetricConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, spec: MetricSpec) -> Self {
        self.metrics.push(spec);
        self
    }

}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

/// Metrics in configuration order. Every configured metric is present and
/// finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateMetrics {
    metrics: Vec<Metric>,
}

impl AggregateMetrics {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }
}

pub fn compute_aggregates<T: Measurable>(entities: &[&T], config: &MetricConfig) -> AggregateMetrics {
    let metrics = config
        .metrics
        .iter()
        .map(|spec| Metric {
            name: spec.name.clone(),
            value: reduce(entities, spec),
        })
        .collect();

    AggregateMetrics { metrics }
}

fn reduce<T: Measurable>(entities: &[&T], spec: &MetricSpec) -> f64 {
    if spec.kind == MetricKind::Count {
        return entities.len() as f64;
    }

    let Some(field) = spec.field.as_deref() else {
        return 0.0;
    };

    if spec.kind == MetricKind::Rate {
        if entities.is_empty() {
            return 0.0;
        }
        let flagged = entities
            .iter()
            .filter(|e| e.flag(field).unwrap_or(false))
            .count();
        return flagged as f64 / entities.len() as f64 * 100.0;
    }

    let values: Vec<f64> = entities
        .iter()
        .filter_map(|e| e.measure(field))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return 0.0;
    }

    match spec.kind {
        MetricKind::Average => values.iter().sum::<f64>() / values.len() as f64,
        MetricKind::Sum => values.iter().sum(),
        MetricKind::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        MetricKind::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        MetricKind::Count | MetricKind::Rate => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: &'static str,
        utilization: Option<f64>,
        released: bool,
    }

    impl Measurable for Sample {
        fn label(&self) -> &str {
            self.name
        }

        fn measure(&self, field: &str) -> Option<f64> {
            match field {
                "utilization" => self.utilization,
                _ => None,
            }
        }

        fn flag(&self, field: &str) -> Option<bool> {
            (field == "released").then_some(self.released)
        }
    }

    fn sample(name: &'static str, utilization: f64, released: bool) -> Sample {
        Sample {
            name,
            utilization: Some(utilization),
            released,
        }
    }

    fn config() -> MetricConfig {
        MetricConfig::new()
            .with(MetricSpec::new("total", MetricKind::Count, None))
            .with(MetricSpec::new("average_utilization", MetricKind::Average, Some("utilization")))
            .with(MetricSpec::new("utilization_sum", MetricKind::Sum, Some("utilization")))
            .with(MetricSpec::new("release_rate", MetricKind::Rate, Some("released")))
            .with(MetricSpec::new("peak", MetricKind::Max, Some("utilization")))
            .with(MetricSpec::new("floor", MetricKind::Min, Some("utilization")))
    }

    #[test]
    fn test_empty_subset_is_all_zero() {
        let metrics = compute_aggregates::<Sample>(&[], &config());
        assert_eq!(metrics.iter().count(), 6);
        for metric in metrics.iter() {
            assert_eq!(metric.value, 0.0, "{} should be zero", metric.name);
        }
    }

    #[test]
    fn test_single_record_average_is_its_value() {
        let only = sample("A", 42.5, false);
        let metrics = compute_aggregates(&[&only], &config());
        assert_eq!(metrics.get("average_utilization"), Some(42.5));
        assert_eq!(metrics.get("peak"), Some(42.5));
        assert_eq!(metrics.get("floor"), Some(42.5));
        assert_eq!(metrics.get("total"), Some(1.0));
    }

    #[test]
    fn test_release_rate() {
        let records: Vec<Sample> = (0..10).map(|i| sample("B", 50.0, i < 3)).collect();
        let refs: Vec<&Sample> = records.iter().collect();
        let metrics = compute_aggregates(&refs, &config());
        assert_eq!(metrics.get("release_rate"), Some(30.0));
        assert_eq!(metrics.get("utilization_sum"), Some(500.0));
    }

    #[test]
    fn test_missing_and_non_finite_values_are_skipped() {
        let a = sample("A", 80.0, false);
        let b = Sample { name: "B", utilization: None, released: true };
        let c = sample("C", f64::NAN, false);
        let metrics = compute_aggregates(&[&a, &b, &c], &config());
        assert_eq!(metrics.get("average_utilization"), Some(80.0));
        assert_eq!(metrics.get("total"), Some(3.0));
        assert!(metrics.iter().all(|m| m.value.is_finite()));
    }

    #[test]
    fn test_metrics_keep_configuration_order() {
        let metrics = compute_aggregates::<Sample>(&[], &config());
        let names: Vec<&str> = metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["total", "average_utilization", "utilization_sum", "release_rate", "peak", "floor"]);
        assert_eq!(metrics.get("unknown"), None);
    }
}
