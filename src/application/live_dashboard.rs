// Live dashboard - keeps an area's dashboard in step with its filter holder
use crate::application::dashboard_builder::build_dashboard;
use crate::application::filter_holder::FilterSubscriber;
use crate::domain::area::AnalyticsArea;
use crate::domain::dashboard::Dashboard;
use crate::domain::dataset::AnalyticsDataset;
use crate::domain::filter::FilterState;
use crate::infrastructure::config::WidgetsConfig;
use std::sync::{Arc, PoisonError, RwLock};

pub struct LiveDashboard {
    area: AnalyticsArea,
    dataset: Arc<AnalyticsDataset>,
    widgets_config: Arc<WidgetsConfig>,
    snapshot: RwLock<Dashboard>,
}

impl LiveDashboard {
    pub fn new(area: AnalyticsArea, dataset: Arc<AnalyticsDataset>, widgets_config: Arc<WidgetsConfig>) -> Self {
        let snapshot = build_dashboard(&dataset, area, &FilterState::default(), &widgets_config);
        Self {
            area,
            dataset,
            widgets_config,
            snapshot: RwLock::new(snapshot),
        }
    }

    pub fn area(&self) -> AnalyticsArea {
        self.area
    }

    pub fn snapshot(&self) -> Dashboard {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FilterSubscriber for LiveDashboard {
    fn on_filter_change(&self, filter: &FilterState) {
        let dashboard = build_dashboard(&self.dataset, self.area, filter, &self.widgets_config);
        tracing::debug!(
            "Recomputed {} dashboard: {} of {} records",
            self.area,
            dashboard.matched,
            dashboard.total
        );
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::filter_holder::FilterStateHolder;
    use crate::infrastructure::config::parse_widgets_config;
    use crate::infrastructure::mock_repository::MockRepository;

    #[test]
    fn test_snapshot_follows_holder() {
        let dataset = MockRepository::seeded().unwrap().dataset();
        let widgets = Arc::new(parse_widgets_config(include_str!("../../config/widgets.toml")).unwrap());
        let view = Arc::new(LiveDashboard::new(AnalyticsArea::Providers, dataset, widgets));
        let holder = FilterStateHolder::new();
        holder.subscribe(view.clone());

        let everyone = view.snapshot();
        assert_eq!(everyone.matched, everyone.total);

        holder.set_filter(FilterState::default().select_specialty(Some("Neurosurgery".to_string())));
        let neuro = view.snapshot();
        assert_eq!(neuro.matched, 2);
        assert_eq!(neuro.filter.specialty.as_deref(), Some("Neurosurgery"));
        assert_eq!(view.area(), AnalyticsArea::Providers);
    }
}
