// Dashboard service - Use case for building dashboards
use crate::application::analytics_repository::AnalyticsRepository;
use crate::application::dashboard_builder::build_dashboard;
use crate::application::filter_options::{filter_options, FilterOptions};
use crate::application::live_dashboard::LiveDashboard;
use crate::domain::area::AnalyticsArea;
use crate::domain::dashboard::Dashboard;
use crate::domain::filter::FilterState;
use crate::infrastructure::config::WidgetsConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn AnalyticsRepository>,
    widgets_config: Arc<WidgetsConfig>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn AnalyticsRepository>, widgets_config: WidgetsConfig) -> Self {
        Self {
            repository,
            widgets_config: Arc::new(widgets_config),
        }
    }

    pub async fn get_dashboard(&self, area: AnalyticsArea, filter: &FilterState) -> anyhow::Result<Dashboard> {
        let dataset = self.repository.load_dataset().await?;
        Ok(build_dashboard(&dataset, area, filter, &self.widgets_config))
    }

    pub async fn get_filter_options(&self, filter: &FilterState) -> anyhow::Result<FilterOptions> {
        let dataset = self.repository.load_dataset().await?;
        Ok(filter_options(&dataset, filter))
    }

    /// A dashboard that recomputes itself whenever its holder's filter changes.
    pub async fn live_dashboard(&self, area: AnalyticsArea) -> anyhow::Result<LiveDashboard> {
        let dataset = self.repository.load_dataset().await?;
        Ok(LiveDashboard::new(area, dataset, self.widgets_config.clone()))
    }
}
