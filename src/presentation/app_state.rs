// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::filter_holder::FilterStateHolder;
use crate::application::hospital_service::HospitalService;
use crate::application::live_dashboard::LiveDashboard;
use crate::domain::area::AnalyticsArea;
use std::collections::HashMap;
use std::sync::Arc;

/// Filter holder and the dashboard subscribed to it, for one area.
pub struct AreaSession {
    pub holder: FilterStateHolder,
    pub dashboard: Arc<LiveDashboard>,
}

impl AreaSession {
    pub fn new(dashboard: LiveDashboard) -> Self {
        let dashboard = Arc::new(dashboard);
        let holder = FilterStateHolder::new();
        holder.subscribe(dashboard.clone());
        Self { holder, dashboard }
    }
}

pub struct AppState {
    pub hospital_service: HospitalService,
    pub dashboard_service: DashboardService,
    pub sessions: HashMap<AnalyticsArea, AreaSession>,
}

impl AppState {
    /// Builds one live session per analytics area.
    pub async fn new(
        hospital_service: HospitalService,
        dashboard_service: DashboardService,
    ) -> anyhow::Result<Self> {
        let mut sessions = HashMap::new();
        for area in AnalyticsArea::ALL {
            let dashboard = dashboard_service.live_dashboard(area).await?;
            sessions.insert(area, AreaSession::new(dashboard));
        }

        Ok(Self {
            hospital_service,
            dashboard_service,
            sessions,
        })
    }

    pub fn session(&self, area: AnalyticsArea) -> Option<&AreaSession> {
        self.sessions.get(&area)
    }
}
