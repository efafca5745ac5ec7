// Hospital service - Use case for listing hospitals
use crate::application::analytics_repository::AnalyticsRepository;
use crate::domain::hospital::Hospital;
use std::sync::Arc;

#[derive(Clone)]
pub struct HospitalService {
    repository: Arc<dyn AnalyticsRepository>,
}

impl HospitalService {
    pub fn new(repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_hospitals(&self) -> anyhow::Result<Vec<Hospital>> {
        let mut hospitals = self.repository.list_hospitals().await?;
        hospitals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hospitals)
    }
}
