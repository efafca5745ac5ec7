// Repository trait for analytics data access
use crate::domain::dataset::AnalyticsDataset;
use crate::domain::hospital::Hospital;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// The full dataset; shared, never mutated after load
    async fn load_dataset(&self) -> anyhow::Result<Arc<AnalyticsDataset>>;

    /// List all hospitals
    async fn list_hospitals(&self) -> anyhow::Result<Vec<Hospital>>;
}
