// Mock data repository - static dataset held in memory
use crate::application::analytics_repository::AnalyticsRepository;
use crate::domain::dataset::AnalyticsDataset;
use crate::domain::hospital::Hospital;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

const SEED: &str = include_str!("../../data/seed.toml");

#[derive(Debug, Clone)]
pub struct MockRepository {
    dataset: Arc<AnalyticsDataset>,
}

impl MockRepository {
    pub fn new(dataset: AnalyticsDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Dataset compiled into the binary.
    pub fn seeded() -> Result<Self> {
        let dataset = parse_dataset(SEED).context("Failed to parse embedded seed dataset")?;
        Ok(Self::new(dataset))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let dataset = parse_dataset(&contents)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> Arc<AnalyticsDataset> {
        self.dataset.clone()
    }
}

fn parse_dataset(contents: &str) -> Result<AnalyticsDataset> {
    let dataset: AnalyticsDataset = toml::from_str(contents)?;

    tracing::debug!(
        "Loaded dataset: {} hospitals, {} records, {} trend series",
        dataset.hospitals.len(),
        dataset.record_count(),
        dataset.trends.len()
    );

    Ok(dataset)
}

#[async_trait]
impl AnalyticsRepository for MockRepository {
    async fn load_dataset(&self) -> Result<Arc<AnalyticsDataset>> {
        Ok(self.dataset.clone())
    }

    async fn list_hospitals(&self) -> Result<Vec<Hospital>> {
        Ok(self.dataset.hospitals.clone())
    }
}
