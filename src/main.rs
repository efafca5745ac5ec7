// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::analytics_repository::AnalyticsRepository;
use crate::application::dashboard_service::DashboardService;
use crate::application::hospital_service::HospitalService;
use crate::infrastructure::config::{load_server_config, load_widgets_config};
use crate::infrastructure::mock_repository::MockRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_area_dashboard, get_area_filter, get_dashboard, get_filter_options, health_check,
    list_hospitals, put_area_filter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let server_config = load_server_config()?;
    let widgets_config = load_widgets_config()?;

    // Create repository (infrastructure layer)
    let repository = match server_config.data.path.as_deref() {
        Some(path) => MockRepository::from_file(path).await?,
        None => MockRepository::seeded()?,
    };
    let dataset = repository.dataset();
    tracing::info!(
        "Loaded {} hospitals and {} records",
        dataset.hospitals.len(),
        dataset.record_count()
    );
    let repository: Arc<dyn AnalyticsRepository> = Arc::new(repository);

    // Create services (application layer)
    let hospital_service = HospitalService::new(repository.clone());
    let dashboard_service = DashboardService::new(repository, widgets_config);

    // Create application state
    let state = Arc::new(AppState::new(hospital_service, dashboard_service).await?);

    // Build router (presentation layer)
    // Compression is handled in the response builders, so no CompressionLayer here.
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/hospitals", get(list_hospitals))
        .route("/dashboards/:area", get(get_dashboard))
        .route("/filters/options", get(get_filter_options))
        .route("/areas/:area/filter", get(get_area_filter).put(put_area_filter))
        .route("/areas/:area/dashboard", get(get_area_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", server_config.server.host, server_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting or-analytics service on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
