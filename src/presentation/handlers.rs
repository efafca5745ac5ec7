// HTTP request handlers
use crate::domain::area::AnalyticsArea;
use crate::domain::error::FilterError;
use crate::domain::filter::FilterState;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::{AppState, AreaSession};
use crate::presentation::filter_query::FilterQuery;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

type HandlerResult = Result<Response, Response>;

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all hospitals
pub async fn list_hospitals(headers: HeaderMap, State(state): State<Arc<AppState>>) -> HandlerResult {
    let compress = accepts_brotli(&headers);

    let hospitals = match state.hospital_service.list_hospitals().await {
        Ok(hospitals) => hospitals,
        Err(e) => {
            tracing::error!("Error fetching hospitals: {:#}", e);
            Vec::new()
        }
    };

    respond(&hospitals, compress).await
}

/// One-shot dashboard for the filter carried in the query string
pub async fn get_dashboard(
    Path(area): Path<String>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> HandlerResult {
    let compress = accepts_brotli(&headers);
    let area = parse_area(&area)?;
    let filter = parse_filter(query)?;

    let dashboard = state
        .dashboard_service
        .get_dashboard(area, &filter)
        .await
        .map_err(|e| internal_error("building dashboard", e))?;

    respond(&dashboard, compress).await
}

/// Selectable values for each filter level
pub async fn get_filter_options(
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> HandlerResult {
    let compress = accepts_brotli(&headers);
    let filter = parse_filter(query)?;

    let options = state
        .dashboard_service
        .get_filter_options(&filter)
        .await
        .map_err(|e| internal_error("loading filter options", e))?;

    respond(&options, compress).await
}

/// Filter currently held for an area
pub async fn get_area_filter(
    Path(area): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> HandlerResult {
    let compress = accepts_brotli(&headers);
    let session = area_session(&state, &area)?;
    respond(&session.holder.current(), compress).await
}

/// Replace an area's filter; responds with the dashboard for that filter,
/// even if another update has replaced it since.
pub async fn put_area_filter(
    Path(area): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(filter): Json<FilterState>,
) -> HandlerResult {
    let compress = accepts_brotli(&headers);
    let session = area_session(&state, &area)?;

    session.holder.set_filter(filter.clone());
    let dashboard = state
        .dashboard_service
        .get_dashboard(session.dashboard.area(), &filter)
        .await
        .map_err(|e| internal_error("building dashboard", e))?;

    respond(&dashboard, compress).await
}

/// Dashboard derived from an area's held filter
pub async fn get_area_dashboard(
    Path(area): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> HandlerResult {
    let compress = accepts_brotli(&headers);
    let session = area_session(&state, &area)?;
    respond(&session.dashboard.snapshot(), compress).await
}

fn parse_area(area: &str) -> Result<AnalyticsArea, Response> {
    area.parse::<AnalyticsArea>().map_err(IntoResponse::into_response)
}

fn parse_filter(query: FilterQuery) -> Result<FilterState, Response> {
    query
        .into_filter_state(chrono::Local::now().date_naive())
        .map_err(IntoResponse::into_response)
}

fn area_session<'a>(state: &'a AppState, area: &str) -> Result<&'a AreaSession, Response> {
    let area = parse_area(area)?;
    state.session(area).ok_or_else(|| {
        tracing::error!("No session registered for {}", area);
        StatusCode::NOT_FOUND.into_response()
    })
}

fn internal_error(action: &str, e: anyhow::Error) -> Response {
    tracing::error!("Error {}: {:#}", action, e);
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

async fn respond<T: serde::Serialize>(data: &T, compress: bool) -> HandlerResult {
    json_response(data, compress)
        .await
        .map_err(IntoResponse::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analytics_repository::AnalyticsRepository;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::hospital_service::HospitalService;
    use crate::infrastructure::config::parse_widgets_config;
    use crate::infrastructure::mock_repository::MockRepository;
    use serde_json::Value;

    async fn state() -> Arc<AppState> {
        let repository: Arc<dyn AnalyticsRepository> = Arc::new(MockRepository::seeded().unwrap());
        let widgets = parse_widgets_config(include_str!("../../config/widgets.toml")).unwrap();
        let state = AppState::new(
            HospitalService::new(repository.clone()),
            DashboardService::new(repository, widgets),
        )
        .await
        .unwrap();
        Arc::new(state)
    }

    async fn body_json(result: HandlerResult) -> (StatusCode, Value) {
        let response = result.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_hospitals_sorted() {
        let (status, body) = body_json(list_hospitals(HeaderMap::new(), State(state().await)).await).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names.len(), 4);
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_get_dashboard_with_query_filter() {
        let query = FilterQuery {
            specialty: Some("Neurosurgery".to_string()),
            ..Default::default()
        };
        let result = get_dashboard(
            Path("blocks".to_string()),
            Query(query),
            HeaderMap::new(),
            State(state().await),
        )
        .await;

        let (status, body) = body_json(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched"], 2);
        assert_eq!(body["total"], 10);
    }

    #[tokio::test]
    async fn test_bad_requests_are_rejected() {
        let state = state().await;

        let unknown_area = get_dashboard(
            Path("theatres".to_string()),
            Query(FilterQuery::default()),
            HeaderMap::new(),
            State(state.clone()),
        )
        .await;
        let (status, body) = body_json(unknown_area).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("theatres"));

        let inverted = FilterQuery {
            start: Some("2024-12-31".to_string()),
            end: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let result = get_filter_options(Query(inverted), HeaderMap::new(), State(state)).await;
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_area_filter_updates_live_dashboard() {
        let state = state().await;
        let filter = FilterState::default().select_specialty(Some("ENT".to_string()));

        let (status, body) = body_json(
            put_area_filter(
                Path("Blocks".to_string()),
                HeaderMap::new(),
                State(state.clone()),
                Json(filter),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched"], 2);

        let (_, held) = body_json(
            get_area_filter(Path("blocks".to_string()), HeaderMap::new(), State(state.clone())).await,
        )
        .await;
        assert_eq!(held["specialty"], "ENT");

        let (_, dashboard) = body_json(
            get_area_dashboard(Path("blocks".to_string()), HeaderMap::new(), State(state.clone())).await,
        )
        .await;
        assert_eq!(dashboard["matched"], 2);

        // Other areas keep their own filter.
        let (_, providers) = body_json(
            get_area_filter(Path("providers".to_string()), HeaderMap::new(), State(state)).await,
        )
        .await;
        assert!(providers["specialty"].is_null());
    }
}
