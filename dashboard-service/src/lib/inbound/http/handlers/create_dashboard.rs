use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::list_dashboards::DashboardData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::CreateDashboardCommand;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::router::AppState;

/// `POST /dashboards` — create a dashboard.
pub async fn create_dashboard(
    State(state): State<AppState>,
    Json(body): Json<CreateDashboardRequest>,
) -> Result<ApiSuccess<DashboardData>, ApiError> {
    state
        .dashboard_service
        .create_dashboard(CreateDashboardCommand { title: body.title })
        .await
        .map_err(ApiError::from)
        .map(|ref dashboard| ApiSuccess::new(StatusCode::CREATED, dashboard.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDashboardRequest {
    title: String,
}
