use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::list_dashboards::DashboardData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::models::UpdateDashboardCommand;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::router::AppState;

/// `PUT /dashboards/{id}` — update a dashboard's title.
pub async fn update_dashboard(
    State(state): State<AppState>,
    Path(dashboard_id): Path<i64>,
    Json(body): Json<UpdateDashboardRequest>,
) -> Result<ApiSuccess<DashboardData>, ApiError> {
    state
        .dashboard_service
        .update_dashboard(
            DashboardId(dashboard_id),
            UpdateDashboardCommand { title: body.title },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref dashboard| ApiSuccess::new(StatusCode::OK, dashboard.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateDashboardRequest {
    title: Option<String>,
}
