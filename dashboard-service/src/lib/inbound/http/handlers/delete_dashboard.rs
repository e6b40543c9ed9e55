use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::router::AppState;

/// `DELETE /dashboards/{id}` — delete a dashboard.
pub async fn delete_dashboard(
    State(state): State<AppState>,
    Path(dashboard_id): Path<i64>,
) -> Result<ApiSuccess<DeleteDashboardResponseData>, ApiError> {
    state
        .dashboard_service
        .delete_dashboard(DashboardId(dashboard_id))
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteDashboardResponseData {
                    message: "Dashboard record deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteDashboardResponseData {
    pub message: String,
}
