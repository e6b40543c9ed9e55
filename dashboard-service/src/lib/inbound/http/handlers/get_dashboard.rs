use axum::extract::Extension;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use auth::Authority;

use super::list_dashboards::DashboardData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::DashboardId;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::middleware::SecurityContext;
use crate::inbound::http::router::AppState;

/// `GET /dashboards/{id}` — fetch one dashboard. USER only.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(context): Extension<SecurityContext>,
    Path(dashboard_id): Path<i64>,
) -> Result<ApiSuccess<DashboardData>, ApiError> {
    context.require_authority(Authority::User)?;

    state
        .dashboard_service
        .get_dashboard(DashboardId(dashboard_id))
        .await
        .map_err(ApiError::from)
        .map(|ref dashboard| ApiSuccess::new(StatusCode::OK, dashboard.into()))
}
