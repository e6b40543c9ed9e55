use axum::extract::Extension;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use auth::Authority;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::dashboard::models::Dashboard;
use crate::domain::dashboard::ports::DashboardServicePort;
use crate::inbound::http::middleware::SecurityContext;
use crate::inbound::http::router::AppState;

/// `GET /dashboards` — list every dashboard. ADMIN only.
pub async fn list_dashboards(
    State(state): State<AppState>,
    Extension(context): Extension<SecurityContext>,
) -> Result<ApiSuccess<Vec<DashboardData>>, ApiError> {
    context.require_authority(Authority::Admin)?;

    state
        .dashboard_service
        .list_dashboards()
        .await
        .map_err(ApiError::from)
        .map(|dashboards| {
            ApiSuccess::new(
                StatusCode::OK,
                dashboards.iter().map(DashboardData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Dashboard> for DashboardData {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            id: dashboard.id.0,
            title: dashboard.title.clone(),
            created_at: dashboard.created_at,
            updated_at: dashboard.updated_at,
        }
    }
}
