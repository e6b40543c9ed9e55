use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use auth::Authority;
use auth::CredentialRecord;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::users::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;

/// `POST /users` — register a user with a fixed authority assignment.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    state
        .user_service
        .register(RegisterUserCommand {
            username: body.username,
            password: body.password,
            authorities: body.authorities,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref record| ApiSuccess::new(StatusCode::CREATED, record.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: String,
    password: String,
    authorities: Vec<Authority>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub username: String,
    pub authorities: Vec<Authority>,
}

impl From<&CredentialRecord> for CreateUserResponseData {
    fn from(record: &CredentialRecord) -> Self {
        // The password hash stays inside; only identity and grants go out
        Self {
            username: record.username.clone(),
            authorities: record.authorities.clone(),
        }
    }
}
