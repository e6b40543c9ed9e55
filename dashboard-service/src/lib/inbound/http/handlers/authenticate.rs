use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use auth::AuthFailure;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// `POST /authenticate` — verify credentials and issue a signed token.
///
/// Unknown usernames and wrong passwords produce byte-identical 401
/// responses; nothing in the reply says which check failed.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let principal = state
        .authenticator
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| match e {
            AuthFailure::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthFailure::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthFailure::Store(err) => {
                ApiError::InternalServerError(format!("Credential lookup failed: {}", err))
            }
        })?;

    let token = state
        .token_service
        .issue(&principal)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    // Username only; the submitted password must never reach the logs
    tracing::info!(username = %principal.username, "Authentication successful");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData { token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
}
