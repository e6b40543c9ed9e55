use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use auth::Authority;
use auth::Principal;
use auth::Requirement;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Request-scoped binding of a validated principal.
///
/// Created fresh by the [`authorize`] middleware for every request and
/// stored in that request's extensions; it never outlives or crosses
/// requests. Handlers use it for fine-grained authority checks on top of
/// the coarse policy decision.
#[derive(Debug, Clone)]
pub enum SecurityContext {
    Anonymous,
    Authenticated(Principal),
}

impl SecurityContext {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SecurityContext::Anonymous => None,
            SecurityContext::Authenticated(principal) => Some(principal),
        }
    }

    pub fn has_authority(&self, authority: Authority) -> bool {
        self.principal()
            .map_or(false, |principal| principal.has_authority(authority))
    }

    /// Demand an authority, failing with `403 Forbidden` when it is absent.
    pub fn require_authority(&self, authority: Authority) -> Result<&Principal, ApiError> {
        match self.principal() {
            Some(principal) if principal.has_authority(authority) => Ok(principal),
            _ => Err(ApiError::Forbidden(format!(
                "Requires {} authority",
                authority
            ))),
        }
    }
}

/// Policy-driven authentication middleware.
///
/// Resolves the access requirement for the request's method and path, then:
/// - `Public`: always forwards; a presented token is validated
///   opportunistically so public endpoints can still see who is calling,
///   but an invalid or absent token leaves the context anonymous.
/// - `Authenticated`: demands a valid bearer token, else 401.
/// - `RequiresAuthority`: as `Authenticated`, plus the authority check,
///   else 403.
///
/// A rejected request is terminal; the client re-authenticates to obtain a
/// fresh token.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let requirement = state.policy.requirement_for(req.method(), req.uri().path());

    let context = match requirement {
        Requirement::Public => match bearer_token(&req) {
            Some(token) => match state.token_service.validate(token) {
                Ok(claims) => SecurityContext::Authenticated(claims.into_principal()),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring invalid token on public route");
                    SecurityContext::Anonymous
                }
            },
            None => SecurityContext::Anonymous,
        },
        Requirement::Authenticated => validated_context(&state, &req)?,
        Requirement::RequiresAuthority(authority) => {
            let context = validated_context(&state, &req)?;
            if !context.has_authority(authority) {
                return Err(ApiError::Forbidden(format!(
                    "Requires {} authority",
                    authority
                )));
            }
            context
        }
    };

    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}

fn validated_context(state: &AppState, req: &Request) -> Result<SecurityContext, ApiError> {
    let token = bearer_token(req).ok_or_else(|| {
        ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
    })?;

    let claims = state.token_service.validate(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    Ok(SecurityContext::Authenticated(claims.into_principal()))
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
