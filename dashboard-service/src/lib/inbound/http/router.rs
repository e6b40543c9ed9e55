use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::PolicyTable;
use auth::Requirement;
use auth::TokenService;
use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_dashboard::create_dashboard;
use super::handlers::create_user::create_user;
use super::handlers::delete_dashboard::delete_dashboard;
use super::handlers::get_dashboard::get_dashboard;
use super::handlers::list_dashboards::list_dashboards;
use super::handlers::update_dashboard::update_dashboard;
use super::middleware::authorize;
use crate::config::AuthConfig;
use crate::domain::dashboard::service::DashboardService;
use crate::domain::users::service::UserService;
use crate::outbound::repositories::InMemoryDashboardRepository;
use crate::outbound::repositories::InMemoryUserRepository;

/// Application context built once at startup.
///
/// Holds the secret-derived services, the policy table, and the collaborator
/// handles; passed by reference into middleware and handlers instead of any
/// ambient lookup. Everything here is read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<InMemoryDashboardRepository>>,
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
    pub authenticator: Arc<Authenticator<InMemoryUserRepository>>,
    pub token_service: Arc<TokenService>,
    pub policy: Arc<PolicyTable>,
}

impl AppState {
    pub fn new(auth: &AuthConfig, policy: PolicyTable) -> Result<Self, PasswordError> {
        let users = Arc::new(InMemoryUserRepository::new());
        let dashboards = Arc::new(InMemoryDashboardRepository::new());
        let password_hasher = PasswordHasher::with_time_cost(auth.hash_time_cost)?;

        Ok(Self {
            dashboard_service: Arc::new(DashboardService::new(dashboards)),
            user_service: Arc::new(UserService::new(Arc::clone(&users), password_hasher)),
            authenticator: Arc::new(Authenticator::new(users)),
            token_service: Arc::new(TokenService::new(
                auth.secret.as_bytes(),
                auth.token_ttl_seconds,
            )),
            policy: Arc::new(policy),
        })
    }
}

/// Production access policy, evaluated top to bottom.
///
/// Everything not matched by a rule falls through to Public. That default is
/// deliberately permissive and kept as an explicit configuration choice:
/// tightening it changes the service's security posture and is a product
/// decision, not a cleanup.
pub fn access_policy() -> PolicyTable {
    PolicyTable::new(Requirement::Public)
        .rule(Method::GET, "/dashboards/**", Requirement::Authenticated)
        .rule(Method::POST, "/users/**", Requirement::Public)
        .rule(Method::POST, "/dashboards", Requirement::Public)
        .rule(Method::POST, "/authenticate", Requirement::Public)
        .rule(Method::DELETE, "/dashboards/**", Requirement::Public)
        .rule(Method::PUT, "/dashboards/**", Requirement::Public)
        .rule(Method::GET, "/management-dashboard/**", Requirement::Public)
}

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/authenticate", post(authenticate))
        .route("/users", post(create_user))
        .route("/dashboards", get(list_dashboards).post(create_dashboard))
        .route(
            "/dashboards/:dashboard_id",
            get(get_dashboard)
                .put(update_dashboard)
                .delete(delete_dashboard),
        )
        .layer(middleware::from_fn_with_state(state.clone(), authorize))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
