use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::AllowHeaders;
use tower_http::cors::AllowMethods;
use tower_http::cors::AllowOrigin;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::cookies::SessionCookies;
use super::handlers::account;
use super::handlers::admin;
use super::handlers::expenses;
use super::handlers::ApiSuccess;
use super::handlers::MessageResponseData;
use super::middleware::authenticate;
use super::middleware::require_administrator;
use crate::config::DeploymentEnvironment;
use crate::domain::expense::ports::ExpenseServicePort;
use crate::domain::identity::IdentityResolver;
use crate::domain::user::ports::UserServicePort;

/// Application state shared by every handler.
///
/// Services are held behind their ports so the router can be driven by
/// any implementation.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub expense_service: Arc<dyn ExpenseServicePort>,
    pub identity: IdentityResolver,
    pub session_cookies: SessionCookies,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    expense_service: Arc<dyn ExpenseServicePort>,
    authenticator: Arc<Authenticator>,
    environment: DeploymentEnvironment,
    allowed_origins: &[String],
) -> Router {
    let state = AppState {
        identity: IdentityResolver::new(authenticator, Arc::clone(&user_service)),
        user_service,
        expense_service,
        session_cookies: SessionCookies::new(environment),
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/auth/register", post(account::register))
        .route("/auth/login", post(account::login))
        .route("/auth/logout", post(account::logout));

    let protected_routes = Router::new()
        .route("/auth/me", get(account::me))
        .route(
            "/expenses",
            post(expenses::create_expense).get(expenses::list_expenses),
        )
        .route(
            "/expenses/:expense_id",
            put(expenses::update_expense).delete(expenses::delete_expense),
        )
        .route(
            "/expenses/summary/monthly",
            get(expenses::monthly_summary),
        )
        .route(
            "/expenses/summary/category",
            get(expenses::category_summary),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    // Layers run bottom-up: resolve the user first, then check the flag.
    let admin_routes = Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/expenses", get(admin::list_all_expenses))
        .route_layer(middleware::from_fn(require_administrator))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

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
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

async fn root() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Expense Tracker API running"),
    )
}

/// Credentialed CORS for the configured origins. Unparseable origins are
/// skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
