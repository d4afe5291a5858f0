use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use axum_extra::extract::CookieJar;

use super::cookies::ACCESS_TOKEN_COOKIE;
use super::handlers::ApiError;
use crate::domain::identity::require_admin;
use crate::domain::identity::IdentityError;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Extension type holding the user resolved for the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the session cookie to a live user and adds it
/// to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(|cookie| cookie.value());

    let user = state.identity.resolve(token).await.map_err(|e| {
        match &e {
            IdentityError::Lookup(err) => tracing::error!(error = %err, "Identity lookup failed"),
            reason => tracing::debug!(reason = %reason, "Request not authenticated"),
        }
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Middleware that lets only administrators through. Must run after
/// `authenticate`.
pub async fn require_administrator(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = user.id;

    require_admin(user).map_err(|e| {
        tracing::warn!(user_id = %user_id, "Admin route refused");
        ApiError::from(e)
    })?;

    Ok(next.run(req).await)
}
