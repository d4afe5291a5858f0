use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

/// Clear the session cookie. The token itself stays valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<MessageResponseData>) {
    (
        jar.add(state.session_cookies.removal()),
        ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Logged out")),
    )
}
