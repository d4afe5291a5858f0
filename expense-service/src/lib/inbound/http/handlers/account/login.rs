use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;

use super::CredentialsRequest;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::router::AppState;

/// Exchange credentials for the `access_token` session cookie.
///
/// A username that cannot be normalized is reported exactly like an
/// unknown one.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<MessageResponseData>), ApiError> {
    let Json(body) = body?;

    let username = Username::new(&body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let outcome = state
        .user_service
        .login(LoginCommand {
            username,
            password: body.password,
        })
        .await?;

    Ok((
        jar.add(state.session_cookies.session(outcome.token)),
        ApiSuccess::new(StatusCode::OK, MessageResponseData::new("Login successful")),
    ))
}
