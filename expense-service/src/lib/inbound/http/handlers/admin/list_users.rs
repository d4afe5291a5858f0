use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserSummaryResponseData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            let user_data: Vec<UserSummaryResponseData> = users.iter().map(|u| u.into()).collect();
            ApiSuccess::new(StatusCode::OK, user_data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummaryResponseData {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for UserSummaryResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            is_admin: user.is_admin,
        }
    }
}
