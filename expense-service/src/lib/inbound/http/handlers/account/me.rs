use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;

pub async fn me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiSuccess<MeResponseData> {
    ApiSuccess::new(StatusCode::OK, (&user).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub id: String,
    pub username: String,
}

impl From<&User> for MeResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
        }
    }
}
