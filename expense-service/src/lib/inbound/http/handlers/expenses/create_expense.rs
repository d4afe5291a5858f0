use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ExpenseRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ExpenseResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    body: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<ApiSuccess<ExpenseResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .expense_service
        .create_expense(&user.id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref expense| ApiSuccess::new(StatusCode::OK, expense.into()))
}
