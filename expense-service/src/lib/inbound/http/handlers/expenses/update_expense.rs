use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ExpenseRequest;
use crate::domain::expense::models::ExpenseId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ExpenseResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(expense_id): Path<String>,
    body: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<ApiSuccess<ExpenseResponseData>, ApiError> {
    let expense_id = ExpenseId::from_string(&expense_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let Json(body) = body?;

    state
        .expense_service
        .update_expense(&user.id, &expense_id, body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref expense| ApiSuccess::new(StatusCode::OK, expense.into()))
}
