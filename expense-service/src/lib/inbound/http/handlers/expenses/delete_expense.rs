use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::expense::models::ExpenseId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(expense_id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let expense_id = ExpenseId::from_string(&expense_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .expense_service
        .delete_expense(&user.id, &expense_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("Expense deleted successfully"),
            )
        })
}
