use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ExpenseResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<ExpenseResponseData>>, ApiError> {
    state
        .expense_service
        .list_expenses(&user.id)
        .await
        .map_err(ApiError::from)
        .map(|expenses| {
            let expense_data: Vec<ExpenseResponseData> =
                expenses.iter().map(|e| e.into()).collect();
            ApiSuccess::new(StatusCode::OK, expense_data)
        })
}
