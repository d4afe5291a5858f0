use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ExpenseResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_all_expenses(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ExpenseResponseData>>, ApiError> {
    state
        .expense_service
        .list_all_expenses()
        .await
        .map_err(ApiError::from)
        .map(|expenses| {
            let expense_data: Vec<ExpenseResponseData> =
                expenses.iter().map(|e| e.into()).collect();
            ApiSuccess::new(StatusCode::OK, expense_data)
        })
}
