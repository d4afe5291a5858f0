use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::PeriodQuery;
use crate::domain::expense::models::CategoryTotal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn category_summary(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<CategoryTotalResponseData>>, ApiError> {
    let Query(query) = query?;
    let period = query.try_into_period()?;

    state
        .expense_service
        .category_summary(&user.id, period)
        .await
        .map_err(ApiError::from)
        .map(|totals| {
            let total_data: Vec<CategoryTotalResponseData> =
                totals.iter().map(|t| t.into()).collect();
            ApiSuccess::new(StatusCode::OK, total_data)
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotalResponseData {
    pub category: String,
    pub total: f64,
}

impl From<&CategoryTotal> for CategoryTotalResponseData {
    fn from(total: &CategoryTotal) -> Self {
        Self {
            category: total.category.clone(),
            total: total.total,
        }
    }
}
