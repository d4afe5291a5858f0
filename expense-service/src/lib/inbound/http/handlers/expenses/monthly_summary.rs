use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::PeriodQuery;
use crate::domain::expense::models::MonthlySummary;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn monthly_summary(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<ApiSuccess<MonthlySummaryResponseData>, ApiError> {
    let Query(query) = query?;
    let period = query.try_into_period()?;

    state
        .expense_service
        .monthly_summary(&user.id, period)
        .await
        .map_err(ApiError::from)
        .map(|ref summary| ApiSuccess::new(StatusCode::OK, summary.into()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummaryResponseData {
    pub month: u32,
    pub year: i32,
    pub total: f64,
}

impl From<&MonthlySummary> for MonthlySummaryResponseData {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            month: summary.period.month(),
            year: summary.period.year(),
            total: summary.total,
        }
    }
}
