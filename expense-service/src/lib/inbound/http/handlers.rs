pub mod account;
pub mod admin;
pub mod expenses;

use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::models::Expense;
use crate::domain::identity::IdentityError;
use crate::user::errors::UserError;

/// Standardized API success response
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    pub data: T,
    status: StatusCode,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { data, status }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::WeakPassword(_) | UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ExpenseError::InvalidExpenseId(_)
            | ExpenseError::InvalidField(_)
            | ExpenseError::InvalidPeriod(_) => ApiError::UnprocessableEntity(err.to_string()),
            ExpenseError::DatabaseError(msg) | ExpenseError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::MissingToken
            | IdentityError::InvalidToken(_)
            | IdentityError::UnknownSubject(_) => {
                ApiError::Unauthorized("Not authenticated".to_string())
            }
            IdentityError::Forbidden => ApiError::Forbidden("Not enough permissions".to_string()),
            IdentityError::Lookup(e) => ApiError::from(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

/// Plain acknowledgement body, e.g. `{"message": "Logged out"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseResponseData {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub user_id: String,
}

impl From<&Expense> for ExpenseResponseData {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            title: expense.details.title().to_string(),
            amount: expense.details.amount(),
            category: expense.details.category().to_string(),
            date: expense.details.date(),
            user_id: expense.owner.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtError;
    use auth::WeakPasswordError;

    use super::*;

    #[test]
    fn test_identity_failures_collapse_to_unauthenticated() {
        for err in [
            IdentityError::MissingToken,
            IdentityError::InvalidToken(JwtError::TokenExpired),
            IdentityError::UnknownSubject("x".to_string()),
        ] {
            match ApiError::from(err) {
                ApiError::Unauthorized(msg) => assert_eq!(msg, "Not authenticated"),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let response = ApiError::from(IdentityError::Forbidden).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_user_error_statuses() {
        let cases = [
            (
                UserError::WeakPassword(WeakPasswordError::MissingDigit),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::UsernameAlreadyExists("alice".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                UserError::DatabaseError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_expense_not_found_maps_to_404() {
        let response = ApiError::from(ExpenseError::NotFound("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
