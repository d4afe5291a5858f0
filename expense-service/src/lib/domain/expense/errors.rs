use thiserror::Error;

/// Error for ExpenseId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpenseIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for expense field validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpenseFieldError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TitleTooLong { max: usize, actual: usize },

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Category too long: maximum {max} characters, got {actual}")]
    CategoryTooLong { max: usize, actual: usize },

    #[error("Amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),
}

/// Error for summary period validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Year out of range: {0}")]
    InvalidYear(i32),
}

/// Top-level error for all expense-related operations
#[derive(Debug, Clone, Error)]
pub enum ExpenseError {
    #[error("Invalid expense ID: {0}")]
    InvalidExpenseId(#[from] ExpenseIdError),

    #[error("Invalid expense: {0}")]
    InvalidField(#[from] ExpenseFieldError),

    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodError),

    #[error("Expense not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
