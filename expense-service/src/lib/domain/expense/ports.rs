use async_trait::async_trait;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::models::CategoryTotal;
use crate::domain::expense::models::Expense;
use crate::domain::expense::models::ExpenseDetails;
use crate::domain::expense::models::ExpenseId;
use crate::domain::expense::models::MonthlySummary;
use crate::domain::expense::models::SummaryPeriod;
use crate::domain::user::models::UserId;

/// Port for expense domain service operations.
///
/// Every operation except `list_all_expenses` is scoped to `owner`; an
/// expense belonging to someone else behaves exactly like a missing one.
#[async_trait]
pub trait ExpenseServicePort: Send + Sync + 'static {
    /// Record a new expense for `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_expense(
        &self,
        owner: &UserId,
        details: ExpenseDetails,
    ) -> Result<Expense, ExpenseError>;

    /// List the owner's expenses, most recent date first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_expenses(&self, owner: &UserId) -> Result<Vec<Expense>, ExpenseError>;

    /// Replace the details of one of the owner's expenses.
    ///
    /// # Errors
    /// * `NotFound` - No such expense for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update_expense(
        &self,
        owner: &UserId,
        id: &ExpenseId,
        details: ExpenseDetails,
    ) -> Result<Expense, ExpenseError>;

    /// Delete one of the owner's expenses.
    ///
    /// # Errors
    /// * `NotFound` - No such expense for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_expense(&self, owner: &UserId, id: &ExpenseId) -> Result<(), ExpenseError>;

    /// Sum of the owner's expenses dated within `period`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn monthly_summary(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<MonthlySummary, ExpenseError>;

    /// Per-category sums of the owner's expenses dated within `period`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn category_summary(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<Vec<CategoryTotal>, ExpenseError>;

    /// Every expense of every user. Callers must have checked privileges.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all_expenses(&self) -> Result<Vec<Expense>, ExpenseError>;
}

/// Persistence operations for expenses.
#[async_trait]
pub trait ExpenseRepository: Send + Sync + 'static {
    /// Persist a new expense.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, expense: Expense) -> Result<Expense, ExpenseError>;

    /// Retrieve an expense only if it belongs to `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_owned(
        &self,
        owner: &UserId,
        id: &ExpenseId,
    ) -> Result<Option<Expense>, ExpenseError>;

    /// Retrieve all expenses of `owner`, most recent date first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Expense>, ExpenseError>;

    /// Retrieve all expenses, most recent date first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Expense>, ExpenseError>;

    /// Overwrite the details of an existing expense, matching on id and owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matched
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, expense: Expense) -> Result<Expense, ExpenseError>;

    /// Remove an expense, matching on id and owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matched
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: &UserId, id: &ExpenseId) -> Result<(), ExpenseError>;

    /// Sum of amounts for `owner` within `period` (0 when empty).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn total_for_period(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<f64, ExpenseError>;

    /// Per-category sums for `owner` within `period`, ordered by category.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn totals_by_category(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<Vec<CategoryTotal>, ExpenseError>;
}
