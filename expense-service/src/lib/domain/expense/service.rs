use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::models::CategoryTotal;
use crate::domain::expense::models::Expense;
use crate::domain::expense::models::ExpenseDetails;
use crate::domain::expense::models::ExpenseId;
use crate::domain::expense::models::MonthlySummary;
use crate::domain::expense::models::SummaryPeriod;
use crate::domain::expense::ports::ExpenseRepository;
use crate::domain::expense::ports::ExpenseServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for expense operations.
pub struct ExpenseService<ER>
where
    ER: ExpenseRepository,
{
    repository: Arc<ER>,
}

impl<ER> ExpenseService<ER>
where
    ER: ExpenseRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> ExpenseServicePort for ExpenseService<ER>
where
    ER: ExpenseRepository,
{
    async fn create_expense(
        &self,
        owner: &UserId,
        details: ExpenseDetails,
    ) -> Result<Expense, ExpenseError> {
        let expense = Expense {
            id: ExpenseId::new(),
            owner: *owner,
            details,
            created_at: Utc::now(),
        };

        let created = self.repository.create(expense).await?;
        tracing::debug!(expense_id = %created.id, user_id = %owner, "Expense created");

        Ok(created)
    }

    async fn list_expenses(&self, owner: &UserId) -> Result<Vec<Expense>, ExpenseError> {
        self.repository.list_by_owner(owner).await
    }

    async fn update_expense(
        &self,
        owner: &UserId,
        id: &ExpenseId,
        details: ExpenseDetails,
    ) -> Result<Expense, ExpenseError> {
        let mut expense = self
            .repository
            .find_owned(owner, id)
            .await?
            .ok_or(ExpenseError::NotFound(id.to_string()))?;

        expense.details = details;

        self.repository.update(expense).await
    }

    async fn delete_expense(&self, owner: &UserId, id: &ExpenseId) -> Result<(), ExpenseError> {
        self.repository.delete(owner, id).await?;
        tracing::debug!(expense_id = %id, user_id = %owner, "Expense deleted");
        Ok(())
    }

    async fn monthly_summary(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<MonthlySummary, ExpenseError> {
        let total = self.repository.total_for_period(owner, period).await?;
        Ok(MonthlySummary { period, total })
    }

    async fn category_summary(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<Vec<CategoryTotal>, ExpenseError> {
        self.repository.totals_by_category(owner, period).await
    }

    async fn list_all_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        self.repository.list_all().await
    }
}
