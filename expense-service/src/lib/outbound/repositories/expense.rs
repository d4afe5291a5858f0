use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::models::CategoryTotal;
use crate::domain::expense::models::Expense;
use crate::domain::expense::models::ExpenseDetails;
use crate::domain::expense::models::ExpenseId;
use crate::domain::expense::models::SummaryPeriod;
use crate::domain::expense::ports::ExpenseRepository;
use crate::domain::user::models::UserId;

/// PostgreSQL implementation of ExpenseRepository.
///
/// Every owner-scoped statement filters on `user_id`, so rows of other
/// users are indistinguishable from missing ones.
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `expenses` table
#[derive(FromRow)]
struct ExpenseRecord {
    id: Uuid,
    user_id: Uuid,
    title: String,
    amount: f64,
    category: String,
    spent_on: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ExpenseError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Ok(Expense {
            id: ExpenseId(record.id),
            owner: UserId(record.user_id),
            details: ExpenseDetails::new(
                record.title,
                record.amount,
                record.category,
                record.spent_on,
            )?,
            created_at: record.created_at,
        })
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, expense: Expense) -> Result<Expense, ExpenseError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, user_id, title, amount, category, spent_on, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(expense.id.0)
        .bind(expense.owner.0)
        .bind(expense.details.title())
        .bind(expense.details.amount())
        .bind(expense.details.category())
        .bind(expense.details.date())
        .bind(expense.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        Ok(expense)
    }

    async fn find_owned(
        &self,
        owner: &UserId,
        id: &ExpenseId,
    ) -> Result<Option<Expense>, ExpenseError> {
        let record = sqlx::query_as::<_, ExpenseRecord>(
            r#"
            SELECT id, user_id, title, amount, category, spent_on, created_at
            FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        record.map(Expense::try_from).transpose()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Expense>, ExpenseError> {
        let records = sqlx::query_as::<_, ExpenseRecord>(
            r#"
            SELECT id, user_id, title, amount, category, spent_on, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY spent_on DESC, created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        records.into_iter().map(Expense::try_from).collect()
    }

    async fn list_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let records = sqlx::query_as::<_, ExpenseRecord>(
            r#"
            SELECT id, user_id, title, amount, category, spent_on, created_at
            FROM expenses
            ORDER BY spent_on DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        records.into_iter().map(Expense::try_from).collect()
    }

    async fn update(&self, expense: Expense) -> Result<Expense, ExpenseError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET title = $3, amount = $4, category = $5, spent_on = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(expense.id.0)
        .bind(expense.owner.0)
        .bind(expense.details.title())
        .bind(expense.details.amount())
        .bind(expense.details.category())
        .bind(expense.details.date())
        .execute(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ExpenseError::NotFound(expense.id.to_string()));
        }

        Ok(expense)
    }

    async fn delete(&self, owner: &UserId, id: &ExpenseId) -> Result<(), ExpenseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ExpenseError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn total_for_period(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<f64, ExpenseError> {
        let (start, end) = period.bounds();

        sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION AS total
            FROM expenses
            WHERE user_id = $1 AND spent_on >= $2 AND spent_on < $3
            "#,
        )
        .bind(owner.0)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))
    }

    async fn totals_by_category(
        &self,
        owner: &UserId,
        period: SummaryPeriod,
    ) -> Result<Vec<CategoryTotal>, ExpenseError> {
        let (start, end) = period.bounds();

        let totals = sqlx::query_as::<_, (String, f64)>(
            r#"
            SELECT category, SUM(amount)::DOUBLE PRECISION AS total
            FROM expenses
            WHERE user_id = $1 AND spent_on >= $2 AND spent_on < $3
            GROUP BY category
            ORDER BY category
            "#,
        )
        .bind(owner.0)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExpenseError::DatabaseError(e.to_string()))?;

        Ok(totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect())
    }
}
