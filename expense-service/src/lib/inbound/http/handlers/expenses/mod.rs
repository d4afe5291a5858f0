pub mod category_summary;
pub mod create_expense;
pub mod delete_expense;
pub mod list_expenses;
pub mod monthly_summary;
pub mod update_expense;

pub use category_summary::category_summary;
pub use create_expense::create_expense;
pub use delete_expense::delete_expense;
pub use list_expenses::list_expenses;
pub use monthly_summary::monthly_summary;
pub use update_expense::update_expense;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::expense::errors::ExpenseError;
use crate::domain::expense::models::ExpenseDetails;
use crate::domain::expense::models::SummaryPeriod;

/// HTTP request body for creating or replacing an expense (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseRequest {
    title: String,
    amount: f64,
    category: String,
    date: NaiveDate,
}

impl ExpenseRequest {
    fn try_into_details(self) -> Result<ExpenseDetails, ExpenseError> {
        Ok(ExpenseDetails::new(
            self.title,
            self.amount,
            self.category,
            self.date,
        )?)
    }
}

/// `?month=&year=` query shared by both summary routes
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PeriodQuery {
    month: u32,
    year: i32,
}

impl PeriodQuery {
    fn try_into_period(self) -> Result<SummaryPeriod, ExpenseError> {
        Ok(SummaryPeriod::new(self.month, self.year)?)
    }
}
