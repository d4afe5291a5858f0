use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::expense::errors::ExpenseFieldError;
use crate::domain::expense::errors::ExpenseIdError;
use crate::domain::expense::errors::PeriodError;
use crate::domain::user::models::UserId;

/// Expense entity, always owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub owner: UserId,
    pub details: ExpenseDetails,
    pub created_at: DateTime<Utc>,
}

/// Expense unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an expense ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ExpenseIdError> {
        Uuid::parse_str(s)
            .map(ExpenseId)
            .map_err(|e| ExpenseIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The user-editable part of an expense, validated as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDetails {
    title: String,
    amount: f64,
    category: String,
    date: NaiveDate,
}

impl ExpenseDetails {
    const MAX_TITLE_LENGTH: usize = 200;
    const MAX_CATEGORY_LENGTH: usize = 100;

    /// Validate raw expense fields.
    ///
    /// Title and category are trimmed.
    ///
    /// # Errors
    /// * `EmptyTitle` / `TitleTooLong` - Title outside 1-200 characters
    /// * `EmptyCategory` / `CategoryTooLong` - Category outside 1-100 characters
    /// * `InvalidAmount` - Amount is not a positive finite number
    pub fn new(
        title: impl AsRef<str>,
        amount: f64,
        category: impl AsRef<str>,
        date: NaiveDate,
    ) -> Result<Self, ExpenseFieldError> {
        let title = title.as_ref().trim().to_string();
        let title_length = title.chars().count();
        if title_length == 0 {
            return Err(ExpenseFieldError::EmptyTitle);
        }
        if title_length > Self::MAX_TITLE_LENGTH {
            return Err(ExpenseFieldError::TitleTooLong {
                max: Self::MAX_TITLE_LENGTH,
                actual: title_length,
            });
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseFieldError::InvalidAmount(amount));
        }

        let category = category.as_ref().trim().to_string();
        let category_length = category.chars().count();
        if category_length == 0 {
            return Err(ExpenseFieldError::EmptyCategory);
        }
        if category_length > Self::MAX_CATEGORY_LENGTH {
            return Err(ExpenseFieldError::CategoryTooLong {
                max: Self::MAX_CATEGORY_LENGTH,
                actual: category_length,
            });
        }

        Ok(Self {
            title,
            amount,
            category,
            date,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A calendar month used for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPeriod {
    month: u32,
    year: i32,
}

impl SummaryPeriod {
    /// # Errors
    /// * `InvalidMonth` - Month outside 1-12
    /// * `InvalidYear` - Year outside 1-9999
    pub fn new(month: u32, year: i32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Half-open date range `[first day of month, first day of next month)`.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };

        // Both dates exist for any validated period.
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap_or(NaiveDate::MAX);
        (start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.bounds();
        date >= start && date < end
    }
}

/// Total spent in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub period: SummaryPeriod,
    pub total: f64,
}

/// Total spent in one category during a period.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_details_are_trimmed() {
        let details = ExpenseDetails::new("  Lunch ", 12.5, " Food ", date(2025, 1, 1)).unwrap();
        assert_eq!(details.title(), "Lunch");
        assert_eq!(details.category(), "Food");
        assert_eq!(details.amount(), 12.5);
    }

    #[test]
    fn test_details_reject_blank_title() {
        assert_eq!(
            ExpenseDetails::new("   ", 1.0, "Food", date(2025, 1, 1)),
            Err(ExpenseFieldError::EmptyTitle)
        );
    }

    #[test]
    fn test_details_reject_bad_amounts() {
        for amount in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ExpenseDetails::new("Lunch", amount, "Food", date(2025, 1, 1)),
                Err(ExpenseFieldError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_details_reject_blank_category() {
        assert_eq!(
            ExpenseDetails::new("Lunch", 1.0, "", date(2025, 1, 1)),
            Err(ExpenseFieldError::EmptyCategory)
        );
    }

    #[test]
    fn test_period_rejects_invalid_month() {
        assert_eq!(SummaryPeriod::new(0, 2025), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(SummaryPeriod::new(13, 2025), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(SummaryPeriod::new(1, 0), Err(PeriodError::InvalidYear(0)));
    }

    #[test]
    fn test_period_bounds() {
        let period = SummaryPeriod::new(2, 2024).unwrap();
        assert_eq!(period.bounds(), (date(2024, 2, 1), date(2024, 3, 1)));
        assert!(period.contains(date(2024, 2, 29)));
        assert!(!period.contains(date(2024, 3, 1)));
        assert!(!period.contains(date(2024, 1, 31)));
    }

    #[test]
    fn test_december_bounds_roll_over_year() {
        let period = SummaryPeriod::new(12, 2024).unwrap();
        assert_eq!(period.bounds(), (date(2024, 12, 1), date(2025, 1, 1)));
    }
}
