/// Data models for database entities
///
/// Displayed values come back as the database's own text, so anything the
/// table can hold can also be printed.

use sqlx::FromRow;

/// Total printed when there is nothing to add up
pub const ZERO_TOTAL: &str = "0.00";

/// One row of the `expenses` table, as printed
///
/// NULL columns arrive as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Expense {
    pub id: i32,
    pub amount: String,
    pub memo: String,
    pub created_on: String,
}

/// An expense together with the rounded sum over its whole result set
#[derive(Debug, Clone, FromRow)]
pub struct ExpenseRow {
    #[sqlx(flatten)]
    pub expense: Expense,
    pub total: String,
}

/// Rows returned by one query and the sum of their amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub expenses: Vec<Expense>,
    pub total: String,
}

impl Listing {
    pub fn from_rows(rows: Vec<ExpenseRow>) -> Self {
        let total = rows
            .first()
            .map(|row| row.total.clone())
            .unwrap_or_else(|| ZERO_TOTAL.to_string());
        let expenses = rows.into_iter().map(|row| row.expense).collect();

        Self { expenses, total }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Input for recording a new expense
///
/// Values are kept as typed by the user; the database casts and rejects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub amount: String,
    pub memo: String,
    pub created_on: Option<String>,
}

impl ExpenseInput {
    pub fn new(amount: impl Into<String>, memo: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            memo: memo.into(),
            created_on: None,
        }
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.created_on = Some(date.into());
        self
    }

    /// Date to store: the explicit one, else today's local date
    pub fn date_or_today(&self) -> String {
        self.created_on
            .clone()
            .unwrap_or_else(|| chrono::Local::now().date_naive().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, amount: &str, total: &str) -> ExpenseRow {
        ExpenseRow {
            expense: Expense {
                id,
                amount: amount.to_string(),
                memo: "lunch".to_string(),
                created_on: "2024-03-01".to_string(),
            },
            total: total.to_string(),
        }
    }

    #[test]
    fn test_listing_takes_total_from_rows() {
        let listing = Listing::from_rows(vec![row(1, "10.00", "15.50"), row(2, "5.50", "15.50")]);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.total, "15.50");
        assert_eq!(listing.expenses[1].amount, "5.50");
    }

    #[test]
    fn test_empty_listing_totals_zero() {
        let listing = Listing::from_rows(Vec::new());
        assert!(listing.is_empty());
        assert_eq!(listing.total, ZERO_TOTAL);
    }

    #[test]
    fn test_explicit_date_is_kept_verbatim() {
        let input = ExpenseInput::new("3.25", "bus").on("2023-12-31");
        assert_eq!(input.date_or_today(), "2023-12-31");
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let input = ExpenseInput::new("3.25", "bus");
        let today = chrono::Local::now().date_naive().to_string();
        assert_eq!(input.date_or_today(), today);
    }
}
