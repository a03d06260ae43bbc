/// SQL statements for the expenses table
///
/// User input is bound as text and cast inside the statement, so the
/// database decides whether an amount, date or id is valid.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;

// Columns come back as Postgres renders them, NULL as ''. The total is the
// rounded sum over the filtered rows, repeated on every row.
const SELECT_COLUMNS: &str = "SELECT id, \
    COALESCE(amount::text, '') AS amount, \
    COALESCE(memo, '') AS memo, \
    COALESCE(created_on::text, '') AS created_on, \
    ROUND(COALESCE(SUM(amount) OVER (), 0), 2)::text AS total \
    FROM expenses";

const ORDER_BY_DATE: &str = "ORDER BY expenses.created_on ASC, expenses.id ASC";

impl Database {
    /// All expenses, oldest first
    pub async fn list_expenses(&self) -> Result<Listing> {
        let rows = sqlx::query_as::<_, ExpenseRow>(&format!(
            "{} {}",
            SELECT_COLUMNS, ORDER_BY_DATE
        ))
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(rows = rows.len(), "listed expenses");
        Ok(Listing::from_rows(rows))
    }

    /// Insert a new expense
    ///
    /// # Returns
    /// * `Ok(())` - Row inserted
    /// * `Err(ExpenseError)` - If the database rejects the amount or date
    pub async fn add_expense(&self, input: &ExpenseInput) -> Result<()> {
        let created_on = input.date_or_today();

        sqlx::query(
            "INSERT INTO expenses (amount, memo, created_on) VALUES ($1::numeric, $2, $3::date)",
        )
        .bind(&input.amount)
        .bind(&input.memo)
        .bind(&created_on)
        .execute(self.pool())
        .await?;

        tracing::debug!(amount = %input.amount, %created_on, "added expense");
        Ok(())
    }

    /// Expenses whose memo contains `query`, ignoring case
    pub async fn search_expenses(&self, query: &str) -> Result<Listing> {
        let pattern = format!("%{}%", query);

        let rows = sqlx::query_as::<_, ExpenseRow>(&format!(
            "{} WHERE memo ILIKE $1 {}",
            SELECT_COLUMNS, ORDER_BY_DATE
        ))
        .bind(&pattern)
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(query, rows = rows.len(), "searched expenses");
        Ok(Listing::from_rows(rows))
    }

    /// Look up one expense by id
    ///
    /// A `None` id binds NULL and matches nothing.
    pub async fn find_expense(&self, id: Option<&str>) -> Result<Option<ExpenseRow>> {
        let expense = sqlx::query_as::<_, ExpenseRow>(&format!(
            "{} WHERE id = $1::integer",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(expense)
    }

    /// Delete a single expense
    pub async fn delete_expense(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        tracing::debug!(id, "deleted expense");
        Ok(())
    }

    /// Delete every expense, returning how many rows were removed
    pub async fn delete_all_expenses(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM expenses")
            .execute(self.pool())
            .await?;

        tracing::debug!(rows = result.rows_affected(), "deleted all expenses");
        Ok(result.rows_affected())
    }
}
