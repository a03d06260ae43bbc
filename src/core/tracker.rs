// Expense operations: each runs its statement(s) and prints the result.
//
// Output goes to whatever writer the caller hands in, so the dispatcher
// decides between stdout and a test buffer.

use crate::core::report;
use crate::db::{Database, ExpenseInput, Listing};
use crate::error::Result;
use std::io::Write;

pub struct Tracker {
    db: Database,
}

impl Tracker {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Print every expense, oldest first, with count and total
    pub async fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let listing = self.db.list_expenses().await?;
        report::write_listing(out, &listing)?;
        Ok(())
    }

    /// Record a new expense. Prints nothing on success.
    pub async fn add(&self, input: &ExpenseInput) -> Result<()> {
        self.db.add_expense(input).await
    }

    /// Print expenses whose memo contains `query` (case-insensitive)
    pub async fn search<W: Write>(&self, query: &str, out: &mut W) -> Result<()> {
        let listing = self.db.search_expenses(query).await?;
        report::write_listing(out, &listing)?;
        Ok(())
    }

    /// Delete one expense by id, or say there is none.
    ///
    /// A missing id is not an error; the table is left untouched.
    pub async fn delete_one<W: Write>(&self, id: Option<&str>, out: &mut W) -> Result<()> {
        match self.db.find_expense(id).await? {
            None => {
                writeln!(out, "There is no expense with the id: {}", id.unwrap_or(""))?;
            }
            Some(row) => {
                self.db.delete_expense(row.expense.id).await?;
                writeln!(out, "The following expense has been deleted:")?;
                report::write_expenses(out, &Listing::from_rows(vec![row]))?;
            }
        }
        Ok(())
    }

    /// Remove every expense unconditionally
    pub async fn delete_all<W: Write>(&self, out: &mut W) -> Result<()> {
        self.db.delete_all_expenses().await?;
        writeln!(out, "All expenses have been deleted.")?;
        Ok(())
    }
}
