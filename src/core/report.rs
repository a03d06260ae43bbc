/// Fixed-width text rendering of expense rows
///
/// Column widths and labels are part of the output format and stay fixed.

use crate::db::{Expense, Listing};
use std::io::{self, Write};

/// Width of the separator printed under the rows
pub const SEPARATOR_WIDTH: usize = 50;

/// Width the total is right-justified to
pub const TOTAL_WIDTH: usize = 25;

/// `id | amount | memo | created_on`
pub fn format_row(expense: &Expense) -> String {
    format!(
        "{:>3} | {:>10} | {:>12} | {}",
        expense.id,
        expense.amount,
        expense.memo,
        expense.created_on
    )
}

/// "There are no expenses." / "There are 1 expense." / "There are N expenses."
pub fn count_line(count: usize) -> String {
    match count {
        0 => "There are no expenses.".to_string(),
        n => format!("There are {} expense{}.", n, if n == 1 { "" } else { "s" }),
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// The total is printed exactly as the database rounded it
pub fn total_line(total: &str) -> String {
    format!("Total {:>width$}", total, width = TOTAL_WIDTH)
}

/// Rows, then the separator and the total
pub fn write_expenses<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    for expense in &listing.expenses {
        writeln!(out, "{}", format_row(expense))?;
    }
    writeln!(out, "{}", separator())?;
    writeln!(out, "{}", total_line(&listing.total))
}

/// Count line, then the rows and total when there are any
pub fn write_listing<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    writeln!(out, "{}", count_line(listing.len()))?;
    if !listing.is_empty() {
        write_expenses(out, listing)?;
    }
    Ok(())
}
