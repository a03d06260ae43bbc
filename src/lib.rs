/// expense-tracker library
///
/// Records personal expenses in a Postgres table and prints them as
/// fixed-width text.

pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use db::Database;
pub use error::{ExpenseError, Result};
