/// Database module for the expense tracker
///
/// Handles all access to the `expenses` table using Postgres and sqlx.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
