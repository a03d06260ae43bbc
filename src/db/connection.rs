/// Database connection management
///
/// Holds a single Postgres connection behind a sqlx pool. The `expenses`
/// table must already exist; see `database/schema.sql`.

use crate::config::Config;
use crate::error::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;

/// One statement in flight at a time
const MAX_CONNECTIONS: u32 = 1;

/// Database wrapper around the connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect using the resolved configuration
    ///
    /// # Returns
    /// * `Ok(Database)` - Connected database handle
    /// * `Err(ExpenseError)` - If the server is unreachable or the options are invalid
    ///
    /// # Examples
    /// ```no_run
    /// use expense_tracker_lib::{config::Config, Database};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new(&Config::from_env()?).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(config.connect_options()?).await
    }

    /// Connect with explicit sqlx options
    pub async fn connect(options: PgConnectOptions) -> Result<Self> {
        let options = options.disable_statement_logging();

        // Connect eagerly so an unreachable server fails at startup
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        tracing::debug!("connected to database");

        Ok(Self { pool })
    }

    /// Get reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
