/// Connection settings
///
/// Resolved from the environment once at startup. Without `DATABASE_URL` the
/// connection falls back to libpq defaults (`PGHOST`, `PGUSER`, ...) and the
/// `expenses` database.

use crate::error::{ExpenseError, Result};
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

/// Database used when nothing else is configured
pub const DEFAULT_DATABASE: &str = "expenses";

const DATABASE_URL_VAR: &str = "DATABASE_URL";
const DATABASE_NAME_VAR: &str = "EXPENSES_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build a configuration from an arbitrary set of key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Config::default();

        for (key, value) in vars {
            match key.as_ref() {
                DATABASE_URL_VAR => {
                    let value = value.into();
                    if value.trim().is_empty() {
                        return Err(ExpenseError::Config(format!("{} is empty", DATABASE_URL_VAR)));
                    }
                    config.database_url = Some(value);
                }
                DATABASE_NAME_VAR => {
                    let value = value.into();
                    if !value.trim().is_empty() {
                        config.database_name = value;
                    }
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Turn the configuration into sqlx connect options
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match &self.database_url {
            Some(url) => Ok(PgConnectOptions::from_str(url)?),
            None => Ok(PgConnectOptions::new().database(&self.database_name)),
        }
    }
}
