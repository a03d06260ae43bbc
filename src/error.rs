/// Error types for the expense tracker
///
/// Uses thiserror for ergonomic error handling. A missing expense on delete
/// is reported as regular output and never shows up here.

use thiserror::Error;

/// Main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Database errors: unreachable server, rejected statement, bad value
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors while writing output or reading the confirmation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required command arguments are missing
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for expense tracker operations
pub type Result<T> = std::result::Result<T, ExpenseError>;

impl ExpenseError {
    /// Convert the error into a message suitable for the terminal
    pub fn user_message(&self) -> String {
        match self {
            ExpenseError::Database(e) => {
                format!("Database error occurred. Details: {}", e)
            }
            ExpenseError::Io(e) => {
                format!("Terminal I/O failed. Details: {}", e)
            }
            ExpenseError::Usage(msg) => msg.clone(),
            ExpenseError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }

    /// Whether this is a usage error the user can fix by retyping the command
    pub fn is_usage(&self) -> bool {
        matches!(self, ExpenseError::Usage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_is_verbatim() {
        let err = ExpenseError::Usage("You must provide an amount and memo.".to_string());
        assert_eq!(err.user_message(), "You must provide an amount and memo.");
        assert_eq!(err.to_string(), "You must provide an amount and memo.");
        assert!(err.is_usage());
    }

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("DATABASE_URL is empty".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
        assert!(!err.is_usage());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ExpenseError = io.into();
        assert!(err.user_message().contains("pipe closed"));
    }
}
