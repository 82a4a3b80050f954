use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid filter {field}={value:?}: {reason}")]
    InvalidFilter {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Query timed out after {0} ms")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_filter(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidFilter {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the engine or storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFilter { .. } | DomainError::InvalidInput(_)
        )
    }
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Database(s)
    }
}
