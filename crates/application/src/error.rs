//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Cache backend error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Operation not permitted on this instance
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error was caused by the caller's input
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApplicationError::Domain(_) | ApplicationError::NotAuthorized(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::validation("title can't be empty").into();
        assert_eq!(err.to_string(), "title can't be empty");
        assert!(err.is_client_error());
    }

    #[test]
    fn cache_error_is_not_client_error() {
        let err = ApplicationError::Cache("connection refused".to_string());
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("connection refused"));
    }
}
