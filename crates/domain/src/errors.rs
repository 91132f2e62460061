//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("{0}")]
    ValidationError(String),

    /// Date/time parsing error
    #[error("parse date: {0}")]
    InvalidDateTime(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_creates_correct_error() {
        let err = DomainError::validation("title can't be empty");
        match err {
            DomainError::ValidationError(msg) => assert_eq!(msg, "title can't be empty"),
            DomainError::InvalidDateTime(_) => unreachable!("Expected ValidationError"),
        }
    }

    #[test]
    fn error_display() {
        let err = DomainError::validation("location is required");
        assert_eq!(err.to_string(), "location is required");

        let err = DomainError::InvalidDateTime("premature end of input".to_string());
        assert!(err.to_string().starts_with("parse date:"));
    }
}
