//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid provider key: {0:?}")]
    InvalidProviderKey(String),

    #[error("Round count must be at least 1")]
    InvalidRounds,

    #[error("Per-call timeout must be greater than zero")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::InvalidRounds.to_string(),
            "Round count must be at least 1"
        );
        assert_eq!(
            DomainError::InvalidProviderKey(" ".to_string()).to_string(),
            "Invalid provider key: \" \""
        );
    }
}
