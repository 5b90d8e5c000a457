//! Flashcard domain errors
//!
//! Every error here is terminal for the request that raised it. Validation
//! always runs before mutation, so an error never leaves the store partially
//! updated.

use thiserror::Error;

/// Result type for flashcard operations
pub type FlashcardResult<T> = Result<T, FlashcardError>;

/// Flashcard domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    /// Bad, missing or duplicate field
    #[error("{0}")]
    Validation(String),

    /// Unknown flashcard id
    #[error("Flashcard not found.")]
    NotFound(u64),
}

impl FlashcardError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FlashcardError::validation("Question cannot be empty");
        assert_eq!(err.to_string(), "Question cannot be empty");

        let err = FlashcardError::NotFound(7);
        assert_eq!(err.to_string(), "Flashcard not found.");
    }
}
