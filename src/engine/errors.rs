// ============================================================================
// Quiz Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors surfaced while creating or running a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Configuration failed validation
    Config(String),
    /// Operand generation or answer arithmetic failed
    Numeric(NumericError),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Config(reason) => write!(f, "invalid quiz configuration: {}", reason),
            QuizError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Numeric(err) => Some(err),
            QuizError::Config(_) => None,
        }
    }
}

impl From<NumericError> for QuizError {
    fn from(err: NumericError) -> Self {
        QuizError::Numeric(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QuizError::Config("Integer digits must be between 1 and 18".to_string()).to_string(),
            "invalid quiz configuration: Integer digits must be between 1 and 18"
        );
        assert_eq!(
            QuizError::from(NumericError::DivisionByZero).to_string(),
            "division by zero"
        );
    }
}
