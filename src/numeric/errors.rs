// ============================================================================
// Numeric Errors
// Error types for digit-level number construction and arithmetic
// ============================================================================

use std::fmt;

/// Which digit sequence of a [`DigitNumber`](super::DigitNumber) is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitPart {
    /// Integer digits, position 0 is the ones place
    Integer,
    /// Fractional digits, position 0 is the tenths place
    Fractional,
}

impl fmt::Display for DigitPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitPart::Integer => write!(f, "integer"),
            DigitPart::Fractional => write!(f, "fractional"),
        }
    }
}

/// Errors that can occur while building or combining digit numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Literal could not be decomposed into digits, or no shape was given
    InvalidInput,
    /// Digit position outside the fixed length of the addressed part
    IndexOutOfRange {
        part: DigitPart,
        position: usize,
        length: usize,
    },
    /// Digit value outside 0..=9
    InvalidDigit(u8),
    /// Attempted division by a zero-valued number
    DivisionByZero,
    /// Integer-only operator applied to a value with fractional digits
    InvalidOperand,
    /// Value does not fit the requested integer type
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: expected a numeric literal or digit lengths")
            },
            NumericError::IndexOutOfRange {
                part,
                position,
                length,
            } => write!(
                f,
                "index out of range: {} digit {} (length {})",
                part, position, length
            ),
            NumericError::InvalidDigit(digit) => {
                write!(f, "invalid digit: {} is not in 0..=9", digit)
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidOperand => write!(
                f,
                "invalid operand: non-integer values cannot be used with this operator"
            ),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::IndexOutOfRange {
                part: DigitPart::Fractional,
                position: 3,
                length: 2,
            }
            .to_string(),
            "index out of range: fractional digit 3 (length 2)"
        );
        assert_eq!(
            NumericError::InvalidDigit(12).to_string(),
            "invalid digit: 12 is not in 0..=9"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidOperand, NumericError::InvalidOperand);
        assert_ne!(NumericError::InvalidOperand, NumericError::InvalidInput);
    }
}
