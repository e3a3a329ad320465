// ============================================================================
// Problem Domain Model
// Difficulty tiers, operations and operand shapes
// ============================================================================

use crate::numeric::{DigitNumber, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Difficulty
// ============================================================================

/// Difficulty tier controlling how the related operand is constrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Shorter related operand, at most one carry or borrow position
    Easy,
    /// Operands of equal length, moderate carry budget
    Medium,
    /// Related operand may be longer than the reference, large carry budget
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a numeric menu choice: 1 is EASY, 2 is MEDIUM, anything else HARD.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

// ============================================================================
// Operation
// ============================================================================

/// Arithmetic operation of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    /// Human readable name of the result ("sum", "difference", ...)
    pub fn result_name(&self) -> &'static str {
        match self {
            Operation::Add => "sum",
            Operation::Sub => "difference",
            Operation::Mul => "product",
            Operation::Div => "quotient",
        }
    }

    /// Compute `lhs <op> rhs`.
    ///
    /// # Errors
    /// Propagates the operand's arithmetic error, e.g. `DivisionByZero`.
    pub fn apply(&self, lhs: &DigitNumber, rhs: &DigitNumber) -> NumericResult<DigitNumber> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Sub => lhs.checked_sub(rhs),
            Operation::Mul => lhs.checked_mul(rhs),
            Operation::Div => lhs.checked_div(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Sub),
            "*" => Ok(Operation::Mul),
            "/" => Ok(Operation::Div),
            other => Err(format!("Unknown operation: {}", other)),
        }
    }
}

// ============================================================================
// Number Shape
// ============================================================================

/// Digit counts of the reference operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberShape {
    /// Number of integer digits (1..=18)
    pub integer_digits: usize,
    /// Number of fractional digits (0..=15)
    pub fractional_digits: usize,
}

impl NumberShape {
    /// Widest integer part that still fits a u64 draw
    pub const MAX_INTEGER_DIGITS: usize = 18;

    /// Widest fractional part that survives an f64 round trip
    pub const MAX_FRACTIONAL_DIGITS: usize = 15;

    pub fn new(integer_digits: usize, fractional_digits: usize) -> Self {
        Self {
            integer_digits,
            fractional_digits,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.integer_digits == 0 || self.integer_digits > Self::MAX_INTEGER_DIGITS {
            return Err(format!(
                "Integer digits must be between 1 and {}",
                Self::MAX_INTEGER_DIGITS
            ));
        }
        if self.fractional_digits > Self::MAX_FRACTIONAL_DIGITS {
            return Err(format!(
                "Fractional digits cannot exceed {}",
                Self::MAX_FRACTIONAL_DIGITS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbols() {
        for op in Operation::ALL {
            let parsed: Operation = op.to_string().parse().unwrap();
            assert_eq!(parsed, op);
        }
        assert!("%".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_apply() {
        let a = DigitNumber::try_from(7.5).unwrap();
        let b = DigitNumber::from(2);
        assert_eq!(Operation::Add.apply(&a, &b).unwrap().value(), 9.5);
        assert_eq!(Operation::Sub.apply(&a, &b).unwrap().value(), 5.5);
        assert_eq!(Operation::Mul.apply(&a, &b).unwrap().value(), 15.0);
        assert_eq!(Operation::Div.apply(&a, &b).unwrap().value(), 3.75);
    }

    #[test]
    fn test_difficulty_levels() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(9), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
    }

    #[test]
    fn test_shape_validation() {
        assert!(NumberShape::new(3, 2).validate().is_ok());
        assert!(NumberShape::new(1, 0).validate().is_ok());
        assert!(NumberShape::new(0, 2).validate().is_err());
        assert!(NumberShape::new(19, 2).validate().is_err());
        assert!(NumberShape::new(3, 16).validate().is_err());
    }
}
