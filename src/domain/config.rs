// ============================================================================
// Quiz Configuration
// Operand shape, difficulty and operation of a quiz session
// ============================================================================

use super::problem::{Difficulty, NumberShape, Operation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete configuration for creating a quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuizConfig {
    /// Digit counts of the reference operand
    pub shape: NumberShape,

    /// Difficulty tier applied to the related operand
    pub difficulty: Difficulty,

    /// Operation every round asks for
    pub operation: Operation,

    /// Optional: RNG seed for reproducible rounds
    /// None means the session seeds from OS entropy
    pub seed: Option<u64>,
}

impl QuizConfig {
    /// Create a new configuration with required parameters
    pub fn new(
        integer_digits: usize,
        fractional_digits: usize,
        difficulty: Difficulty,
        operation: Operation,
    ) -> Self {
        Self {
            shape: NumberShape::new(integer_digits, fractional_digits),
            difficulty,
            operation,
            seed: None,
        }
    }

    /// Builder method: Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: Replace the operand shape
    pub fn with_shape(mut self, shape: NumberShape) -> Self {
        self.shape = shape;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.shape.validate()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl QuizConfig {
    /// Console EASY preset: three integer digits, two fractional digits
    pub fn console_easy(operation: Operation) -> Self {
        Self::new(3, 2, Difficulty::Easy, operation)
    }

    /// Console MEDIUM preset: four integer digits, two fractional digits
    pub fn console_medium(operation: Operation) -> Self {
        Self::new(4, 2, Difficulty::Medium, operation)
    }

    /// Console HARD preset: four integer digits, two fractional digits
    pub fn console_hard(operation: Operation) -> Self {
        Self::new(4, 2, Difficulty::Hard, operation)
    }

    /// Preset for a difficulty tier
    pub fn console_preset(difficulty: Difficulty, operation: Operation) -> Self {
        match difficulty {
            Difficulty::Easy => Self::console_easy(operation),
            Difficulty::Medium => Self::console_medium(operation),
            Difficulty::Hard => Self::console_hard(operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = QuizConfig::new(3, 2, Difficulty::Easy, Operation::Add);

        assert_eq!(config.shape.integer_digits, 3);
        assert_eq!(config.shape.fractional_digits, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = QuizConfig::console_medium(Operation::Mul)
            .with_seed(42)
            .with_shape(NumberShape::new(2, 1));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.shape, NumberShape::new(2, 1));
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_validation() {
        let config = QuizConfig::new(0, 2, Difficulty::Hard, Operation::Sub);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let easy = QuizConfig::console_preset(Difficulty::Easy, Operation::Add);
        assert_eq!(easy.shape, NumberShape::new(3, 2));

        let hard = QuizConfig::console_preset(Difficulty::Hard, Operation::Div);
        assert_eq!(hard.shape, NumberShape::new(4, 2));
        assert_eq!(hard.operation, Operation::Div);
    }
}
