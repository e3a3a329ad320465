// ============================================================================
// Quiz Factory
// Creates generators and quiz sessions with proper configuration
// ============================================================================

use super::errors::QuizError;
use super::quiz_session::QuizSession;
use super::{AdditionGenerator, DivisionGenerator, MultiplicationGenerator, SubtractionGenerator};
use crate::domain::{Difficulty, NumberShape, Operation, QuizConfig};
use crate::interfaces::{EventHandler, NoOpEventHandler, RelatedNumberGenerator};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the related-number generator for an operation
pub fn create_generator(operation: Operation) -> Box<dyn RelatedNumberGenerator> {
    match operation {
        Operation::Add => Box::new(AdditionGenerator::new()),
        Operation::Sub => Box::new(SubtractionGenerator::new()),
        Operation::Mul => Box::new(MultiplicationGenerator::new()),
        Operation::Div => Box::new(DivisionGenerator::new()),
    }
}

/// Creates a quiz session from configuration
///
/// # Example
/// ```
/// use mindcalc::prelude::*;
/// use std::sync::Arc;
///
/// let config = QuizConfig::console_easy(Operation::Add);
/// let quiz = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(quiz.history().is_empty());
/// ```
pub fn create_from_config(
    config: QuizConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<QuizSession, QuizError> {
    QuizSession::with_event_handler(config, event_handler)
}

/// Creates a quiz session from its four core parameters
///
/// # Example
/// ```
/// use mindcalc::prelude::*;
///
/// let mut quiz = new_quiz(3, 2, Difficulty::Easy, Operation::Add).unwrap();
/// let (a, b) = quiz.get_numbers().unwrap();
/// assert!(a >= 100.0 && a < 1000.0);
/// assert!(b < 100.0);
/// ```
pub fn new_quiz(
    integer_digits: usize,
    fractional_digits: usize,
    difficulty: Difficulty,
    operation: Operation,
) -> Result<QuizSession, QuizError> {
    QuizSession::new(QuizConfig::new(
        integer_digits,
        fractional_digits,
        difficulty,
        operation,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating quiz sessions with fluent API
///
/// # Example
/// ```
/// use mindcalc::prelude::*;
///
/// let quiz = QuizSessionBuilder::new(Operation::Sub)
///     .hard()
///     .integer_digits(4)
///     .fractional_digits(1)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(quiz.config().difficulty, Difficulty::Hard);
/// ```
pub struct QuizSessionBuilder {
    config: QuizConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl QuizSessionBuilder {
    /// Create a new builder using the EASY console preset
    pub fn new(operation: Operation) -> Self {
        Self {
            config: QuizConfig::console_easy(operation),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Difficulty Configuration
    // ========================================================================

    pub fn easy(mut self) -> Self {
        self.config.difficulty = Difficulty::Easy;
        self
    }

    pub fn medium(mut self) -> Self {
        self.config.difficulty = Difficulty::Medium;
        self
    }

    pub fn hard(mut self) -> Self {
        self.config.difficulty = Difficulty::Hard;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config.difficulty = difficulty;
        self
    }

    // ========================================================================
    // Operand Configuration
    // ========================================================================

    pub fn integer_digits(mut self, digits: usize) -> Self {
        self.config.shape.integer_digits = digits;
        self
    }

    pub fn fractional_digits(mut self, digits: usize) -> Self {
        self.config.shape.fractional_digits = digits;
        self
    }

    pub fn shape(mut self, shape: NumberShape) -> Self {
        self.config.shape = shape;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the session, validating the configuration
    pub fn build(self) -> Result<QuizSession, QuizError> {
        create_from_config(self.config, self.event_handler)
    }
}
