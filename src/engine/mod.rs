// ============================================================================
// Engine Module
// Contains operand generation and quiz session logic
// ============================================================================

mod addition;
mod division;
mod errors;
mod multiplication;
mod number_source;
mod quiz_session;
mod subtraction;

pub mod factory;

pub use addition::AdditionGenerator;
pub use division::DivisionGenerator;
pub use errors::QuizError;
pub use factory::{create_from_config, create_generator, new_quiz, QuizSessionBuilder};
pub use multiplication::MultiplicationGenerator;
pub use number_source::{generate_number, TierLimits};
pub use quiz_session::{answers_match, QuizSession, ANSWER_DECIMAL_PLACES};
pub use subtraction::SubtractionGenerator;
