// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod problem;
pub mod round;

pub use config::QuizConfig;
pub use problem::{Difficulty, NumberShape, Operation};
pub use round::{RoundId, RoundRecord, SessionSummary};

// Re-export state machine
pub use round::state::{SessionState, SessionTransition};
