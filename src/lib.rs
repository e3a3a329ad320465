// ============================================================================
// MindCalc Library
// Arithmetic practice quizzes with digit-level difficulty control
// ============================================================================

//! # MindCalc
//!
//! Generates arithmetic practice problems at three difficulty tiers and
//! scores the answers, including how long each one took.
//!
//! ## Features
//!
//! - **Digit-level numbers** with fixed-length integer and fractional digits
//! - **Per-operation operand generators** that bound carries and borrows
//! - **Quiz sessions** with append-only round history and summaries
//! - **Event hooks** for logging or displaying round outcomes
//!
//! ## Example
//!
//! ```rust
//! use mindcalc::prelude::*;
//! use chrono::Utc;
//!
//! let mut quiz = new_quiz(3, 2, Difficulty::Easy, Operation::Add).unwrap();
//!
//! let (a, b) = quiz.get_numbers().unwrap();
//! println!("What is the sum of {} and {}?", a, b);
//!
//! let started_at = Utc::now();
//! let answer = a + b;
//! let ended_at = Utc::now();
//!
//! assert!(quiz.check_answer(answer, started_at, ended_at).unwrap());
//! assert_eq!(quiz.history().len(), 1);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Difficulty, NumberShape, Operation, QuizConfig, RoundId, RoundRecord, SessionState,
        SessionSummary,
    };
    pub use crate::engine::{
        create_from_config, create_generator, new_quiz, QuizError, QuizSession,
        QuizSessionBuilder,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, QuizEvent, RelatedNumberGenerator,
    };
    pub use crate::numeric::{DigitNumber, DigitPart, NumericError, NumericResult};
}
