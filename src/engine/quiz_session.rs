// ============================================================================
// Quiz Session
// Round orchestration: operand generation, answer checking and history
// ============================================================================

use super::errors::QuizError;
use super::factory::create_generator;
use super::number_source::generate_number;
use crate::domain::{
    QuizConfig, RoundId, RoundRecord, SessionState, SessionSummary, SessionTransition,
};
use crate::interfaces::{EventHandler, NoOpEventHandler, QuizEvent, RelatedNumberGenerator};
use crate::numeric::{DigitNumber, NumericResult};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Answers are compared after rounding to this many decimal places
pub const ANSWER_DECIMAL_PLACES: u32 = 6;

/// Quiz session for one caller
///
/// Each round the caller requests a pair of numbers, shows them, and submits
/// an answer together with the time it started and stopped waiting for input.
pub struct QuizSession {
    config: QuizConfig,

    /// Related-number strategy for the configured operation
    generator: Box<dyn RelatedNumberGenerator>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    rng: StdRng,
    state: SessionState,

    /// Current pair; zero-valued until the first round is generated
    reference: DigitNumber,
    related: DigitNumber,

    history: Vec<RoundRecord>,
}

impl QuizSession {
    /// Create a session that emits no events
    ///
    /// # Errors
    /// Returns `QuizError::Config` if the configuration is invalid.
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        Self::with_event_handler(config, Arc::new(NoOpEventHandler))
    }

    /// Create a session reporting to `event_handler`
    pub fn with_event_handler(
        config: QuizConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, QuizError> {
        config.validate().map_err(QuizError::Config)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            generator: create_generator(config.operation),
            config,
            event_handler,
            rng,
            state: SessionState::Idle,
            reference: DigitNumber::default(),
            related: DigitNumber::default(),
            history: Vec::new(),
        })
    }

    /// Generate the next pair and return their values
    pub fn get_numbers(&mut self) -> NumericResult<(f64, f64)> {
        let reference = generate_number(&self.config.shape, &mut self.rng)?;
        let related = self.generator.generate(
            &reference,
            &self.config.shape,
            self.config.difficulty,
            &mut self.rng,
        )?;

        self.reference = reference;
        self.related = related;
        self.state = match self.state.transition(SessionTransition::Generate) {
            Ok(next) => next,
            Err(reason) => {
                tracing::warn!(%reason, "unexpected state while generating numbers");
                SessionState::NumbersGenerated
            },
        };

        let (reference, related) = (self.reference.value(), self.related.value());
        tracing::debug!(
            round = self.history.len() + 1,
            generator = self.generator.name(),
            "generated {} {} {}",
            reference,
            self.config.operation,
            related
        );

        self.event_handler.on_event(QuizEvent::NumbersGenerated {
            round: self.history.len() + 1,
            reference,
            operation: self.config.operation,
            related,
            timestamp: Utc::now(),
        });

        Ok((reference, related))
    }

    /// Score `user_answer` against the current pair and record the round
    ///
    /// Calling this before [`get_numbers`](Self::get_numbers) scores against
    /// the zero-valued default pair.
    ///
    /// # Errors
    /// Propagates the arithmetic error of the operation, e.g.
    /// `DivisionByZero` for a division quiz answered before any round.
    pub fn check_answer(
        &mut self,
        user_answer: f64,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> NumericResult<bool> {
        let correct_answer = self.correct_answer()?;
        let correct = answers_match(user_answer, correct_answer);

        self.state = match self.state.transition(SessionTransition::Answer) {
            Ok(next) => next,
            Err(reason) => {
                tracing::warn!(%reason, "answer checked without a freshly generated pair");
                SessionState::Answered
            },
        };

        let record = RoundRecord {
            id: RoundId::new(),
            reference: self.reference.clone(),
            operation: self.config.operation,
            related: self.related.clone(),
            submitted_answer: user_answer,
            correct_answer,
            correct,
            started_at,
            ended_at,
        };

        tracing::debug!(
            round = self.history.len() + 1,
            correct,
            elapsed_secs = record.elapsed_secs(),
            "checked answer {} (expected {})",
            user_answer,
            correct_answer
        );

        self.history.push(record.clone());
        self.event_handler.on_event(QuizEvent::AnswerChecked {
            record,
            timestamp: Utc::now(),
        });

        Ok(correct)
    }

    /// Result of the operation over the current pair, recomputed on every call
    pub fn correct_answer(&self) -> NumericResult<f64> {
        Ok(self
            .config
            .operation
            .apply(&self.reference, &self.related)?
            .value())
    }

    /// Answered rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_history(&self.history)
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn reference(&self) -> &DigitNumber {
        &self.reference
    }

    pub fn related(&self) -> &DigitNumber {
        &self.related
    }
}

/// Compare answers after rounding both to [`ANSWER_DECIMAL_PLACES`] with
/// round-half-even. Values outside `Decimal`'s range compare exactly.
pub fn answers_match(submitted: f64, expected: f64) -> bool {
    match (round_answer(submitted), round_answer(expected)) {
        (Some(a), Some(b)) => a == b,
        _ => submitted == expected,
    }
}

fn round_answer(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(ANSWER_DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Operation};
    use crate::numeric::NumericError;
    use chrono::TimeDelta;
    use parking_lot::Mutex;

    /// Collects events for assertions
    #[derive(Default)]
    struct RecordingEventHandler {
        events: Mutex<Vec<QuizEvent>>,
    }

    impl EventHandler for RecordingEventHandler {
        fn on_event(&self, event: QuizEvent) {
            self.events.lock().push(event);
        }
    }

    fn session(operation: Operation, difficulty: Difficulty) -> QuizSession {
        QuizSession::new(QuizConfig::new(3, 2, difficulty, operation).with_seed(99)).unwrap()
    }

    fn timestamps(millis: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc::now();
        (start, start + TimeDelta::milliseconds(millis))
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = QuizConfig::new(0, 2, Difficulty::Easy, Operation::Add);
        assert!(matches!(QuizSession::new(config), Err(QuizError::Config(_))));
    }

    #[test]
    fn test_get_numbers() {
        let mut quiz = session(Operation::Add, Difficulty::Easy);
        assert_eq!(quiz.state(), SessionState::Idle);

        let (a, b) = quiz.get_numbers().unwrap();
        assert_eq!(quiz.state(), SessionState::NumbersGenerated);
        assert_eq!(quiz.reference().value(), a);
        assert_eq!(quiz.related().value(), b);
        assert_eq!(quiz.reference().integer_length(), 3);
        assert_eq!(quiz.reference().fractional_length(), 2);
        assert!(quiz.related().integer_length() <= 2);
    }

    #[test]
    fn test_state_cycle() {
        let mut quiz = session(Operation::Add, Difficulty::Hard);
        let (start, end) = timestamps(5);

        quiz.get_numbers().unwrap();
        quiz.get_numbers().unwrap();
        assert_eq!(quiz.state(), SessionState::NumbersGenerated);

        let answer = quiz.correct_answer().unwrap();
        quiz.check_answer(answer, start, end).unwrap();
        assert_eq!(quiz.state(), SessionState::Answered);

        quiz.get_numbers().unwrap();
        assert_eq!(quiz.state(), SessionState::NumbersGenerated);
    }

    #[test]
    fn test_correct_answer_recorded() {
        let mut quiz = session(Operation::Mul, Difficulty::Medium);
        let (a, b) = quiz.get_numbers().unwrap();
        let expected = quiz.correct_answer().unwrap();
        assert_eq!(expected, a * b);

        let (start, end) = timestamps(1500);
        assert!(quiz.check_answer(expected, start, end).unwrap());
        assert_eq!(quiz.state(), SessionState::Answered);

        let record = &quiz.history()[0];
        assert!(record.correct);
        assert_eq!(record.operation, Operation::Mul);
        assert_eq!(record.correct_answer, expected);
        assert_eq!(record.submitted_answer, expected);
        assert_eq!(record.reference.value(), a);
        assert_eq!(record.related.value(), b);
        assert_eq!(record.elapsed(), TimeDelta::milliseconds(1500));
    }

    #[test]
    fn test_wrong_answer_recorded() {
        let mut quiz = session(Operation::Sub, Difficulty::Hard);
        quiz.get_numbers().unwrap();
        let expected = quiz.correct_answer().unwrap();

        let (start, end) = timestamps(10);
        assert!(!quiz.check_answer(expected + 1.0, start, end).unwrap());
        assert!(!quiz.history()[0].correct);
        // the pair is unchanged, so the derived answer is too
        assert_eq!(quiz.correct_answer().unwrap(), expected);
    }

    #[test]
    fn test_answers_compared_at_six_places() {
        assert!(answers_match(1.2345671, 1.2345674));
        assert!(!answers_match(1.234567, 1.234568));
        assert!(answers_match(2.0, 2.0000000001));
        assert!(answers_match(-3.5, -3.5));
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let mut first = session(Operation::Div, Difficulty::Easy);
        let mut second = session(Operation::Div, Difficulty::Easy);
        for _ in 0..10 {
            assert_eq!(first.get_numbers().unwrap(), second.get_numbers().unwrap());
        }
    }

    #[test]
    fn test_answer_before_numbers() {
        let mut add = session(Operation::Add, Difficulty::Easy);
        let (start, end) = timestamps(0);
        assert!(add.check_answer(0.0, start, end).unwrap());
        assert_eq!(add.history().len(), 1);

        let mut div = session(Operation::Div, Difficulty::Easy);
        assert_eq!(
            div.check_answer(0.0, start, end),
            Err(NumericError::DivisionByZero)
        );
        assert!(div.history().is_empty());
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(RecordingEventHandler::default());
        let config = QuizConfig::console_easy(Operation::Add).with_seed(5);
        let mut quiz = QuizSession::with_event_handler(config, handler.clone()).unwrap();

        let (a, b) = quiz.get_numbers().unwrap();
        let (start, end) = timestamps(250);
        quiz.check_answer(a + b, start, end).unwrap();

        let events = handler.events.lock();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            QuizEvent::NumbersGenerated { round: 1, operation: Operation::Add, .. }
        ));
        match &events[1] {
            QuizEvent::AnswerChecked { record, .. } => assert!(record.correct),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_summary() {
        let mut quiz = session(Operation::Add, Difficulty::Medium);
        for round in 0..4 {
            quiz.get_numbers().unwrap();
            let expected = quiz.correct_answer().unwrap();
            let answer = if round % 2 == 0 { expected } else { expected - 0.5 };
            let (start, end) = timestamps(1000 * (round + 1));
            quiz.check_answer(answer, start, end).unwrap();
        }

        let summary = quiz.summary();
        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.wrong_count, 2);
        // rounds 1 and 3 were correct (1s, 3s), rounds 2 and 4 wrong (2s, 4s)
        assert_eq!(summary.average_correct_secs, 2.0);
        assert_eq!(summary.average_wrong_secs, 3.0);
    }
}
