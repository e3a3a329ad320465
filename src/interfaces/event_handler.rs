// ============================================================================
// Event Handler Interface
// Defines the contract for observing quiz rounds
// ============================================================================

use crate::domain::{Operation, RoundRecord};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by a quiz session
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum QuizEvent {
    /// A new pair of operands was generated
    NumbersGenerated {
        round: usize,
        reference: f64,
        operation: Operation,
        related: f64,
        timestamp: DateTime<Utc>,
    },

    /// An answer was checked and recorded
    AnswerChecked {
        record: RoundRecord,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing quiz events
/// Implementations can handle logging, scoring displays, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a quiz event
    fn on_event(&self, event: QuizEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: QuizEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: QuizEvent) {
        match &event {
            QuizEvent::AnswerChecked { record, .. } => {
                tracing::debug!(
                    round_id = %record.id.as_uuid(),
                    correct = record.correct,
                    "Quiz event: {:?}",
                    event
                );
            },
            QuizEvent::NumbersGenerated { .. } => tracing::debug!("Quiz event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoundId;
    use crate::numeric::DigitNumber;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(QuizEvent::NumbersGenerated {
            round: 1,
            reference: 12.5,
            operation: Operation::Add,
            related: 3.25,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler_answered_round() {
        let now = Utc::now();
        let record = RoundRecord {
            id: RoundId::new(),
            reference: DigitNumber::from(12),
            operation: Operation::Sub,
            related: DigitNumber::from(5),
            submitted_answer: 7.0,
            correct_answer: 7.0,
            correct: true,
            started_at: now,
            ended_at: now,
        };
        LoggingEventHandler.on_event(QuizEvent::AnswerChecked {
            record,
            timestamp: now,
        });
    }
}
