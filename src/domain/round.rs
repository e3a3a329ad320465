// ============================================================================
// Round Domain Model
// ============================================================================

use super::problem::Operation;
use crate::numeric::DigitNumber;
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundId(Uuid);

impl RoundId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Session State Machine
// ============================================================================

pub mod state {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Per-round cycle: Idle -> NumbersGenerated -> Answered -> NumbersGenerated -> ...
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum SessionState {
        Idle,
        NumbersGenerated,
        Answered,
    }

    #[derive(Debug, Clone, Copy)]
    pub enum SessionTransition {
        Generate,
        Answer,
    }

    impl SessionState {
        pub fn transition(&self, transition: SessionTransition) -> Result<SessionState, String> {
            match (self, transition) {
                (_, SessionTransition::Generate) => Ok(SessionState::NumbersGenerated),
                (SessionState::NumbersGenerated, SessionTransition::Answer) => {
                    Ok(SessionState::Answered)
                },
                _ => Err(format!(
                    "Invalid transition from {:?} via {:?}",
                    self, transition
                )),
            }
        }
    }
}

// ============================================================================
// Round Record
// ============================================================================

/// Snapshot of one answered round. History entries are never modified.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RoundRecord {
    pub id: RoundId,
    pub reference: DigitNumber,
    pub operation: Operation,
    pub related: DigitNumber,
    pub submitted_answer: f64,
    pub correct_answer: f64,
    pub correct: bool,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl RoundRecord {
    /// Time the caller spent answering
    pub fn elapsed(&self) -> TimeDelta {
        self.ended_at - self.started_at
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_seconds_f64()
    }
}

// ============================================================================
// Session Summary
// ============================================================================

/// Aggregate results over a session's history
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionSummary {
    pub correct_count: usize,
    pub wrong_count: usize,
    /// Mean seconds per correct answer, 0 when there are none
    pub average_correct_secs: f64,
    /// Mean seconds per wrong answer, 0 when there are none
    pub average_wrong_secs: f64,
}

impl SessionSummary {
    pub fn from_history(history: &[RoundRecord]) -> Self {
        let (correct, wrong): (Vec<&RoundRecord>, Vec<&RoundRecord>) =
            history.iter().partition(|r| r.correct);

        let average = |rounds: &[&RoundRecord]| {
            if rounds.is_empty() {
                0.0
            } else {
                rounds.iter().map(|r| r.elapsed_secs()).sum::<f64>() / rounds.len() as f64
            }
        };

        Self {
            correct_count: correct.len(),
            wrong_count: wrong.len(),
            average_correct_secs: average(&correct),
            average_wrong_secs: average(&wrong),
        }
    }

    pub fn total(&self) -> usize {
        self.correct_count + self.wrong_count
    }
}

#[cfg(test)]
mod tests {
    use super::state::{SessionState, SessionTransition};
    use super::*;

    fn record(correct: bool, secs: i64) -> RoundRecord {
        let started_at = Utc::now();
        RoundRecord {
            id: RoundId::new(),
            reference: DigitNumber::from(12),
            operation: Operation::Add,
            related: DigitNumber::from(3),
            submitted_answer: if correct { 15.0 } else { 14.0 },
            correct_answer: 15.0,
            correct,
            started_at,
            ended_at: started_at + TimeDelta::seconds(secs),
        }
    }

    #[test]
    fn test_state_transitions() {
        let idle = SessionState::Idle;
        let generated = idle.transition(SessionTransition::Generate).unwrap();
        assert_eq!(generated, SessionState::NumbersGenerated);

        let answered = generated.transition(SessionTransition::Answer).unwrap();
        assert_eq!(answered, SessionState::Answered);
        assert_eq!(
            answered.transition(SessionTransition::Generate),
            Ok(SessionState::NumbersGenerated)
        );

        assert!(idle.transition(SessionTransition::Answer).is_err());
        assert!(answered.transition(SessionTransition::Answer).is_err());
    }

    #[test]
    fn test_round_ids_are_v4() {
        let first = RoundId::new();
        let second = RoundId::new();
        assert_ne!(first, second);
        assert_eq!(first.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_elapsed() {
        let r = record(true, 4);
        assert_eq!(r.elapsed(), TimeDelta::seconds(4));
        assert_eq!(r.elapsed_secs(), 4.0);
    }

    #[test]
    fn test_summary() {
        let history = vec![record(true, 2), record(false, 5), record(true, 4)];
        let summary = SessionSummary::from_history(&history);

        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.wrong_count, 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.average_correct_secs, 3.0);
        assert_eq!(summary.average_wrong_secs, 5.0);

        assert_eq!(SessionSummary::from_history(&[]), SessionSummary::default());
    }
}
