// ============================================================================
// Interfaces Module
// Defines contracts for pluggable operand generation and event handling
// ============================================================================

mod event_handler;
mod related_number;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, QuizEvent};
pub use related_number::RelatedNumberGenerator;
