// ============================================================================
// Numeric Module
// Digit-level decimal numbers for quiz operands
// ============================================================================
//
// This module provides:
// - DigitNumber: decimal value with addressable integer and fractional digits
// - DigitPart: selects the integer or fractional digit sequence
// - NumericError: error types for construction, digit access and arithmetic
//
// Design principles:
// - Digit sequences keep a fixed length once built
// - All fallible arithmetic returns Result (operators are convenience only)
// - Equality is tolerant to the finest fractional place of either operand

mod digit_number;
mod errors;

pub use digit_number::{DigitNumber, Operand};
pub use errors::{DigitPart, NumericError, NumericResult};
