// ============================================================================
// Multiplication Generator
// ============================================================================

use super::number_source::generate_number;
use crate::domain::{Difficulty, NumberShape, Operation};
use crate::interfaces::RelatedNumberGenerator;
use crate::numeric::{DigitNumber, NumericResult};
use rand::RngCore;

/// Multiplication operand generator
///
/// The second factor is drawn independently with the reference shape; the
/// difficulty tier only affects it through the configured shape.
pub struct MultiplicationGenerator;

impl MultiplicationGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MultiplicationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedNumberGenerator for MultiplicationGenerator {
    fn generate(
        &self,
        _reference: &DigitNumber,
        shape: &NumberShape,
        _difficulty: Difficulty,
        rng: &mut dyn RngCore,
    ) -> NumericResult<DigitNumber> {
        generate_number(shape, rng)
    }

    fn operation(&self) -> Operation {
        Operation::Mul
    }

    fn name(&self) -> &str {
        "Multiplication"
    }
}
