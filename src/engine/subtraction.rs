// ============================================================================
// Subtraction Generator
// Related operands that lean on large digits to shape borrowing
// ============================================================================

use super::number_source::TierLimits;
use crate::domain::{Difficulty, NumberShape, Operation};
use crate::interfaces::RelatedNumberGenerator;
use crate::numeric::{DigitNumber, NumericResult};
use rand::{Rng, RngCore};

/// Floor for constrained digits; any digit above it counts as big
const BIG_DIGIT: u8 = 5;

/// Subtraction operand generator
///
/// Until a big digit (> 5) has been produced, the most significant integer
/// digit and every filled fractional digit are drawn from 5-9; the other
/// integer digits are drawn from 0-9. Only the MEDIUM tier records big
/// digits, so EASY and HARD keep the 5-9 floor throughout.
///
/// The tier's budget is not consulted: only the digit count varies by tier.
pub struct SubtractionGenerator;

impl SubtractionGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubtractionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedNumberGenerator for SubtractionGenerator {
    fn generate(
        &self,
        _reference: &DigitNumber,
        shape: &NumberShape,
        difficulty: Difficulty,
        rng: &mut dyn RngCore,
    ) -> NumericResult<DigitNumber> {
        let limits = TierLimits::for_tier(difficulty, shape.integer_digits);
        let integer_count = rng.gen_range(1..=limits.max_integer_digits);
        let mut related = DigitNumber::zeroed(integer_count, shape.fractional_digits);
        let mut has_big_digit = false;

        for position in 0..integer_count {
            let min = if !has_big_digit && position == integer_count - 1 {
                BIG_DIGIT
            } else {
                0
            };
            let digit = rng.gen_range(min..=9);
            if difficulty == Difficulty::Medium && digit > BIG_DIGIT {
                has_big_digit = true;
            }
            related.set_integer_digit(position, digit)?;
        }

        let fractional_count = rng.gen_range(0..=shape.fractional_digits);
        for position in 0..fractional_count {
            let min = if has_big_digit { 0 } else { BIG_DIGIT };
            let digit = rng.gen_range(min..=9);
            if difficulty == Difficulty::Medium && digit > BIG_DIGIT {
                has_big_digit = true;
            }
            related.set_fractional_digit(position, digit)?;
        }

        tracing::trace!(
            %difficulty,
            integer_count,
            fractional_count,
            has_big_digit,
            "generated subtraction operand"
        );

        Ok(related)
    }

    fn operation(&self) -> Operation {
        Operation::Sub
    }

    fn name(&self) -> &str {
        "Subtraction"
    }
}
