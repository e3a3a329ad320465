// ============================================================================
// Addition Generator
// Related operands with a bounded number of carrying digit positions
// ============================================================================

use super::number_source::TierLimits;
use crate::domain::{Difficulty, NumberShape, Operation};
use crate::interfaces::RelatedNumberGenerator;
use crate::numeric::{DigitNumber, NumericResult};
use rand::{Rng, RngCore};

/// Addition operand generator
///
/// Integer digits are drawn from the least significant position upward.
/// While fewer than `budget` positions have overflowed, any digit 0-9 may be
/// drawn; afterwards each digit is capped at `9 - reference_digit` so the
/// column cannot carry. A position only counts as overflowing when the column
/// sum is strictly greater than 10.
///
/// A random prefix of the fractional digits is filled with values that never
/// carry into the integer part.
pub struct AdditionGenerator;

impl AdditionGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdditionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedNumberGenerator for AdditionGenerator {
    fn generate(
        &self,
        reference: &DigitNumber,
        shape: &NumberShape,
        difficulty: Difficulty,
        rng: &mut dyn RngCore,
    ) -> NumericResult<DigitNumber> {
        let limits = TierLimits::for_tier(difficulty, shape.integer_digits);
        let integer_count = rng.gen_range(1..=limits.max_integer_digits);
        let mut related = DigitNumber::zeroed(integer_count, shape.fractional_digits);

        let mut carries = 0;
        for position in 0..integer_count {
            let reference_digit = reference.integer_digit(position).unwrap_or(0);
            let cap = if carries < limits.budget {
                9
            } else {
                9 - reference_digit
            };
            let digit = rng.gen_range(0..=cap);
            if digit + reference_digit > 10 {
                carries += 1;
            }
            related.set_integer_digit(position, digit)?;
        }

        let fractional_count = rng.gen_range(0..=shape.fractional_digits);
        for position in 0..fractional_count {
            let reference_digit = reference.fractional_digit(position).unwrap_or(0);
            related.set_fractional_digit(position, rng.gen_range(0..=9 - reference_digit))?;
        }

        tracing::trace!(
            %difficulty,
            integer_count,
            fractional_count,
            carries,
            budget = limits.budget,
            "generated addition operand"
        );

        Ok(related)
    }

    fn operation(&self) -> Operation {
        Operation::Add
    }

    fn name(&self) -> &str {
        "Addition"
    }
}
