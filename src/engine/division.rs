// ============================================================================
// Division Generator
// Divisors bounded by the dividend so the quotient stays small
// ============================================================================

use super::number_source::{draw_fraction, pow10};
use crate::domain::{Difficulty, NumberShape, Operation};
use crate::interfaces::RelatedNumberGenerator;
use crate::numeric::{DigitNumber, NumericError, NumericResult};
use rand::{Rng, RngCore};

/// Division operand generator
///
/// The divisor's integer part is drawn from
/// `[1, min(floor(reference), 10^L - 1)]`; its fractional part is an
/// independent draw with the configured number of digits.
pub struct DivisionGenerator;

impl DivisionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Upper bound of the divisor's integer part for `reference`.
    ///
    /// # Errors
    /// Returns `InvalidOperand` when the bound is below 1, i.e. the
    /// reference is smaller than one.
    pub fn integer_bound(reference: &DigitNumber, shape: &NumberShape) -> NumericResult<u64> {
        let cap = pow10(shape.integer_digits)? - 1;
        let whole = reference.integer_part()?;
        if whole < 1 || cap < 1 {
            return Err(NumericError::InvalidOperand);
        }
        Ok(u64::try_from(whole).map_or(cap, |whole| whole.min(cap)))
    }
}

impl Default for DivisionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedNumberGenerator for DivisionGenerator {
    fn generate(
        &self,
        reference: &DigitNumber,
        shape: &NumberShape,
        difficulty: Difficulty,
        rng: &mut dyn RngCore,
    ) -> NumericResult<DigitNumber> {
        let bound = Self::integer_bound(reference, shape)?;
        let integer = rng.gen_range(1..=bound);
        let fraction = draw_fraction(shape.fractional_digits, rng)?;

        tracing::trace!(%difficulty, bound, integer, "generated division operand");

        DigitNumber::from_parts(integer, fraction, shape.fractional_digits)
    }

    fn operation(&self) -> Operation {
        Operation::Div
    }

    fn name(&self) -> &str {
        "Division"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_divisor_within_bound() {
        let generator = DivisionGenerator::new();
        let shape = NumberShape::new(3, 2);
        let mut rng = StdRng::seed_from_u64(31);

        for literal in ["5.75", "120.5", "999.99"] {
            let reference: DigitNumber = literal.parse().unwrap();
            let bound = reference.integer_part().unwrap();
            for _ in 0..1000 {
                let related = generator
                    .generate(&reference, &shape, Difficulty::Medium, &mut rng)
                    .unwrap();
                let integer = related.integer_part().unwrap();
                assert!((1..=bound).contains(&integer));
                assert_eq!(related.fractional_length(), 2);
                assert_ne!(related.fractional_digit(0).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_bound_capped_by_shape() {
        // A reference wider than the shape is capped at 10^L - 1
        let reference: DigitNumber = "123456.5".parse().unwrap();
        let bound = DivisionGenerator::integer_bound(&reference, &NumberShape::new(2, 1)).unwrap();
        assert_eq!(bound, 99);
    }

    #[test]
    fn test_reference_below_one_rejected() {
        let generator = DivisionGenerator::new();
        let mut rng = StdRng::seed_from_u64(32);
        let reference: DigitNumber = "0.75".parse().unwrap();
        assert_eq!(
            generator.generate(&reference, &NumberShape::new(2, 2), Difficulty::Easy, &mut rng),
            Err(NumericError::InvalidOperand)
        );
    }
}
