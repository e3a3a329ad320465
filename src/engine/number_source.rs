// ============================================================================
// Number Source
// Reference operand generation and difficulty tier limits
// ============================================================================

use crate::domain::{Difficulty, NumberShape};
use crate::numeric::{DigitNumber, NumericError, NumericResult};
use rand::{Rng, RngCore};

/// Longest related operand the HARD tier may produce
const HARD_MAX_INTEGER_DIGITS: usize = 18;

/// Largest carry budget the HARD tier may grant
const HARD_MAX_BUDGET: usize = 15;

/// Compute 10^n, failing once it no longer fits a u64
pub(crate) fn pow10(n: usize) -> NumericResult<u64> {
    u32::try_from(n)
        .ok()
        .and_then(|n| 10u64.checked_pow(n))
        .ok_or(NumericError::Overflow)
}

/// Draw a fractional part of exactly `digits` digits whose first digit is
/// non-zero. Zero digits always yields 0.
pub(crate) fn draw_fraction(digits: usize, rng: &mut dyn RngCore) -> NumericResult<u64> {
    if digits == 0 {
        return Ok(0);
    }
    let low = pow10(digits - 1)?;
    let high = pow10(digits)? - 1;
    Ok(rng.gen_range(low..=high))
}

/// Generate a reference operand with exactly the configured shape.
///
/// The integer part is drawn from `[10^(L-1), 10^L - 1]` and the fractional
/// part from `[10^(F-1), 10^F - 1]`, so both leading digits are non-zero.
///
/// # Errors
/// - `InvalidInput` if the shape has no integer digits
/// - `Overflow` if the shape is too wide for a u64 draw
pub fn generate_number(shape: &NumberShape, rng: &mut dyn RngCore) -> NumericResult<DigitNumber> {
    if shape.integer_digits == 0 {
        return Err(NumericError::InvalidInput);
    }
    let low = pow10(shape.integer_digits - 1)?;
    let high = pow10(shape.integer_digits)? - 1;
    let integer = rng.gen_range(low..=high);
    let fraction = draw_fraction(shape.fractional_digits, rng)?;
    DigitNumber::from_parts(integer, fraction, shape.fractional_digits)
}

/// Per-tier bounds shared by the addition and subtraction generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    /// Upper bound for the related operand's integer digit count
    pub max_integer_digits: usize,
    /// Number of digit positions allowed to carry (or borrow)
    pub budget: usize,
}

impl TierLimits {
    pub fn for_tier(difficulty: Difficulty, integer_digits: usize) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                max_integer_digits: integer_digits.saturating_sub(1).max(1),
                budget: 1,
            },
            Difficulty::Medium => Self {
                max_integer_digits: integer_digits.max(1),
                budget: integer_digits.saturating_sub(1).max(1),
            },
            Difficulty::Hard => Self {
                max_integer_digits: (integer_digits + 2).min(HARD_MAX_INTEGER_DIGITS),
                budget: integer_digits.min(HARD_MAX_BUDGET).max(3),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_number_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = NumberShape::new(4, 2);

        for _ in 0..1000 {
            let x = generate_number(&shape, &mut rng).unwrap();
            assert_eq!(x.integer_length(), 4);
            assert_eq!(x.fractional_length(), 2);
            let integer = x.integer_part().unwrap();
            assert!((1000..=9999).contains(&integer));
            assert_ne!(x.fractional_digit(0).unwrap(), 0);
        }
    }

    #[test]
    fn test_generate_number_without_fraction() {
        let mut rng = StdRng::seed_from_u64(7);
        let x = generate_number(&NumberShape::new(1, 0), &mut rng).unwrap();
        assert_eq!(x.fractional_length(), 0);
        assert!((1..=9).contains(&x.integer_part().unwrap()));
    }

    #[test]
    fn test_generate_number_invalid_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_number(&NumberShape::new(0, 2), &mut rng),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            generate_number(&NumberShape::new(21, 2), &mut rng),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_tier_limits() {
        let easy = TierLimits::for_tier(Difficulty::Easy, 3);
        assert_eq!(easy, TierLimits { max_integer_digits: 2, budget: 1 });
        assert_eq!(TierLimits::for_tier(Difficulty::Easy, 1).max_integer_digits, 1);

        let medium = TierLimits::for_tier(Difficulty::Medium, 4);
        assert_eq!(medium, TierLimits { max_integer_digits: 4, budget: 3 });
        assert_eq!(TierLimits::for_tier(Difficulty::Medium, 1).budget, 1);

        let hard = TierLimits::for_tier(Difficulty::Hard, 4);
        assert_eq!(hard, TierLimits { max_integer_digits: 6, budget: 4 });
        assert_eq!(TierLimits::for_tier(Difficulty::Hard, 2).budget, 3);

        let widest = TierLimits::for_tier(Difficulty::Hard, 18);
        assert_eq!(widest, TierLimits { max_integer_digits: 18, budget: 15 });
    }
}
