// ============================================================================
// Related Number Interface
// Defines the contract for per-operation operand generation
// ============================================================================

use crate::domain::{Difficulty, NumberShape, Operation};
use crate::numeric::{DigitNumber, NumericResult};
use rand::RngCore;

/// Strategy pattern interface for generating the second operand of a problem
/// Implementations: Addition, Subtraction, Multiplication, Division
pub trait RelatedNumberGenerator: Send + Sync {
    /// Generate an operand whose digits relate to `reference` so that
    /// `reference <op> result` matches the requested difficulty
    ///
    /// # Arguments
    /// * `reference` - The first operand, already generated for this round
    /// * `shape` - Configured digit counts of the reference operand
    /// * `difficulty` - Difficulty tier of the session
    /// * `rng` - Random source owned by the session
    fn generate(
        &self,
        reference: &DigitNumber,
        shape: &NumberShape,
        difficulty: Difficulty,
        rng: &mut dyn RngCore,
    ) -> NumericResult<DigitNumber>;

    /// The operation this generator serves
    fn operation(&self) -> Operation;

    /// Get the generator name for logging
    fn name(&self) -> &str;
}
