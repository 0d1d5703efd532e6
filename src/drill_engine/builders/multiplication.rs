use rand::Rng;
use crate::drill_engine::{
    error::Result,
    models::{OperandPair, Problem, RetryLimit},
    operands::random_operands,
};

/// `(first range, second range, how many)` per tier, easiest first.
const TIERS: [((u32, u32), (u32, u32), usize); 4] = [
    // Times tables 2..12.
    ((2, 12), (2, 12), 3),
    // Two 2-digit numbers.
    ((13, 99), (13, 99), 3),
    // 3-digit by 2-digit.
    ((100, 999), (13, 99), 3),
    // Two 3-digit numbers.
    ((100, 999), (100, 999), 1),
];

/// Ten products, no masking. Tiers are concatenated in order.
pub fn generate<R: Rng>(rng: &mut R, _limit: RetryLimit) -> Result<Vec<Problem>> {
    let mut batch = Vec::with_capacity(TIERS.iter().map(|t| t.2).sum());
    for ((a_low, a_high), (b_low, b_high), n) in TIERS {
        let a = random_operands(rng, a_low, a_high, n)?;
        let b = random_operands(rng, b_low, b_high, n)?;
        batch.extend(
            a.into_iter()
                .zip(b)
                .map(|(first, second)| Problem::Multiplication(OperandPair { first, second })),
        );
    }
    Ok(batch)
}
