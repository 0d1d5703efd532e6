use rand::Rng;
use crate::drill_engine::{
    error::Result,
    helpers::{mask, regenerate_until},
    models::{Problem, RetryLimit},
    operands::random_operands,
};

const LOW: u32 = 10;
const HIGH: u32 = 99;
const COUNT: usize = 5;

/// Raw `(minuend, subtrahend)` pairs, redrawn as a whole until every pair
/// has a positive difference.
fn valid_pairs<R: Rng>(rng: &mut R, limit: RetryLimit) -> Result<Vec<(u32, u32)>> {
    regenerate_until(
        "subtraction batch",
        limit,
        || {
            let a = random_operands(rng, LOW, HIGH, COUNT)?;
            let b = random_operands(rng, LOW, HIGH, COUNT)?;
            Ok(a.into_iter().zip(b).collect::<Vec<_>>())
        },
        |pairs| pairs.iter().all(|&(a, b)| a > b),
    )
}

/// Two-digit differences with one operand hidden, e.g. `62 - X = 19`.
pub fn generate<R: Rng>(rng: &mut R, limit: RetryLimit) -> Result<Vec<Problem>> {
    let pairs = valid_pairs(rng, limit)?;
    Ok(pairs
        .into_iter()
        .map(|(a, b)| Problem::Subtraction(mask(rng, a, b, a - b)))
        .collect())
}
