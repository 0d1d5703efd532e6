use rand::Rng;
use crate::drill_engine::{
    error::Result,
    helpers::mask,
    models::{Problem, RetryLimit},
    operands::random_operands,
};

const LOW: u32 = 10;
const HIGH: u32 = 99;
const COUNT: usize = 5;

/// Two-digit sums with one summand hidden, e.g. `X + 47 = 90`.
pub fn generate<R: Rng>(rng: &mut R, _limit: RetryLimit) -> Result<Vec<Problem>> {
    let a = random_operands(rng, LOW, HIGH, COUNT)?;
    let b = random_operands(rng, LOW, HIGH, COUNT)?;

    Ok(a.into_iter()
        .zip(b)
        .map(|(x, y)| Problem::Addition(mask(rng, x, y, x + y)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::models::Operand;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn batch_has_five_masked_sums() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = generate(&mut rng, RetryLimit::Unbounded).unwrap();
        assert_eq!(batch.len(), COUNT);
        for p in batch {
            let Problem::Addition(eq) = p else { panic!("not an addition: {p:?}") };
            let known = match (eq.left, eq.right) {
                (Operand::Unknown, Operand::Known(v)) | (Operand::Known(v), Operand::Unknown) => v,
                other => panic!("expected exactly one unknown, got {other:?}"),
            };
            let hidden = eq.result - known;
            assert!((LOW..=HIGH).contains(&known));
            assert!((LOW..=HIGH).contains(&hidden));
            assert_eq!(p.answer(), Some(hidden));
        }
    }
}
