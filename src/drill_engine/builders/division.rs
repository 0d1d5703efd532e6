use rand::Rng;
use crate::drill_engine::{
    error::Result,
    helpers::{is_unique, regenerate_until},
    models::{OperandPair, Problem, RetryLimit},
    operands::unique_operands,
};

const DIVISOR_RANGE: (u32, u32) = (2, 12);
const EASY_QUOTIENTS: (u32, u32) = (2, 12);
const ADVANCED_QUOTIENTS: (u32, u32) = (13, 40);
const PER_TIER: usize = 6;

/// One tier of `(dividend, divisor)` pairs.
///
/// Divisors and quotients are each drawn without repeats; the tier is redrawn
/// until the resulting dividends are distinct too.
fn tier<R: Rng>(
    rng: &mut R,
    quotients: (u32, u32),
    limit: RetryLimit,
) -> Result<Vec<OperandPair>> {
    regenerate_until(
        "division tier",
        limit,
        || {
            let divisors = unique_operands(rng, DIVISOR_RANGE.0, DIVISOR_RANGE.1, PER_TIER, limit)?;
            let qs = unique_operands(rng, quotients.0, quotients.1, PER_TIER, limit)?;
            Ok(divisors
                .into_iter()
                .zip(qs)
                .map(|(divisor, q)| OperandPair { first: divisor * q, second: divisor })
                .collect::<Vec<_>>())
        },
        |pairs| is_unique(&pairs.iter().map(|p| p.first).collect::<Vec<_>>()),
    )
}

/// Twelve exact divisions: six times-table ones, then six with a larger quotient.
pub fn generate<R: Rng>(rng: &mut R, limit: RetryLimit) -> Result<Vec<Problem>> {
    let easy = tier(rng, EASY_QUOTIENTS, limit)?;
    let advanced = tier(rng, ADVANCED_QUOTIENTS, limit)?;
    Ok(easy
        .into_iter()
        .chain(advanced)
        .map(Problem::Division)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pairs(batch: &[Problem]) -> Vec<OperandPair> {
        batch
            .iter()
            .map(|p| match p {
                Problem::Division(pair) => *pair,
                other => panic!("not a division: {other:?}"),
            })
            .collect()
    }

    #[test]
    fn every_dividend_is_an_exact_multiple() {
        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = generate(&mut rng, RetryLimit::Unbounded).unwrap();
            assert_eq!(batch.len(), 2 * PER_TIER);
            for p in pairs(&batch) {
                assert_eq!(p.first % p.second, 0, "seed={seed}: {p:?}");
            }
        }
    }

    #[test]
    fn tiers_are_unique_and_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let all = pairs(&generate(&mut rng, RetryLimit::Unbounded).unwrap());
        let (easy, advanced) = all.split_at(PER_TIER);

        for (group, (q_lo, q_hi)) in [(easy, EASY_QUOTIENTS), (advanced, ADVANCED_QUOTIENTS)] {
            let divisors: Vec<u32> = group.iter().map(|p| p.second).collect();
            let quotients: Vec<u32> = group.iter().map(|p| p.first / p.second).collect();
            let dividends: Vec<u32> = group.iter().map(|p| p.first).collect();
            assert!(is_unique(&divisors), "{divisors:?}");
            assert!(is_unique(&quotients), "{quotients:?}");
            assert!(is_unique(&dividends), "{dividends:?}");
            assert!(divisors.iter().all(|d| (2..=12).contains(d)));
            assert!(quotients.iter().all(|q| (q_lo..=q_hi).contains(q)));
        }
    }

    #[test]
    fn answer_is_the_quotient() {
        let p = Problem::Division(OperandPair { first: 84, second: 7 });
        assert_eq!(p.answer(), Some(12));
    }
}
