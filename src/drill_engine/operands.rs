use rand::Rng;
use crate::drill_engine::{
    error::{DrillError, Result},
    helpers::{is_unique, regenerate_until},
    models::RetryLimit,
};

fn check_range(low: u32, high: u32) -> Result<()> {
    if low > high {
        return Err(DrillError::InvalidRange { low, high });
    }
    Ok(())
}

/// `count` independent uniform draws from `low..=high`. Repeats allowed.
pub fn random_operands<R: Rng>(rng: &mut R, low: u32, high: u32, count: usize) -> Result<Vec<u32>> {
    check_range(low, high)?;
    Ok((0..count).map(|_| rng.gen_range(low..=high)).collect())
}

/// Like [`random_operands`], but redraws the whole batch until it has no repeats.
///
/// Asking for more values than `low..=high` holds never succeeds; with
/// [`RetryLimit::Unbounded`] that blocks forever.
pub fn unique_operands<R: Rng>(
    rng: &mut R,
    low: u32,
    high: u32,
    count: usize,
    limit: RetryLimit,
) -> Result<Vec<u32>> {
    check_range(low, high)?;
    regenerate_until(
        "unique operands",
        limit,
        || random_operands(rng, low, high, count),
        |ops| is_unique(ops),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let ops = random_operands(&mut rng, 10, 99, 500).unwrap();
        assert_eq!(ops.len(), 500);
        assert!(ops.iter().all(|v| (10..=99).contains(v)));
    }

    #[test]
    fn random_operands_are_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_operands(&mut rng, 100, 999, 8).unwrap()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn unique_operands_can_fill_the_whole_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ops = unique_operands(&mut rng, 2, 6, 5, RetryLimit::Unbounded).unwrap();
        ops.sort_unstable();
        assert_eq!(ops, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn impossible_uniqueness_hits_the_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = unique_operands(&mut rng, 2, 4, 4, RetryLimit::Capped(50)).unwrap_err();
        assert!(matches!(
            err,
            DrillError::RetryLimitExceeded { stage: "unique operands", attempts: 50 }
        ));
    }

    #[test]
    fn inverted_range_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_operands(&mut rng, 20, 10, 3).unwrap_err();
        assert!(matches!(err, DrillError::InvalidRange { low: 20, high: 10 }));

        // Rejected before the first attempt, so even a zero cap reports the range.
        for limit in [RetryLimit::Capped(10), RetryLimit::Capped(0), RetryLimit::Unbounded] {
            let err = unique_operands(&mut rng, 20, 10, 3, limit).unwrap_err();
            assert!(matches!(err, DrillError::InvalidRange { low: 20, high: 10 }), "{limit:?}: {err}");
        }
    }

    #[test]
    fn single_value_range_is_fine() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(random_operands(&mut rng, 9, 9, 3).unwrap(), vec![9, 9, 9]);
        assert_eq!(unique_operands(&mut rng, 9, 9, 1, RetryLimit::Capped(1)).unwrap(), vec![9]);
    }
}
