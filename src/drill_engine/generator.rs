use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    builders,
    error::{DrillError, Result},
    helpers::{distinct_count, regenerate_until},
    models::{
        DrillRequest, Problem, ProblemKind, RetryLimit, Section, Worksheet, WorksheetConfig,
    },
};

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// One raw batch from the builder for `kind`.
pub fn build_batch<R: Rng>(rng: &mut R, kind: ProblemKind, limit: RetryLimit) -> Result<Vec<Problem>> {
    match kind {
        ProblemKind::Addition       => builders::addition::generate(rng, limit),
        ProblemKind::Subtraction    => builders::subtraction::generate(rng, limit),
        ProblemKind::Multiplication => builders::multiplication::generate(rng, limit),
        ProblemKind::Division       => builders::division::generate(rng, limit),
    }
}

/// Rebuild batches of `kind` until one holds at least `n` distinct problems.
///
/// The winning batch is returned whole. It can be longer than `n` and can
/// still contain repeats; only its distinct count is checked.
pub fn unique_problems<R: Rng>(
    rng: &mut R,
    n: usize,
    kind: ProblemKind,
    limit: RetryLimit,
) -> Result<Vec<Problem>> {
    if n < 1 {
        return Err(DrillError::InvalidCount);
    }
    regenerate_until(
        "distinct problems",
        limit,
        || build_batch(rng, kind, limit),
        |batch| distinct_count(batch) >= n,
    )
}

/// Single-kind entry point: seeds the RNG and runs [`unique_problems`].
pub fn generate_problems(request: &DrillRequest) -> Result<Vec<Problem>> {
    let mut rng = make_rng(request.rng_seed);
    unique_problems(&mut rng, request.count, request.kind, request.retry_limit)
}

/// Build every section of a worksheet from one RNG, in [`ProblemKind::ALL`] order.
///
/// Kinds configured with a count of zero are left out.
pub fn generate_worksheet(config: &WorksheetConfig) -> Result<Worksheet> {
    let mut rng = make_rng(config.rng_seed);
    let mut sections = Vec::with_capacity(ProblemKind::ALL.len());

    for kind in ProblemKind::ALL {
        let count = config.count_for(kind);
        if count == 0 {
            tracing::debug!(%kind, "section skipped");
            continue;
        }
        let problems = unique_problems(&mut rng, count, kind, config.retry_limit)?;
        tracing::debug!(%kind, requested = count, generated = problems.len(), "section built");
        sections.push(Section { kind, problems });
    }

    Ok(Worksheet { rng_seed: config.rng_seed, sections })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_reaches_the_distinct_target() {
        let targets = [
            (ProblemKind::Addition, 5),
            (ProblemKind::Subtraction, 5),
            (ProblemKind::Multiplication, 10),
            (ProblemKind::Division, 10),
        ];
        for (kind, n) in targets {
            let batch = generate_problems(&DrillRequest {
                kind,
                count: n,
                rng_seed: Some(2024),
                retry_limit: RetryLimit::Unbounded,
            })
            .unwrap();
            assert!(distinct_count(&batch) >= n, "{kind}: {batch:?}");
            assert!(batch.iter().all(|p| p.kind() == kind));
        }
    }

    #[test]
    fn batch_is_returned_whole() {
        let batch = generate_problems(&DrillRequest {
            kind: ProblemKind::Division,
            count: 1,
            rng_seed: Some(9),
            retry_limit: RetryLimit::Unbounded,
        })
        .unwrap();
        assert_eq!(batch.len(), 12);
    }

    #[test]
    fn unreachable_target_fails_under_a_cap() {
        // An addition batch only ever holds five problems.
        let err = generate_problems(&DrillRequest {
            kind: ProblemKind::Addition,
            count: 6,
            rng_seed: Some(3),
            retry_limit: RetryLimit::Capped(25),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            DrillError::RetryLimitExceeded { stage: "distinct problems", attempts: 25 }
        ));
    }

    #[test]
    fn worksheet_follows_canonical_order_and_skips_empty_sections() {
        let config = WorksheetConfig {
            subtraction: 0,
            rng_seed: Some(77),
            ..WorksheetConfig::default()
        };
        let sheet = generate_worksheet(&config).unwrap();
        let kinds: Vec<ProblemKind> = sheet.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![ProblemKind::Addition, ProblemKind::Multiplication, ProblemKind::Division]
        );
    }
}
