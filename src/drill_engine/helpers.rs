//! Shared pieces every builder leans on.
//!
//! The builders are all "draw, check, maybe draw again". [`regenerate_until`]
//! owns that loop so each builder only states what it draws and what counts
//! as acceptable, and every loop honours the same [`RetryLimit`].
//!
//! ## RNG ordering
//!
//! A rejected attempt still consumes its random draws. Seeded output therefore
//! depends on the exact order builders call into the RNG; reordering draws
//! inside a builder changes every seeded worksheet downstream.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use crate::drill_engine::{
    error::{DrillError, Result},
    models::{Equation, Operand, RetryLimit},
};

/// Whether every element of `items` is distinct.
pub fn is_unique<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|x| seen.insert(x))
}

/// Number of structurally distinct elements in `items`.
pub fn distinct_count<T: Eq + Hash>(items: &[T]) -> usize {
    items.iter().collect::<HashSet<_>>().len()
}

/// Call `attempt` until `accept` approves its output.
///
/// `stage` names the loop in logs and in [`DrillError::RetryLimitExceeded`].
/// Under [`RetryLimit::Unbounded`] this blocks until the condition holds.
pub fn regenerate_until<T>(
    stage: &'static str,
    limit: RetryLimit,
    mut attempt: impl FnMut() -> Result<T>,
    mut accept: impl FnMut(&T) -> bool,
) -> Result<T> {
    let mut attempts = 0u32;
    loop {
        if limit.exhausted(attempts) {
            tracing::warn!(stage, attempts, "retry limit reached");
            return Err(DrillError::RetryLimitExceeded { stage, attempts });
        }
        attempts = attempts.saturating_add(1);

        let candidate = attempt()?;
        if accept(&candidate) {
            tracing::trace!(stage, attempts, "batch accepted");
            return Ok(candidate);
        }
        tracing::debug!(stage, attempts, "batch rejected, regenerating");
    }
}

/// Mask one operand of `a op b = result` on a fair coin flip.
pub fn mask<R: Rng>(rng: &mut R, a: u32, b: u32, result: u32) -> Equation {
    if rng.gen_bool(0.5) {
        Equation { left: Operand::Unknown, right: Operand::Known(b), result }
    } else {
        Equation { left: Operand::Known(a), right: Operand::Unknown, result }
    }
}
