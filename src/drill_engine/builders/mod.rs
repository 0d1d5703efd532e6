//! One problem builder per operator.
//!
//! Every builder has the same shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, limit: RetryLimit) -> Result<Vec<Problem>>
//! ```
//!
//! and returns one fixed-size batch built from its difficulty tiers. Batches
//! are not deduplicated; `generator::unique_problems` handles that.

/// 5 problems, operands in 10..=99, one side masked.
pub mod addition;
/// 5 problems, operands in 10..=99 with `a > b`, one side masked.
pub mod subtraction;
/// 10 problems across four tiers, up to 3-digit by 3-digit.
pub mod multiplication;
/// 12 problems, an easy and an advanced tier of 6.
pub mod division;
