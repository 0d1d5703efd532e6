//! # arith_drill_gen
//!
//! Randomised elementary-arithmetic practice problems: addition, subtraction,
//! multiplication and division, grouped into a printable worksheet.
//!
//! ## How it works
//!
//! 1. Each operator has a builder that draws operands from fixed difficulty
//!    tiers (times tables up to 3-digit by 3-digit products, exact divisions,
//!    two-digit sums and differences).
//! 2. Addition and subtraction problems get one operand hidden, turning
//!    `43 + 47 = 90` into the fill-in-the-blank `X + 47 = 90`.
//! 3. [`unique_problems`] keeps rebuilding a batch until it holds enough
//!    distinct problems.
//! 4. [`generate_worksheet`] runs that for every operator in order, and the
//!    [`worksheet`] module renders the result as text or JSON.
//!
//! ## Retry behaviour
//!
//! Every "draw until valid" loop is unbounded by default. Impossible requests
//! (more unique values than a range holds, more distinct problems than a
//! batch can contain) block forever unless a [`RetryLimit::Capped`] is set,
//! in which case they fail with [`DrillError::RetryLimitExceeded`].
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{generate_worksheet, worksheet, WorksheetConfig};
//!
//! let config = WorksheetConfig { rng_seed: Some(42), ..WorksheetConfig::default() };
//! let sheet = generate_worksheet(&config).unwrap();
//! print!("{}", worksheet::render_text(&sheet, false));
//! ```

pub mod drill_engine;
pub mod worksheet;

// Convenience re-exports so callers can use `arith_drill_gen::unique_problems`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    build_batch, generate_problems, generate_worksheet, random_operands, unique_operands,
    unique_problems, DrillError, DrillRequest, Equation, Operand, OperandPair, Problem,
    ProblemKind, Result, RetryLimit, Section, Worksheet, WorksheetConfig,
};
