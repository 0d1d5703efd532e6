//! Core drill engine: operand drawing, per-operator builders and the
//! distinct-problem loop.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: problem kinds, operands, problems, requests, worksheets |
//! | `error`     | `DrillError` and the crate `Result` alias |
//! | `operands`  | Uniform operand draws, with or without repeats |
//! | `helpers`   | The regenerate-until loop, uniqueness checks, unknown-masking |
//! | `builders`  | One batch builder per operator, each with its difficulty tiers |
//! | `generator` | `unique_problems()` and the seeded entry points |

pub mod builders;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod operands;

pub use error::{DrillError, Result};
pub use generator::{build_batch, generate_problems, generate_worksheet, unique_problems};
pub use models::{
    DrillRequest, Equation, Operand, OperandPair, Problem, ProblemKind, RetryLimit, Section,
    Worksheet, WorksheetConfig,
};
pub use operands::{random_operands, unique_operands};
