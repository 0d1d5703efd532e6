use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Problem kinds
// ---------------------------------------------------------------------------

/// The four operators a drill can practise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl ProblemKind {
    /// Canonical worksheet order.
    pub const ALL: [ProblemKind; 4] = [
        ProblemKind::Addition,
        ProblemKind::Subtraction,
        ProblemKind::Multiplication,
        ProblemKind::Division,
    ];

    /// Short tag accepted by [`FromStr`]: `+`, `-`, `x` or `/`.
    pub fn tag(self) -> &'static str {
        match self {
            ProblemKind::Addition       => "+",
            ProblemKind::Subtraction    => "-",
            ProblemKind::Multiplication => "x",
            ProblemKind::Division       => "/",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemKind::Addition       => "Addition",
            ProblemKind::Subtraction    => "Subtraction",
            ProblemKind::Multiplication => "Multiplication",
            ProblemKind::Division       => "Division",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ProblemKind {
    type Err = DrillError;

    /// Accepts the short tags and the full operator names (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "addition"       => Ok(ProblemKind::Addition),
            "-" | "subtraction"    => Ok(ProblemKind::Subtraction),
            "x" | "multiplication" => Ok(ProblemKind::Multiplication),
            "/" | "division"       => Ok(ProblemKind::Division),
            _ => Err(DrillError::UnknownKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem shapes
// ---------------------------------------------------------------------------

/// One displayed operand of a fill-in-the-blank equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    Known(u32),
    Unknown,
}

impl Operand {
    pub fn value(self) -> Option<u32> {
        match self {
            Operand::Known(v) => Some(v),
            Operand::Unknown  => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Operand::Unknown)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Known(v) => write!(f, "{}", v),
            Operand::Unknown  => write!(f, "X"),
        }
    }
}

/// `left op right = result` with exactly one side masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equation {
    pub left: Operand,
    pub right: Operand,
    pub result: u32,
}

/// Two raw operands. For division this is `(dividend, divisor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandPair {
    pub first: u32,
    pub second: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Problem {
    Addition(Equation),
    Subtraction(Equation),
    Multiplication(OperandPair),
    Division(OperandPair),
}

impl Problem {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Problem::Addition(_)       => ProblemKind::Addition,
            Problem::Subtraction(_)    => ProblemKind::Subtraction,
            Problem::Multiplication(_) => ProblemKind::Multiplication,
            Problem::Division(_)       => ProblemKind::Division,
        }
    }

    /// The number a student is expected to write down.
    ///
    /// Equations answer with the masked operand; pairs answer with the
    /// product or quotient.
    ///
    /// `None` when the problem has no whole-number answer: both or neither
    /// side masked, a negative hidden operand, overflow, or a zero divisor.
    pub fn answer(&self) -> Option<u32> {
        match *self {
            Problem::Addition(eq) => match (eq.left, eq.right) {
                (Operand::Unknown, Operand::Known(b)) => eq.result.checked_sub(b),
                (Operand::Known(a), Operand::Unknown) => eq.result.checked_sub(a),
                _ => None,
            },
            Problem::Subtraction(eq) => match (eq.left, eq.right) {
                (Operand::Unknown, Operand::Known(b)) => eq.result.checked_add(b),
                (Operand::Known(a), Operand::Unknown) => a.checked_sub(eq.result),
                _ => None,
            },
            Problem::Multiplication(p) => p.first.checked_mul(p.second),
            Problem::Division(p) => p.first.checked_div(p.second),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests / worksheets
// ---------------------------------------------------------------------------

/// How many times a regenerate-until loop may try before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetryLimit {
    /// Keep regenerating until the condition holds, however long that takes.
    #[default]
    Unbounded,
    /// Give up with [`DrillError::RetryLimitExceeded`] after this many attempts.
    Capped(u32),
}

impl RetryLimit {
    /// Whether `attempts` already used up the allowance.
    pub fn exhausted(self, attempts: u32) -> bool {
        match self {
            RetryLimit::Unbounded  => false,
            RetryLimit::Capped(n)  => attempts >= n,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub kind: ProblemKind,
    /// Minimum number of distinct problems in the returned batch.
    pub count: usize,
    pub rng_seed: Option<u64>,
    pub retry_limit: RetryLimit,
}

impl DrillRequest {
    /// Entropy-seeded, unbounded request for `count` problems of `kind`.
    pub fn new(kind: ProblemKind, count: usize) -> Self {
        Self { kind, count, rng_seed: None, retry_limit: RetryLimit::Unbounded }
    }
}

/// Per-kind problem counts plus generation knobs for a full worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    pub addition: usize,
    pub subtraction: usize,
    pub multiplication: usize,
    pub division: usize,
    pub rng_seed: Option<u64>,
    pub retry_limit: RetryLimit,
}

impl WorksheetConfig {
    pub fn count_for(&self, kind: ProblemKind) -> usize {
        match kind {
            ProblemKind::Addition       => self.addition,
            ProblemKind::Subtraction    => self.subtraction,
            ProblemKind::Multiplication => self.multiplication,
            ProblemKind::Division       => self.division,
        }
    }
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            addition: 5,
            subtraction: 5,
            multiplication: 10,
            division: 10,
            rng_seed: None,
            retry_limit: RetryLimit::Unbounded,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub kind: ProblemKind,
    pub problems: Vec<Problem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub rng_seed: Option<u64>,
    pub sections: Vec<Section>,
}
