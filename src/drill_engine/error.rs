use thiserror::Error;

/// Everything that can go wrong while building a drill.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("must generate at least 1 problem")]
    InvalidCount,

    #[error("invalid problem type: {0:?} (expected one of \"+\", \"-\", \"x\", \"/\")")]
    UnknownKind(String),

    #[error("empty operand range: low {low} is above high {high}")]
    InvalidRange { low: u32, high: u32 },

    /// A regenerate-until loop gave up under a [`RetryLimit::Capped`] policy.
    ///
    /// [`RetryLimit::Capped`]: crate::drill_engine::RetryLimit::Capped
    #[error("{stage}: condition not met after {attempts} attempts")]
    RetryLimitExceeded { stage: &'static str, attempts: u32 },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;
