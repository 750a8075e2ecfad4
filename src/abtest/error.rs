// Error taxonomy for A/B comparisons
//
// Every error here is a recoverable, caller-reportable condition
// ("collect more samples", "fix alpha") - there is no fatal failure mode.
// Zero-variance inputs are a documented policy branch in `statistics`,
// not an error, and are never reinterpreted as InsufficientSample.

use thiserror::Error;

/// Errors for A/B comparison operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbTestError {
    /// A sample is too small for the requested statistic
    #[error("insufficient sample for {name}: need at least {required} scores, got {actual}")]
    InsufficientSample {
        name: String,
        required: usize,
        actual: usize,
    },

    /// Configuration failed validation before any statistic was computed
    #[error("invalid experiment config: {reason}")]
    InvalidConfig { reason: String },

    /// A score is NaN or infinite and would poison every downstream statistic
    #[error("sample {name} contains non-finite score {value}")]
    NonFiniteScore { name: String, value: f64 },

    /// Lift is undefined because the baseline mean is zero
    ///
    /// Raised only by [`crate::abtest::ComparisonResult::require_lift`];
    /// the comparison itself still completes with lift reported as `None`.
    #[error("lift is undefined: baseline mean of {name} is zero")]
    UndefinedLift { name: String },
}

pub type Result<T> = std::result::Result<T, AbTestError>;
