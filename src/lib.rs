//! Cotejo - Statistical A/B comparison engine
//!
//! Given two named collections of numeric evaluation scores (e.g., from
//! two prompt variants), this library determines whether one is measurably
//! better than the other, with what confidence, and by how much:
//!
//! - Two-sample z-test with an erf-based normal CDF
//! - Cohen's d effect size over pooled variance
//! - Relative lift and an explicit winner policy under uncertainty
//! - Deterministic hash-based variant assignment (no assignment table)
//!
//! The engine does not collect scores, correct for multiple hypotheses,
//! or persist results; it is a pure, synchronous computation over
//! immutable inputs, safe to call from any number of threads.
//!
//! # Example
//! ```
//! use cotejo::{compare, ExperimentConfig, ScoreSample};
//!
//! let a = ScoreSample::new("chain_of_thought", vec![0.85, 0.90, 0.88])?;
//! let b = ScoreSample::new("few_shot", vec![0.70, 0.72, 0.68])?;
//!
//! let result = compare(&a, &b, &ExperimentConfig::default())?;
//! println!("{}", result.to_report_string());
//! # Ok::<(), cotejo::AbTestError>(())
//! ```

pub mod abtest;
pub mod assignment;

pub use abtest::{compare, AbTestError, ComparisonResult, ExperimentConfig, ScoreSample, Winner};
pub use assignment::assign_variant;
