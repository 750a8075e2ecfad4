// Statistical A/B comparison with two-sample z-tests
//
// Given two named collections of evaluation scores, this module decides
// whether one variant is measurably better than the other, with what
// confidence, and by how much: z-statistic and two-tailed p-value,
// Cohen's d effect size, relative lift, and an explicit winner policy.
//
// Scientific Foundation:
// - Cohen, J. (1988). Statistical Power Analysis for the Behavioral
//   Sciences. Standardized mean difference over pooled std deviation.
// - Abramowitz, M. & Stegun, I. (1964). Handbook of Mathematical
//   Functions, 7.1.26. Erf-based normal CDF (max error 1.5e-7) instead
//   of a lookup table: decisions are threshold-sensitive near p = alpha.
//
// The engine is purely functional: immutable inputs, no I/O, no shared
// state. Independent comparisons may run on any number of threads with
// zero coordination.

mod config;
mod error;
mod statistics;
mod verdict;

pub use config::ExperimentConfig;
pub use error::{AbTestError, Result};
pub use statistics::{
    cohens_d, summarize, two_tailed_p, z_test, ScoreSample, VariantSummary, ZTest,
};
pub use verdict::{compare, ComparisonResult, Winner};
