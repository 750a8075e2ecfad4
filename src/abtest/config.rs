// Configuration for A/B significance testing
//
// The only tunables are the significance threshold and the minimum sample
// size. Thresholds are validated up front so a bad alpha is reported
// before any data is touched.

use serde::{Deserialize, Serialize};

use crate::abtest::error::{AbTestError, Result};

/// Configuration for an A/B comparison
///
/// # Example
/// ```
/// use cotejo::abtest::ExperimentConfig;
///
/// let config = ExperimentConfig::default();
/// assert_eq!(config.alpha, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Statistical significance level (alpha) for the two-tailed z-test
    ///
    /// - 0.05 (default): 95% confidence level
    /// - 0.01: 99% confidence, stricter (fewer false positives)
    /// - 0.10: 90% confidence, looser (catches weaker effects)
    ///
    /// Must lie strictly in (0, 1).
    pub alpha: f64,

    /// Minimum number of scores accepted per sample
    ///
    /// The z-test needs at least 2 scores per sample to estimate a
    /// variance; larger minimums buy reliability (Central Limit Theorem).
    pub min_sample_size: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,        // 95% confidence (standard in science)
            min_sample_size: 2, // Hard floor for variance estimation
        }
    }
}

impl ExperimentConfig {
    /// Strict configuration: fewer false positives, more false negatives
    ///
    /// Use when a declared winner triggers an expensive rollout.
    pub fn strict() -> Self {
        Self {
            alpha: 0.01, // 99% confidence
            min_sample_size: 5,
        }
    }

    /// Permissive configuration: catches weaker effects earlier
    pub fn permissive() -> Self {
        Self {
            alpha: 0.10, // 90% confidence
            min_sample_size: 2,
        }
    }

    /// Validate configuration
    ///
    /// Alpha must lie strictly inside (0, 1): alpha = 0 can never declare
    /// significance and alpha >= 1 always would, so both are caller bugs.
    pub fn validate(&self) -> Result<()> {
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(AbTestError::InvalidConfig {
                reason: format!("alpha must be in (0, 1), got {}", self.alpha),
            });
        }

        if self.min_sample_size < 2 {
            return Err(AbTestError::InvalidConfig {
                reason: format!(
                    "min_sample_size must be >= 2 for a z-test, got {}",
                    self.min_sample_size
                ),
            });
        }

        Ok(())
    }
}
