// Statistical primitives for A/B comparison
//
// Two-sample z-test over summary statistics, Cohen's d effect size over
// pooled variance, and an erf-based standard normal CDF.
//
// Scientific Foundation:
// - Two-tailed p-values from the standard normal distribution, computed
//   with the Abramowitz & Stegun 7.1.26 rational approximation
//   (max error 1.5e-7). A coarse lookup table is not acceptable here:
//   significance decisions are threshold-sensitive near p = alpha.
// - Sample variance is Bessel-corrected (n - 1 denominator).
// - Cohen, J. (1988): standardized mean difference over pooled std dev.
//
// Zero-variance policy: the textbook z formula is undefined when both
// samples are constant (se = 0). Equal means are reported as z = 0,
// p = 1.0 (two identical constant samples show no detectable difference);
// unequal means as a signed infinite z with p = 0.0 (a deterministic mean
// shift with no variance is certainty given the data as presented). The
// sign follows mean_a - mean_b so the swap-symmetry law still holds.

use serde::{Deserialize, Serialize};

use crate::abtest::error::{AbTestError, Result};

/// A named, immutable collection of evaluation scores for one variant
///
/// Construction validates that the collection is non-empty and that every
/// score is finite; statistics over the sample are computed on demand and
/// never mutate it. Deliberately not `Deserialize`: deserialization would
/// bypass the constructor's validation.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSample {
    name: String,
    scores: Vec<f64>,
}

impl ScoreSample {
    /// Create a sample from a variant name and its scores
    ///
    /// # Errors
    /// - `InsufficientSample` if `scores` is empty
    /// - `NonFiniteScore` if any score is NaN or infinite
    ///
    /// # Example
    /// ```
    /// use cotejo::abtest::ScoreSample;
    ///
    /// let sample = ScoreSample::new("chain_of_thought", vec![0.85, 0.90, 0.88]).unwrap();
    /// assert_eq!(sample.len(), 3);
    /// assert!(ScoreSample::new("empty", vec![]).is_err());
    /// ```
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Result<Self> {
        let name = name.into();

        if scores.is_empty() {
            return Err(AbTestError::InsufficientSample {
                name,
                required: 1,
                actual: 0,
            });
        }

        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(AbTestError::NonFiniteScore { name, value: *bad });
        }

        Ok(Self { name, scores })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Always false: construction rejects empty collections
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Descriptive statistics for one variant's scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSummary {
    /// Variant name echoed from the sample
    pub name: String,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample variance (Bessel-corrected, n - 1 denominator)
    pub variance: f64,
    /// Sample standard deviation (sqrt of the sample variance)
    pub std_dev: f64,
    /// Number of scores
    pub n: usize,
}

/// Result of a two-sample z-test
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZTest {
    /// z-statistic; sign follows mean_a - mean_b
    pub z_statistic: f64,
    /// Two-tailed p-value under the standard normal distribution
    pub p_value: f64,
}

/// Compute mean, sample variance, and count for a score sample
///
/// # Errors
/// `InsufficientSample` for fewer than 2 scores: the n - 1 variance
/// denominator is undefined for a single observation.
pub fn summarize(sample: &ScoreSample) -> Result<VariantSummary> {
    let n = sample.len();
    if n < 2 {
        return Err(AbTestError::InsufficientSample {
            name: sample.name().to_string(),
            required: 2,
            actual: n,
        });
    }

    let count = n as f64;
    let mean = sample.scores().iter().sum::<f64>() / count;
    let sum_sq: f64 = sample
        .scores()
        .iter()
        .map(|s| {
            let d = s - mean;
            d * d
        })
        .sum();
    let variance = sum_sq / (count - 1.0);

    Ok(VariantSummary {
        name: sample.name().to_string(),
        mean,
        variance,
        std_dev: variance.sqrt(),
        n,
    })
}

/// Two-sample z-test over summary statistics
///
/// Standard error is `sqrt(var_a / n_a + var_b / n_b)`; the z-statistic is
/// `(mean_a - mean_b) / se` and the p-value is two-tailed. See the module
/// header for the zero-variance policy when `se == 0`.
///
/// Swapping the arguments negates the z-statistic and leaves the p-value
/// unchanged.
pub fn z_test(a: &VariantSummary, b: &VariantSummary) -> ZTest {
    let se = (a.variance / a.n as f64 + b.variance / b.n as f64).sqrt();

    if se == 0.0 {
        // Both samples are constant; the textbook formula is undefined.
        tracing::debug!(
            variant_a = %a.name,
            variant_b = %b.name,
            "zero pooled standard error, applying degenerate-variance policy"
        );
        return if a.mean == b.mean {
            ZTest {
                z_statistic: 0.0,
                p_value: 1.0,
            }
        } else {
            ZTest {
                z_statistic: (a.mean - b.mean).signum() * f64::INFINITY,
                p_value: 0.0,
            }
        };
    }

    let z = (a.mean - b.mean) / se;
    ZTest {
        z_statistic: z,
        p_value: two_tailed_p(z),
    }
}

/// Cohen's d: standardized mean difference over pooled standard deviation
///
/// `sd_pooled = sqrt(((n_a - 1) * var_a + (n_b - 1) * var_b) / (n_a + n_b - 2))`,
/// `d = (mean_a - mean_b) / sd_pooled`. Positive when A's mean is higher.
///
/// Zero pooled deviation mirrors the z-test policy: 0.0 for equal means,
/// signed infinity for a deterministic mean shift.
///
/// # Errors
/// `InsufficientSample` when `n_a + n_b < 3` (the pooled-variance
/// denominator would be zero or negative).
pub fn cohens_d(a: &VariantSummary, b: &VariantSummary) -> Result<f64> {
    if a.n + b.n < 3 {
        return Err(AbTestError::InsufficientSample {
            name: format!("{} vs {}", a.name, b.name),
            required: 3,
            actual: a.n + b.n,
        });
    }

    let dof = (a.n + b.n - 2) as f64;
    let pooled_var = ((a.n - 1) as f64 * a.variance + (b.n - 1) as f64 * b.variance) / dof;
    let sd_pooled = pooled_var.sqrt();

    if sd_pooled == 0.0 {
        return Ok(if a.mean == b.mean {
            0.0
        } else {
            (a.mean - b.mean).signum() * f64::INFINITY
        });
    }

    Ok((a.mean - b.mean) / sd_pooled)
}

/// Two-tailed p-value for a z-statistic under the standard normal
///
/// `p = 2 * (1 - Phi(|z|)) = erfc(|z| / sqrt(2))`, computed with the
/// Abramowitz & Stegun 7.1.26 rational approximation (max error 1.5e-7).
///
/// `z == 0` returns exactly 1.0 (the polynomial evaluates to 0.999999999,
/// which would break the equal-constant-samples contract); infinite z
/// returns 0.0.
pub fn two_tailed_p(z: f64) -> f64 {
    if z == 0.0 {
        return 1.0;
    }
    if z.is_infinite() {
        return 0.0;
    }

    // Abramowitz & Stegun, Handbook of Mathematical Functions, 7.1.26
    const P: f64 = 0.327_591_1;
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;

    let x = z.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * x);
    let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    (poly * (-x * x).exp()).clamp(0.0, 1.0)
}
