// Winner decision for A/B comparisons
//
// Folds descriptive statistics, the two-sample z-test, and Cohen's d into
// a single immutable ComparisonResult, applying the winner policy:
// - p >= alpha: no significant difference, regardless of which mean is
//   numerically larger
// - p < alpha: the variant with the larger mean wins
// Significance with equal means cannot occur (equal means force z = 0,
// p = 1), so no further tie-break exists.

use serde::{Deserialize, Serialize};

use crate::abtest::config::ExperimentConfig;
use crate::abtest::error::{AbTestError, Result};
use crate::abtest::statistics::{cohens_d, summarize, z_test, ScoreSample};

/// Outcome of an A/B comparison
///
/// Carries the winning variant's name, or marks the comparison as
/// inconclusive at the configured significance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Variant A's mean is significantly higher
    VariantA(String),
    /// Variant B's mean is significantly higher
    VariantB(String),
    /// The observed difference is consistent with noise (p >= alpha)
    NoSignificantDifference,
}

impl Winner {
    /// Display label: the winning variant's name, or a neutral marker
    pub fn label(&self) -> &str {
        match self {
            Winner::VariantA(name) | Winner::VariantB(name) => name,
            Winner::NoSignificantDifference => "no significant difference",
        }
    }
}

/// Full result of comparing two score samples
///
/// Constructed once per [`compare`] call and never mutated; owned by the
/// caller. Serde-ready so callers can render it to JSON, a report table,
/// or a dashboard without this crate prescribing a format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Label of variant A, echoed from the input sample
    pub name_a: String,
    /// Label of variant B, echoed from the input sample
    pub name_b: String,
    pub mean_a: f64,
    pub mean_b: f64,
    /// Sample standard deviation of A (Bessel-corrected)
    pub std_a: f64,
    /// Sample standard deviation of B (Bessel-corrected)
    pub std_b: f64,
    pub n_a: usize,
    pub n_b: usize,
    /// z-statistic; sign follows mean_a - mean_b
    pub z_statistic: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Whether p_value < alpha
    pub significant: bool,
    /// Cohen's d, signed (positive when A's mean is higher)
    pub effect_size: f64,
    /// Relative lift of B over A in percent: (mean_b - mean_a) / mean_a * 100
    ///
    /// `None` when the baseline mean is zero; the rest of the result is
    /// still valid. See [`ComparisonResult::require_lift`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift_pct: Option<f64>,
    /// Winner under the configured significance level
    pub winner: Winner,
}

impl ComparisonResult {
    /// Lift of B over A, or `UndefinedLift` when the baseline mean is zero
    ///
    /// Callers that need a numeric lift must supply a non-zero baseline;
    /// everyone else can ignore the `None` and keep the rest of the result.
    pub fn require_lift(&self) -> Result<f64> {
        self.lift_pct.ok_or_else(|| AbTestError::UndefinedLift {
            name: self.name_a.clone(),
        })
    }

    /// Render a human-readable markdown report
    pub fn to_report_string(&self) -> String {
        let mut report = String::from("# A/B Test Results\n\n");

        report.push_str(&format!("**Variant A**: {} (n={})\n", self.name_a, self.n_a));
        report.push_str(&format!(
            "**Variant B**: {} (n={})\n\n",
            self.name_b, self.n_b
        ));

        report.push_str("| Metric | Variant A | Variant B |\n");
        report.push_str("|--------|-----------|-----------|\n");
        report.push_str(&format!(
            "| Mean | {:.4} | {:.4} |\n",
            self.mean_a, self.mean_b
        ));
        report.push_str(&format!(
            "| Std Dev | {:.4} | {:.4} |\n",
            self.std_a, self.std_b
        ));
        report.push_str(&format!("| N | {} | {} |\n\n", self.n_a, self.n_b));

        report.push_str(&format!("**Z-Statistic**: {:.4}\n", self.z_statistic));
        report.push_str(&format!("**P-Value**: {:.6}\n", self.p_value));
        report.push_str(&format!(
            "**Significant**: {}\n",
            if self.significant { "Yes" } else { "No" }
        ));
        report.push_str(&format!("**Effect Size (Cohen's d)**: {:.4}\n", self.effect_size));
        report.push_str(&format!("**Winner**: {}\n", self.winner.label()));

        match self.lift_pct {
            Some(lift) => report.push_str(&format!("**Lift**: {:+.2}%\n", lift)),
            None => report.push_str("**Lift**: undefined (baseline mean is zero)\n"),
        }

        report
    }
}

/// Compare two score samples with a two-sample z-test
///
/// Validates the configuration before touching any data, then checks both
/// samples against `min_sample_size`, runs descriptive statistics, the
/// z-test, and Cohen's d, and applies the winner policy. Pure computation:
/// no side effects, inputs are never mutated.
///
/// # Errors
/// - `InvalidConfig` if `alpha` is outside (0, 1) or `min_sample_size < 2`
/// - `InsufficientSample` if either sample is shorter than
///   `min_sample_size`
///
/// # Example
/// ```
/// use cotejo::abtest::{compare, ExperimentConfig, ScoreSample, Winner};
///
/// let a = ScoreSample::new("chain_of_thought", vec![0.85, 0.90, 0.88]).unwrap();
/// let b = ScoreSample::new("few_shot", vec![0.70, 0.72, 0.68]).unwrap();
///
/// let result = compare(&a, &b, &ExperimentConfig::default()).unwrap();
/// assert!(result.significant);
/// assert_eq!(result.winner, Winner::VariantA("chain_of_thought".to_string()));
/// ```
pub fn compare(
    sample_a: &ScoreSample,
    sample_b: &ScoreSample,
    config: &ExperimentConfig,
) -> Result<ComparisonResult> {
    // Config is checked first: a bad alpha is reported before any data
    // is touched.
    config.validate()?;

    for sample in [sample_a, sample_b] {
        if sample.len() < config.min_sample_size {
            return Err(AbTestError::InsufficientSample {
                name: sample.name().to_string(),
                required: config.min_sample_size,
                actual: sample.len(),
            });
        }
    }

    let a = summarize(sample_a)?;
    let b = summarize(sample_b)?;

    let test = z_test(&a, &b);
    let effect_size = cohens_d(&a, &b)?;
    let significant = test.p_value < config.alpha;

    let lift_pct = if a.mean != 0.0 {
        Some((b.mean - a.mean) / a.mean * 100.0)
    } else {
        tracing::debug!(baseline = %a.name, "baseline mean is zero, lift undefined");
        None
    };

    let winner = if !significant {
        Winner::NoSignificantDifference
    } else if a.mean > b.mean {
        Winner::VariantA(a.name.clone())
    } else {
        // Equal means cannot reach this branch: z = 0 gives p = 1
        Winner::VariantB(b.name.clone())
    };

    Ok(ComparisonResult {
        name_a: a.name,
        name_b: b.name,
        mean_a: a.mean,
        mean_b: b.mean,
        std_a: a.std_dev,
        std_b: b.std_dev,
        n_a: a.n,
        n_b: b.n,
        z_statistic: test.z_statistic,
        p_value: test.p_value,
        significant,
        effect_size,
        lift_pct,
        winner,
    })
}
