//! Integration tests for the public A/B comparison API
//!
//! Verifies the end-to-end compare() pipeline against hand-computed
//! reference values, the documented edge-case policies, and the
//! serialization surface.

use cotejo::abtest::{cohens_d, summarize, two_tailed_p};
use cotejo::{compare, AbTestError, ExperimentConfig, ScoreSample, Winner};

fn sample(name: &str, scores: &[f64]) -> ScoreSample {
    ScoreSample::new(name, scores.to_vec()).unwrap()
}

#[test]
fn test_known_reference_values() {
    let a = sample("chain_of_thought", &[0.85, 0.90, 0.88]);
    let b = sample("few_shot", &[0.70, 0.72, 0.68]);

    let result = compare(&a, &b, &ExperimentConfig::default()).unwrap();

    // Hand-computed: mean_a = 2.63/3, var_a = 6.3333e-4, var_b = 4e-4,
    // se = sqrt(var_a/3 + var_b/3) = 0.0185592, z = 9.5191
    assert!((result.mean_a - 0.876_666_666_666_666_7).abs() < 1e-12);
    assert!((result.mean_b - 0.70).abs() < 1e-12);
    assert!((result.std_a - 0.025_166_114_784_235_83).abs() < 1e-9);
    assert!((result.std_b - 0.02).abs() < 1e-9);
    assert_eq!(result.n_a, 3);
    assert_eq!(result.n_b, 3);

    assert!((result.z_statistic - 9.519_081).abs() < 1e-4);
    assert!(result.z_statistic > 0.0);
    assert!(result.p_value < 1e-15);
    assert!(result.significant);

    // Cohen's d over pooled sd = sqrt((2*var_a + 2*var_b) / 4)
    assert!((result.effect_size - 7.772_297).abs() < 1e-4);

    // lift = (mean_b - mean_a) / mean_a * 100
    let lift = result.require_lift().unwrap();
    assert!((lift - (-20.152_091_254_752_86)).abs() < 1e-9);

    assert_eq!(
        result.winner,
        Winner::VariantA("chain_of_thought".to_string())
    );
    assert_eq!(result.winner.label(), "chain_of_thought");
}

#[test]
fn test_degenerate_equal_case() {
    let a = sample("a", &[5.0, 5.0, 5.0]);
    let b = sample("b", &[5.0, 5.0, 5.0]);

    let result = compare(&a, &b, &ExperimentConfig::default()).unwrap();
    assert_eq!(result.z_statistic, 0.0);
    assert_eq!(result.p_value, 1.0);
    assert!(!result.significant);
    assert_eq!(result.winner, Winner::NoSignificantDifference);
}

#[test]
fn test_insufficient_sample_rejected() {
    let a = sample("a", &[0.9]);
    let b = sample("b", &[0.5, 0.6]);

    let err = compare(&a, &b, &ExperimentConfig::default()).unwrap_err();
    assert!(matches!(err, AbTestError::InsufficientSample { .. }));
}

#[test]
fn test_alpha_validated_before_data() {
    let a = sample("a", &[0.9, 0.8]);
    let b = sample("b", &[0.5, 0.6]);

    for alpha in [0.0, 1.5, -0.1] {
        let config = ExperimentConfig {
            alpha,
            ..ExperimentConfig::default()
        };
        let err = compare(&a, &b, &config).unwrap_err();
        assert!(
            matches!(err, AbTestError::InvalidConfig { .. }),
            "alpha {alpha} should be rejected as InvalidConfig"
        );
    }
}

#[test]
fn test_effect_size_sign_convention() {
    // A below B is negative
    let a = summarize(&sample("a", &[1.0, 1.0, 1.2])).unwrap();
    let b = summarize(&sample("b", &[2.0, 2.0, 2.2])).unwrap();

    let d_ab = cohens_d(&a, &b).unwrap();
    let d_ba = cohens_d(&b, &a).unwrap();
    assert!(d_ab < 0.0);
    assert_eq!(d_ab, -d_ba);
}

#[test]
fn test_symmetry_of_compare() {
    let a = sample("a", &[0.85, 0.90, 0.88, 0.91]);
    let b = sample("b", &[0.70, 0.72, 0.68]);
    let config = ExperimentConfig::default();

    let ab = compare(&a, &b, &config).unwrap();
    let ba = compare(&b, &a, &config).unwrap();

    assert_eq!(ab.z_statistic, -ba.z_statistic);
    assert_eq!(ab.p_value, ba.p_value);
    assert_eq!(ab.significant, ba.significant);
    assert_eq!(ab.effect_size, -ba.effect_size);
    // Both directions agree on which variant won
    assert_eq!(ab.winner.label(), ba.winner.label());
}

#[test]
fn test_monotonic_significance_with_more_data() {
    // Duplicating both samples holds means fixed and shrinks the standard
    // error: p must strictly decrease for a genuine effect.
    let base_a = vec![1.0, 2.0, 3.0];
    let base_b = vec![2.0, 3.0, 4.0];
    let config = ExperimentConfig::default();

    let mut last_p = f64::INFINITY;
    for copies in 1..=4 {
        let a = sample("a", &base_a.repeat(copies));
        let b = sample("b", &base_b.repeat(copies));
        let result = compare(&a, &b, &config).unwrap();
        assert!(
            result.p_value < last_p,
            "p {} at {copies} copies did not decrease from {last_p}",
            result.p_value
        );
        last_p = result.p_value;
    }
}

#[test]
fn test_result_serializes_to_json() {
    let a = sample("chain_of_thought", &[0.85, 0.90, 0.88]);
    let b = sample("few_shot", &[0.70, 0.72, 0.68]);

    let result = compare(&a, &b, &ExperimentConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["name_a"], "chain_of_thought");
    assert_eq!(json["n_b"], 3);
    assert_eq!(json["significant"], true);
    assert!(json["lift_pct"].as_f64().unwrap() < 0.0);
    assert_eq!(json["winner"]["VariantA"], "chain_of_thought");
}

#[test]
fn test_two_tailed_p_matches_critical_values() {
    // The erf-based CDF must be accurate where decisions are made
    assert!((two_tailed_p(1.959_964) - 0.05).abs() < 1e-4);
    assert!((two_tailed_p(2.575_829) - 0.01).abs() < 1e-4);
}

#[test]
fn test_unequal_sample_sizes_supported() {
    let a = sample("a", &[0.9, 0.8, 0.85, 0.95, 0.88]);
    let b = sample("b", &[0.5, 0.6]);

    let result = compare(&a, &b, &ExperimentConfig::default()).unwrap();
    assert_eq!(result.n_a, 5);
    assert_eq!(result.n_b, 2);
    assert!(result.z_statistic > 0.0);
}
