//! Tests for descriptive statistics, histograms, the sampling experiment and
//! the one-sample hypothesis test.

use std::time::Duration;

use approx::assert_relative_eq;
use mathviz_kernel::stats::{
    mean, population_variance, sample_means, std_dev, summarize_means, Histogram, HypothesisTest,
};
use mathviz_kernel::KernelError;

// ----------------------------------------------------------------------------
// Descriptive statistics
// ----------------------------------------------------------------------------

#[test]
fn test_mean_and_population_variance() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(mean(&values).unwrap(), 5.0);
    assert_relative_eq!(population_variance(&values).unwrap(), 4.0);
    assert_relative_eq!(std_dev(&values).unwrap(), 2.0);
}

#[test]
fn test_empty_sample_has_no_statistics() {
    assert!(mean(&[]).is_none());
    assert!(std_dev(&[]).is_none());
}

// ----------------------------------------------------------------------------
// Histogram
// ----------------------------------------------------------------------------

#[test]
fn test_histogram_puts_maximum_in_last_bin() {
    let hist = Histogram::from_samples(&[0.0, 0.5, 1.0, 2.0], 2).unwrap();
    assert_eq!(hist.counts, vec![2, 2]);
    assert_relative_eq!(hist.bin_width, 1.0);
    assert_eq!(hist.total(), 4);
    assert_eq!(hist.max_count(), 2);
    assert_eq!(hist.centers(), vec![0.5, 1.5]);
}

#[test]
fn test_histogram_constant_sample() {
    let hist = Histogram::from_samples(&[3.0; 5], 4).unwrap();
    assert_eq!(hist.counts, vec![5, 0, 0, 0]);
    assert_eq!(hist.bin_width, 0.0);
}

#[test]
fn test_histogram_rejects_bad_input() {
    assert!(matches!(
        Histogram::from_samples(&[], 10),
        Err(KernelError::EmptySample)
    ));
    assert!(matches!(
        Histogram::from_samples(&[1.0], 0),
        Err(KernelError::InvalidParameter { name: "bins", .. })
    ));
}

// ----------------------------------------------------------------------------
// Sampling experiment
// ----------------------------------------------------------------------------

#[test]
fn test_sample_means_are_reproducible() {
    let first = sample_means(30, 200, 7);
    let second = sample_means(30, 200, 7);
    assert_eq!(first.len(), 200);
    assert_eq!(first, second);
    assert_ne!(first, sample_means(30, 200, 8));
}

#[test]
fn test_sample_means_lie_in_unit_interval() {
    assert!(sample_means(5, 500, 1).iter().all(|m| (0.0..1.0).contains(m)));
}

#[test]
fn test_central_limit_theorem_spread() {
    let means = sample_means(30, 1000, 42);
    let summary = summarize_means(&means, 30, 30).unwrap();

    assert_relative_eq!(summary.mean, 0.5, epsilon = 0.01);
    assert_relative_eq!(summary.expected_std_dev, (1.0f64 / 360.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(summary.std_dev, summary.expected_std_dev, max_relative = 0.15);
    assert_eq!(summary.histogram.counts.len(), 30);
    assert_eq!(summary.histogram.total(), 1000);
}

#[test]
fn test_summarize_empty_means() {
    assert!(matches!(
        summarize_means(&[], 30, 30),
        Err(KernelError::EmptySample)
    ));
}

// ----------------------------------------------------------------------------
// Hypothesis test
// ----------------------------------------------------------------------------

#[test]
fn test_default_hypothesis_fails_to_reject() {
    let outcome = HypothesisTest::default().run();
    assert_relative_eq!(outcome.standard_error, 0.8 / 30f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(outcome.statistic, 1.3693, epsilon = 1e-4);
    assert_relative_eq!(outcome.p_value, 0.1709, epsilon = 1e-3);
    assert!(!outcome.reject);

    let exact = outcome.exact_p_value.unwrap();
    assert!(exact > outcome.p_value);
    assert!(exact < 0.2);
}

#[test]
fn test_large_effect_rejects() {
    let test = HypothesisTest {
        sample_mean: 5.6,
        ..HypothesisTest::default()
    };
    let outcome = test.run();
    assert!(outcome.statistic > 4.0);
    assert!(outcome.reject);
}

#[test]
fn test_hypothesis_validation() {
    assert!(HypothesisTest::default().validate().is_ok());
    let single = HypothesisTest {
        n: 1,
        ..HypothesisTest::default()
    };
    assert!(single.validate().is_err());
    let flat = HypothesisTest {
        sample_std: 0.0,
        ..HypothesisTest::default()
    };
    assert!(flat.validate().is_err());
    let bad_alpha = HypothesisTest {
        alpha: 1.0,
        ..HypothesisTest::default()
    };
    assert!(bad_alpha.validate().is_err());
}

#[test]
fn test_hypothesis_script() {
    let script = HypothesisTest::default().script();
    assert_eq!(script.len(), 10);
    assert_eq!(script.total_duration(), Duration::from_millis(3600));
    let texts = script.texts();
    assert_eq!(texts[0], "H₀: μ = 5.0 (Null Hypothesis)");
    assert_eq!(texts[2], "Sample Mean (x̄) = 5.2");
    assert_eq!(texts[9], "Fail to reject H₀: Insufficient evidence");
}
