use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::distributions::normal_cdf;
use crate::error::KernelError;
use crate::script::{Script, Tone};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Variance with denominator `n`.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    Some(values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64)
}

pub fn std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Equal-width histogram spanning the sample range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the samples into `bins` equal-width buckets between the sample
    /// minimum and maximum.
    ///
    /// A value `x` lands in bucket `min(floor((x - min) / width), bins - 1)`,
    /// so the maximum is counted in the last bucket. If every sample is
    /// equal the width is zero and everything lands in the first bucket.
    ///
    /// # Arguments
    ///
    /// * `samples` - Values to bin. Must not be empty.
    /// * `bins` - Number of buckets. Must be at least one.
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, KernelError> {
        if samples.is_empty() {
            return Err(KernelError::EmptySample);
        }
        if bins == 0 {
            return Err(KernelError::invalid("bins", 0.0, "at least one bin is required"));
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &x in samples {
            let idx = if bin_width > 0.0 {
                (((x - min) / bin_width).floor() as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Ok(Histogram {
            min,
            max,
            bin_width,
            counts,
        })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Center of each bucket.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.counts.len())
            .map(|i| self.min + (i as f64 + 0.5) * self.bin_width)
            .collect()
    }
}

/// Means of `samples` independent samples of `sample_size` Uniform[0, 1)
/// draws each, the experiment behind the central limit theorem view.
///
/// Sample `i` draws from its own generator seeded with `seed + i`, so the
/// result depends only on the arguments and not on how rayon schedules the
/// work.
pub fn sample_means(sample_size: usize, samples: usize, seed: u64) -> Vec<f64> {
    log::debug!(
        "drawing {} samples of size {} (seed {})",
        samples,
        sample_size,
        seed
    );
    (0..samples)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let sum: f64 = (0..sample_size).map(|_| rng.gen::<f64>()).sum();
            sum / sample_size as f64
        })
        .collect()
}

/// Summary of a sample-means experiment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SamplingSummary {
    pub mean: f64,
    pub std_dev: f64,
    /// Standard deviation predicted by the CLT for Uniform[0, 1) draws.
    pub expected_std_dev: f64,
    pub histogram: Histogram,
}

pub fn summarize_means(
    means: &[f64],
    sample_size: usize,
    bins: usize,
) -> Result<SamplingSummary, KernelError> {
    let histogram = Histogram::from_samples(means, bins)?;
    let center = mean(means).ok_or(KernelError::EmptySample)?;
    let spread = std_dev(means).ok_or(KernelError::EmptySample)?;
    Ok(SamplingSummary {
        mean: center,
        std_dev: spread,
        expected_std_dev: (1.0 / 12.0f64).sqrt() / (sample_size as f64).sqrt(),
        histogram,
    })
}

/// Two-sided one-sample test of `H₀: μ = null_mean`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisTest {
    pub sample_mean: f64,
    pub null_mean: f64,
    pub sample_std: f64,
    pub n: usize,
    pub alpha: f64,
}

impl Default for HypothesisTest {
    fn default() -> Self {
        Self {
            sample_mean: 5.2,
            null_mean: 5.0,
            sample_std: 0.8,
            n: 30,
            alpha: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TestOutcome {
    pub standard_error: f64,
    pub statistic: f64,
    /// Normal approximation `2(1 - Φ(|t|))`.
    pub p_value: f64,
    /// Student-t with `n - 1` degrees of freedom, when defined.
    pub exact_p_value: Option<f64>,
    /// Decided on the approximate `p_value`.
    pub reject: bool,
}

impl HypothesisTest {
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.n < 2 {
            return Err(KernelError::invalid(
                "n",
                self.n as f64,
                "at least two observations are required",
            ));
        }
        if !(self.sample_std > 0.0) {
            return Err(KernelError::invalid(
                "sample_std",
                self.sample_std,
                "must be positive",
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(KernelError::invalid("alpha", self.alpha, "must lie in (0, 1)"));
        }
        Ok(())
    }

    pub fn run(&self) -> TestOutcome {
        let standard_error = self.sample_std / (self.n as f64).sqrt();
        let statistic = (self.sample_mean - self.null_mean) / standard_error;
        let p_value = 2.0 * (1.0 - normal_cdf(statistic.abs()));

        let exact_p_value = StudentsT::new(0.0, 1.0, self.n as f64 - 1.0)
            .ok()
            .map(|t| 2.0 * (1.0 - t.cdf(statistic.abs())))
            .filter(|p| p.is_finite());

        TestOutcome {
            standard_error,
            statistic,
            p_value,
            exact_p_value,
            reject: p_value < self.alpha,
        }
    }

    /// The worked test as a sequence of lines revealed every 400 ms.
    pub fn script(&self) -> Script {
        let outcome = self.run();
        let verdict = if outcome.reject {
            (
                format!(
                    "Reject H₀: Evidence suggests μ ≠ {:.1}",
                    self.null_mean
                ),
                Tone::Success,
            )
        } else {
            (
                "Fail to reject H₀: Insufficient evidence".to_string(),
                Tone::Attack,
            )
        };

        Script::evenly_spaced(
            [
                (format!("H₀: μ = {:.1} (Null Hypothesis)", self.null_mean), Tone::Info),
                (format!("H₁: μ ≠ {:.1} (Alternative Hypothesis)", self.null_mean), Tone::Info),
                (format!("Sample Mean (x̄) = {}", self.sample_mean), Tone::Highlight),
                (format!("Sample Size (n) = {}", self.n), Tone::Highlight),
                (format!("Sample Std Dev (s) = {}", self.sample_std), Tone::Highlight),
                (
                    format!("Standard Error = s/√n = {:.4}", outcome.standard_error),
                    Tone::Warning,
                ),
                (
                    format!("t-statistic = (x̄ - μ₀)/SE = {:.4}", outcome.statistic),
                    Tone::Warning,
                ),
                (format!("p-value ≈ {:.4}", outcome.p_value), Tone::Attack),
                (format!("α = {}", self.alpha), Tone::Highlight),
                verdict,
            ],
            Duration::from_millis(400),
        )
    }
}
