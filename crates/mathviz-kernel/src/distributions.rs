//! Probability densities and the normal CDF.
//!
//! Densities assume valid parameters (`std > 0`, `lambda > 0`, `a < b`);
//! outside that domain they return whatever IEEE-754 arithmetic yields.
//! Use [`DistributionParams::validate`] to check parameters up front.

use std::f64::consts::{PI, SQRT_2};
use std::str::FromStr;

use itertools_num::linspace;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

pub fn normal_pdf(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (1.0 / (std * (2.0 * PI).sqrt())) * (-0.5 * z * z).exp()
}

pub fn exponential_pdf(x: f64, lambda: f64) -> f64 {
    if x >= 0.0 {
        lambda * (-lambda * x).exp()
    } else {
        0.0
    }
}

pub fn uniform_pdf(x: f64, a: f64, b: f64) -> f64 {
    if x >= a && x <= b {
        1.0 / (b - a)
    } else {
        0.0
    }
}

/// Standard normal CDF, Abramowitz & Stegun formula 7.1.26.
///
/// Absolute error is below 1.5e-7 over the whole real line.
pub fn normal_cdf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / SQRT_2;

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    0.5 * (1.0 + sign * y)
}

/// Parameters of the distributions the density view can draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionParams {
    Normal { mean: f64, std: f64 },
    Exponential { lambda: f64 },
    Uniform { a: f64, b: f64 },
}

impl Default for DistributionParams {
    fn default() -> Self {
        DistributionParams::Normal {
            mean: 0.0,
            std: 1.0,
        }
    }
}

impl DistributionParams {
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            DistributionParams::Normal { mean, std } => normal_pdf(x, mean, std),
            DistributionParams::Exponential { lambda } => exponential_pdf(x, lambda),
            DistributionParams::Uniform { a, b } => uniform_pdf(x, a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DistributionParams::Normal { .. } => "normal",
            DistributionParams::Exponential { .. } => "exponential",
            DistributionParams::Uniform { .. } => "uniform",
        }
    }

    pub fn mean(&self) -> f64 {
        match *self {
            DistributionParams::Normal { mean, .. } => mean,
            DistributionParams::Exponential { lambda } => 1.0 / lambda,
            DistributionParams::Uniform { a, b } => (a + b) / 2.0,
        }
    }

    pub fn variance(&self) -> f64 {
        match *self {
            DistributionParams::Normal { std, .. } => std * std,
            DistributionParams::Exponential { lambda } => 1.0 / (lambda * lambda),
            DistributionParams::Uniform { a, b } => (b - a).powi(2) / 12.0,
        }
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        match *self {
            DistributionParams::Normal { mean, std } => {
                finite("mean", mean)?;
                finite("std", std)?;
                if std <= 0.0 {
                    return Err(KernelError::invalid("std", std, "must be positive"));
                }
            }
            DistributionParams::Exponential { lambda } => {
                finite("lambda", lambda)?;
                if lambda <= 0.0 {
                    return Err(KernelError::invalid("lambda", lambda, "must be positive"));
                }
            }
            DistributionParams::Uniform { a, b } => {
                finite("a", a)?;
                finite("b", b)?;
                if a >= b {
                    return Err(KernelError::invalid("b", b, "must be greater than a"));
                }
            }
        }
        Ok(())
    }

    /// Horizontal range worth plotting.
    pub fn plot_range(&self) -> (f64, f64) {
        match *self {
            DistributionParams::Normal { mean, std } => (mean - 4.0 * std, mean + 4.0 * std),
            DistributionParams::Exponential { lambda } => (0.0, 5.0 / lambda + 2.0),
            DistributionParams::Uniform { a, b } => (a - 1.0, b + 1.0),
        }
    }

    /// `(x, pdf(x))` at `points` evenly spaced positions across [`plot_range`](Self::plot_range).
    pub fn sample_curve(&self, points: usize) -> Vec<(f64, f64)> {
        let (lo, hi) = self.plot_range();
        linspace(lo, hi, points).map(|x| (x, self.pdf(x))).collect()
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KernelError::invalid(name, value, "must be finite"))
    }
}

impl FromStr for DistributionParams {
    type Err = KernelError;

    /// Parses a distribution name into its default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "gaussian" => Ok(DistributionParams::Normal {
                mean: 0.0,
                std: 1.0,
            }),
            "exponential" | "exp" => Ok(DistributionParams::Exponential { lambda: 3.0 }),
            "uniform" => Ok(DistributionParams::Uniform { a: 0.0, b: 5.0 }),
            _ => Err(KernelError::UnknownDistribution(s.to_string())),
        }
    }
}
